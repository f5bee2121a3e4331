//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use bandservice_core::music::{Artist, Band, Person, PersonFields};
use bandservice_core::storage::{Record, RepositoryError};

// ============================================================================
// Attribute names
// ============================================================================

pub const PARTITION_KEY_ATTR: &str = "id";
pub const SORT_KEY_ATTR: &str = "sortId";

/// A record that can be stored as a DynamoDB item.
pub trait DynamoItem: Record {
    /// Convert the record to a DynamoDB item.
    fn to_item(&self) -> HashMap<String, AttributeValue>;

    /// Convert a DynamoDB item to the record.
    fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Self, RepositoryError>;
}

// ============================================================================
// Person conversions
// ============================================================================

impl DynamoItem for Person {
    fn to_item(&self) -> HashMap<String, AttributeValue> {
        let mut item = key_item(self);
        put_person_fields(&mut item, &self.fields);
        item
    }

    fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Self, RepositoryError> {
        Ok(Person {
            partition_key: get_string(item, PARTITION_KEY_ATTR)?,
            sort_key: get_string(item, SORT_KEY_ATTR)?,
            fields: get_person_fields(item),
        })
    }
}

// ============================================================================
// Band conversions
// ============================================================================

impl DynamoItem for Band {
    fn to_item(&self) -> HashMap<String, AttributeValue> {
        let mut item = key_item(self);
        put_optional_string(&mut item, "name", self.name.as_ref());
        put_optional_string(&mut item, "genre", self.genre.as_ref());
        item
    }

    fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Self, RepositoryError> {
        Ok(Band {
            partition_key: get_string(item, PARTITION_KEY_ATTR)?,
            sort_key: get_string(item, SORT_KEY_ATTR)?,
            name: get_optional_string(item, "name"),
            genre: get_optional_string(item, "genre"),
        })
    }
}

// ============================================================================
// Artist conversions
// ============================================================================

impl DynamoItem for Artist {
    fn to_item(&self) -> HashMap<String, AttributeValue> {
        let mut item = key_item(self);
        put_person_fields(&mut item, &self.person);
        put_optional_string(&mut item, "nickName", self.nick_name.as_ref());
        if let Some(year) = self.debut_year {
            item.insert("debutYear".to_string(), AttributeValue::N(year.to_string()));
        }
        item
    }

    fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Self, RepositoryError> {
        Ok(Artist {
            partition_key: get_string(item, PARTITION_KEY_ATTR)?,
            sort_key: get_string(item, SORT_KEY_ATTR)?,
            person: get_person_fields(item),
            nick_name: get_optional_string(item, "nickName"),
            debut_year: get_optional_i32(item, "debutYear")?,
        })
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Item holding only the primary key of a record.
pub fn key_item<T: Record>(record: &T) -> HashMap<String, AttributeValue> {
    key_attributes(record.partition_key(), record.sort_key())
}

/// Primary key attributes for a `(partition, sort)` pair.
pub fn key_attributes(partition_key: &str, sort_key: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            PARTITION_KEY_ATTR.to_string(),
            AttributeValue::S(partition_key.to_string()),
        ),
        (
            SORT_KEY_ATTR.to_string(),
            AttributeValue::S(sort_key.to_string()),
        ),
    ])
}

fn put_person_fields(item: &mut HashMap<String, AttributeValue>, fields: &PersonFields) {
    put_optional_string(item, "name", fields.name.as_ref());
    put_optional_string(item, "email", fields.email.as_ref());
    put_optional_string(item, "dateOfBirth", fields.date_of_birth.as_ref());
    put_optional_string(item, "nationality", fields.nationality.as_ref());
}

fn get_person_fields(item: &HashMap<String, AttributeValue>) -> PersonFields {
    PersonFields {
        name: get_optional_string(item, "name"),
        email: get_optional_string(item, "email"),
        date_of_birth: get_optional_string(item, "dateOfBirth"),
        nationality: get_optional_string(item, "nationality"),
    }
}

/// Insert a string attribute when present. Absent values are omitted.
fn put_optional_string(item: &mut HashMap<String, AttributeValue>, key: &str, value: Option<&String>) {
    if let Some(value) = value {
        item.insert(key.to_string(), AttributeValue::S(value.clone()));
    }
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get an optional numeric attribute.
fn get_optional_i32(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<i32>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(value) => {
            let n = value.as_n().map_err(|_| {
                RepositoryError::InvalidData(format!("Missing or invalid field: {}", key))
            })?;
            n.parse()
                .map(Some)
                .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_artist() -> Artist {
        let mut artist = Artist::new("ARTIST", "BAND#b1#a1")
            .with_name("Luis")
            .with_nick_name("Lucho")
            .with_debut_year(1999);
        artist.person.nationality = Some("UY".to_string());
        artist
    }

    #[test]
    fn test_band_item_has_table_keys() {
        let band = Band::new("BAND", "BAND#1").with_name("Rantes");
        let item = band.to_item();

        assert_eq!(item.get("id").unwrap().as_s().unwrap(), "BAND");
        assert_eq!(item.get("sortId").unwrap().as_s().unwrap(), "BAND#1");
        assert_eq!(item.get("name").unwrap().as_s().unwrap(), "Rantes");
        assert!(!item.contains_key("genre"));
    }

    #[test]
    fn test_band_round_trip() {
        let band = Band::new("BAND", "BAND#1")
            .with_name("Rantes")
            .with_genre("Rock Alternativo");
        let parsed = Band::from_item(&band.to_item()).unwrap();

        assert_eq!(band, parsed);
    }

    #[test]
    fn test_person_item_uses_camel_case_attributes() {
        let mut person = Person::new("PERSON", "PERSON#1").with_email("jane@example.com");
        person.fields.date_of_birth = Some("1990-05-04".to_string());
        let item = person.to_item();

        assert_eq!(
            item.get("dateOfBirth").unwrap().as_s().unwrap(),
            "1990-05-04"
        );
        assert_eq!(
            item.get("email").unwrap().as_s().unwrap(),
            "jane@example.com"
        );
        assert_eq!(Person::from_item(&item).unwrap(), person);
    }

    #[test]
    fn test_artist_item_stores_debut_year_as_number() {
        let artist = sample_artist();
        let item = artist.to_item();

        assert_eq!(item.get("debutYear").unwrap().as_n().unwrap(), "1999");
        assert_eq!(item.get("nickName").unwrap().as_s().unwrap(), "Lucho");
        assert_eq!(Artist::from_item(&item).unwrap(), artist);
    }

    #[test]
    fn test_missing_key_attribute_is_invalid_data() {
        let item = HashMap::from([(
            "sortId".to_string(),
            AttributeValue::S("BAND#1".to_string()),
        )]);

        let result = Band::from_item(&item);
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn test_non_numeric_debut_year_is_invalid_data() {
        let mut item = key_attributes("ARTIST", "BAND#1#2");
        item.insert("debutYear".to_string(), AttributeValue::S("1999".to_string()));

        assert!(matches!(
            Artist::from_item(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_get_optional_string() {
        let mut item = HashMap::new();
        assert!(get_optional_string(&item, "missing").is_none());

        item.insert(
            "present".to_string(),
            AttributeValue::S("value".to_string()),
        );
        assert_eq!(
            get_optional_string(&item, "present"),
            Some("value".to_string())
        );
    }
}
