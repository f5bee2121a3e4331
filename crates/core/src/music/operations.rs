//! Pure operations behind the entity services: validation, record
//! construction and update application.

use crate::keys::{build_key, EntityTag};
use crate::storage::Record;

use super::error::ServiceError;
use super::requests::{CreateArtistRequest, CreateBandRequest, CreatePersonRequest};
use super::types::{Artist, Band, Person, PersonFields};

fn required<'a>(
    value: Option<&'a String>,
    entity_type: &'static str,
    field: &'static str,
) -> Result<&'a str, ServiceError> {
    match value.map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServiceError::ValidationFailed { entity_type, field }),
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Validates a band creation request, returning the band name.
pub fn validate_create_band(request: &CreateBandRequest) -> Result<&str, ServiceError> {
    required(request.name.as_ref(), Band::ENTITY_TYPE, "name")
}

/// Validates a person creation request, returning the email.
pub fn validate_create_person(request: &CreatePersonRequest) -> Result<&str, ServiceError> {
    required(request.email.as_ref(), Person::ENTITY_TYPE, "email")
}

/// Validates an artist creation request, returning the parent band sort key.
pub fn validate_create_artist(request: &CreateArtistRequest) -> Result<&str, ServiceError> {
    required(request.band_sort_id.as_ref(), Artist::ENTITY_TYPE, "bandSortId")
}

/// Ensures an update payload carries its identity.
pub fn require_sort_key(entity_type: &'static str, sort_key: &str) -> Result<(), ServiceError> {
    if sort_key.trim().is_empty() {
        return Err(ServiceError::ValidationFailed {
            entity_type,
            field: "sortId",
        });
    }
    Ok(())
}

/// Sort key derived from a unique attribute value.
///
/// Pattern: `<TAG>#<value>`
pub fn natural_key(tag: EntityTag, value: &str) -> String {
    build_key(tag.as_str(), value)
}

/// Builds a new band stored under `<TAG>#<id>`.
///
/// The name is stored trimmed, the same value uniqueness is checked against.
pub fn build_band(tag: EntityTag, id: &str, request: CreateBandRequest) -> Band {
    Band {
        partition_key: tag.as_str().to_string(),
        sort_key: build_key(tag.as_str(), id),
        name: trimmed(request.name),
        genre: request.genre,
    }
}

/// Builds a new person stored under `<TAG>#<id>`. The email is stored trimmed.
pub fn build_person(tag: EntityTag, id: &str, request: CreatePersonRequest) -> Person {
    Person {
        partition_key: tag.as_str().to_string(),
        sort_key: build_key(tag.as_str(), id),
        fields: PersonFields {
            name: request.name,
            email: trimmed(request.email),
            date_of_birth: request.date_of_birth,
            nationality: request.nationality,
        },
    }
}

/// Builds a new artist stored under `<band_sort_key>#<id>`.
pub fn build_artist(
    tag: EntityTag,
    band_sort_key: &str,
    id: &str,
    request: CreateArtistRequest,
) -> Artist {
    Artist {
        partition_key: tag.as_str().to_string(),
        sort_key: build_key(band_sort_key, id),
        person: PersonFields {
            name: request.name,
            email: request.email,
            date_of_birth: request.date_of_birth,
            nationality: request.nationality,
        },
        nick_name: request.nick_name,
        debut_year: request.debut_year,
    }
}

/// Overwrites the mutable band attributes. Identity is left untouched.
pub fn apply_band_update(existing: &mut Band, update: Band) {
    existing.name = update.name;
    existing.genre = update.genre;
}

/// Overwrites the mutable person attributes. Identity is left untouched.
pub fn apply_person_update(existing: &mut Person, update: Person) {
    existing.fields = update.fields;
}

/// Overwrites the mutable artist attributes. Identity is left untouched.
pub fn apply_artist_update(existing: &mut Artist, update: Artist) {
    existing.person = update.person;
    existing.nick_name = update.nick_name;
    existing.debut_year = update.debut_year;
}
