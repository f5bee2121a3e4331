//! API request types for entity creation.
//!
//! Shared between the server and tests. Following the Functional Core pattern,
//! these are pure data types with no I/O. Required fields are optional at the
//! type level so an empty value reaches validation instead of failing
//! deserialization.

use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_string;

/// Request payload for creating a new person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl CreatePersonRequest {
    /// Create a new request with just an email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the nationality.
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }
}

/// Request payload for creating a new band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBandRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl CreateBandRequest {
    /// Create a new request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            genre: None,
        }
    }

    /// Set the genre.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}

/// Request payload for creating a new artist under a band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtistRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub band_sort_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub debut_year: Option<i32>,
}

impl CreateArtistRequest {
    /// Create a new request for the given band.
    pub fn new(band_sort_id: impl Into<String>) -> Self {
        Self {
            band_sort_id: Some(band_sort_id.into()),
            ..Self::default()
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the nickname.
    pub fn with_nick_name(mut self, nick_name: impl Into<String>) -> Self {
        self.nick_name = Some(nick_name.into());
        self
    }

    /// Set the debut year.
    pub fn with_debut_year(mut self, year: i32) -> Self {
        self.debut_year = Some(year);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_band_request_camel_case() {
        let request: CreateBandRequest =
            serde_json::from_str(r#"{"name": "Rantes", "genre": "Rock Alternativo"}"#).unwrap();

        assert_eq!(
            request,
            CreateBandRequest::new("Rantes").with_genre("Rock Alternativo")
        );
    }

    #[test]
    fn test_blank_required_fields_become_none() {
        let band: CreateBandRequest = serde_json::from_str(r#"{"name": "  "}"#).unwrap();
        let person: CreatePersonRequest = serde_json::from_str(r#"{"email": ""}"#).unwrap();
        let artist: CreateArtistRequest = serde_json::from_str(r#"{"bandSortId": ""}"#).unwrap();

        assert_eq!(band.name, None);
        assert_eq!(person.email, None);
        assert_eq!(artist.band_sort_id, None);
    }

    #[test]
    fn test_create_artist_request_fields() {
        let request: CreateArtistRequest = serde_json::from_str(
            r#"{"bandSortId": "BAND#1", "nickName": "Lucho", "debutYear": 2001, "dateOfBirth": "1980-02-01"}"#,
        )
        .unwrap();

        assert_eq!(request.band_sort_id.as_deref(), Some("BAND#1"));
        assert_eq!(request.nick_name.as_deref(), Some("Lucho"));
        assert_eq!(request.debut_year, Some(2001));
        assert_eq!(request.date_of_birth.as_deref(), Some("1980-02-01"));
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let request: CreatePersonRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, CreatePersonRequest::default());
    }
}
