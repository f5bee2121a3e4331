use serde::{Deserialize, Serialize};

use crate::keys::{split_key, KEY_DELIMITER};
use crate::storage::Record;

/// Attributes shared by people and artists.
///
/// Artists store these flattened next to their own fields; the two entities
/// never share rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

/// A person record, stored under the `PERSON` partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "id", default)]
    pub partition_key: String,
    #[serde(rename = "sortId", default)]
    pub sort_key: String,
    #[serde(flatten)]
    pub fields: PersonFields,
}

impl Person {
    /// Creates a person with the given identity and no attributes.
    pub fn new(partition_key: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key: sort_key.into(),
            fields: PersonFields::default(),
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.fields.name = Some(name.into());
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.fields.email = Some(email.into());
        self
    }
}

impl Record for Person {
    const ENTITY_TYPE: &'static str = "Person";

    fn partition_key(&self) -> &str {
        &self.partition_key
    }

    fn sort_key(&self) -> &str {
        &self.sort_key
    }
}

/// A band record, stored under the `BAND` partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    #[serde(rename = "id", default)]
    pub partition_key: String,
    #[serde(rename = "sortId", default)]
    pub sort_key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl Band {
    /// Creates a band with the given identity and no attributes.
    pub fn new(partition_key: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key: sort_key.into(),
            name: None,
            genre: None,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the genre.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}

impl Record for Band {
    const ENTITY_TYPE: &'static str = "Band";

    fn partition_key(&self) -> &str {
        &self.partition_key
    }

    fn sort_key(&self) -> &str {
        &self.sort_key
    }
}

/// An artist record, stored under the `ARTIST` partition.
///
/// The sort key embeds the owning band's sort key:
/// `<band_sort_key>#<artist_id>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    #[serde(rename = "id", default)]
    pub partition_key: String,
    #[serde(rename = "sortId", default)]
    pub sort_key: String,
    #[serde(flatten)]
    pub person: PersonFields,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub debut_year: Option<i32>,
}

impl Artist {
    /// Creates an artist with the given identity and no attributes.
    pub fn new(partition_key: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key: sort_key.into(),
            person: PersonFields::default(),
            nick_name: None,
            debut_year: None,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.person.name = Some(name.into());
        self
    }

    /// Sets the nickname.
    pub fn with_nick_name(mut self, nick_name: impl Into<String>) -> Self {
        self.nick_name = Some(nick_name.into());
        self
    }

    /// Sets the debut year.
    pub fn with_debut_year(mut self, year: i32) -> Self {
        self.debut_year = Some(year);
        self
    }

    /// Returns the sort key of the band this artist belongs to.
    ///
    /// `None` if the sort key has no parent component.
    pub fn band_sort_key(&self) -> Option<&str> {
        if split_key(&self.sort_key).len() < 3 {
            return None;
        }
        self.sort_key
            .rsplit_once(KEY_DELIMITER)
            .map(|(parent, _)| parent)
    }
}

impl Record for Artist {
    const ENTITY_TYPE: &'static str = "Artist";

    fn partition_key(&self) -> &str {
        &self.partition_key
    }

    fn sort_key(&self) -> &str {
        &self.sort_key
    }
}
