//! Key generation functions for the single-table design.
//!
//! Every record lives in one table. The partition key is the entity tag
//! (`PERSON`, `ARTIST`, `BAND`) and the sort key is a composite built by
//! joining components with [`KEY_DELIMITER`].
//!
//! Components are not escaped: a component containing `#` produces a key that
//! cannot be split back unambiguously.

use std::fmt;
use std::str::FromStr;

// ============================================================================
// Delimiter
// ============================================================================

pub const KEY_DELIMITER: char = '#';

// ============================================================================
// Entity tags
// ============================================================================

/// Partition key tag identifying the kind of record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityTag {
    Person,
    Artist,
    Band,
}

impl EntityTag {
    /// Returns the partition key value stored for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityTag::Person => "PERSON",
            EntityTag::Artist => "ARTIST",
            EntityTag::Band => "BAND",
        }
    }

    /// Human readable entity name used in error messages.
    pub fn entity_type(&self) -> &'static str {
        match self {
            EntityTag::Person => "Person",
            EntityTag::Artist => "Artist",
            EntityTag::Band => "Band",
        }
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known entity tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entity tag: {0}")]
pub struct UnknownEntityTag(pub String);

impl FromStr for EntityTag {
    type Err = UnknownEntityTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERSON" => Ok(EntityTag::Person),
            "ARTIST" => Ok(EntityTag::Artist),
            "BAND" => Ok(EntityTag::Band),
            other => Err(UnknownEntityTag(other.to_string())),
        }
    }
}

// ============================================================================
// Key builders
// ============================================================================

/// Build a two part key.
///
/// Pattern: `<prefix>#<value>`
pub fn build_key(prefix: &str, value: &str) -> String {
    format!("{prefix}{KEY_DELIMITER}{value}")
}

/// Build a three part key.
///
/// Pattern: `<prefix>#<first>#<second>`
pub fn build_three_part_key(prefix: &str, first: &str, second: &str) -> String {
    format!("{prefix}{KEY_DELIMITER}{first}{KEY_DELIMITER}{second}")
}

/// Split a composite key into its components.
pub fn split_key(key: &str) -> Vec<&str> {
    key.split(KEY_DELIMITER).collect()
}

// ============================================================================
// Query prefixes
// ============================================================================

/// Prefix matching every record keyed directly under a tag.
///
/// Pattern: `<TAG>#`
pub fn tag_prefix(tag: EntityTag) -> String {
    format!("{}{KEY_DELIMITER}", tag.as_str())
}

/// Prefix matching every child record of a parent sort key.
///
/// Pattern: `<parent_sort_key>#`
///
/// The trailing delimiter keeps `BAND#ab` from matching children of `BAND#a`.
pub fn children_prefix(parent_sort_key: &str) -> String {
    format!("{parent_sort_key}{KEY_DELIMITER}")
}
