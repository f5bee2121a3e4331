//! Entity services.
//!
//! Each service is bound to one partition tag at construction and talks to
//! the shared table through a `Repository` trait object. The pure parts
//! (validation, record building, update application) live in
//! `bandservice_core::music`; this module sequences them around I/O.

mod artist;
mod band;
mod person;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use bandservice_core::keys::EntityTag;
use bandservice_core::music::ServiceError;
use bandservice_core::storage::{Record, Repository, RepositoryError, SortKeyCondition};

pub use artist::ArtistService;
pub use band::BandService;
pub use person::PersonService;

/// Repository handle scoped to one partition tag.
///
/// Holds the lookups every entity service repeats: point load with NotFound,
/// prefix listing, conditional insert and delete-after-load.
pub(crate) struct EntityTable<T: Record> {
    repository: Arc<dyn Repository<T>>,
    tag: EntityTag,
}

impl<T: Record> EntityTable<T> {
    pub(crate) fn new(repository: Arc<dyn Repository<T>>, tag: EntityTag) -> Self {
        Self { repository, tag }
    }

    pub(crate) fn tag(&self) -> EntityTag {
        self.tag
    }

    /// Point lookup in this tag's partition.
    pub(crate) async fn find(&self, sort_key: &str) -> Result<Option<T>, ServiceError> {
        Ok(self.repository.load(self.tag.as_str(), sort_key).await?)
    }

    /// Point lookup that fails with `NotFound` when absent.
    pub(crate) async fn get(&self, sort_key: &str) -> Result<T, ServiceError> {
        self.find(sort_key)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                entity_type: T::ENTITY_TYPE,
                sort_key: sort_key.to_string(),
            })
    }

    /// Every record in the partition whose sort key starts with `prefix`.
    pub(crate) async fn list(&self, prefix: String) -> Result<Vec<T>, ServiceError> {
        let condition = SortKeyCondition::BeginsWith(prefix);
        Ok(self.repository.query(self.tag.as_str(), &condition).await?)
    }

    /// Persists a new record. An existing identity becomes `DuplicateKey`.
    pub(crate) async fn insert(&self, record: T) -> Result<T, ServiceError> {
        match self.repository.insert(&record).await {
            Ok(()) => Ok(record),
            Err(RepositoryError::AlreadyExists { entity_type, id }) => {
                Err(ServiceError::DuplicateKey {
                    entity_type,
                    sort_key: id,
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrites the stored record.
    pub(crate) async fn save(&self, record: T) -> Result<T, ServiceError> {
        self.repository.save(&record).await?;
        Ok(record)
    }

    /// Loads then removes the record, returning what was removed.
    pub(crate) async fn remove(&self, sort_key: &str) -> Result<T, ServiceError> {
        let record = self.get(sort_key).await?;
        self.repository.delete(&record).await?;
        Ok(record)
    }
}

/// Fresh random identifier for the variable part of a sort key.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
