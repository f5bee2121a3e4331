use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Result, SortKeyCondition};

/// A record stored in the shared table.
///
/// `(partition_key, sort_key)` is the unique identity of every record.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Entity name used in error messages.
    const ENTITY_TYPE: &'static str;

    /// The partition key (entity tag).
    fn partition_key(&self) -> &str;

    /// The sort key, unique within the partition.
    fn sort_key(&self) -> &str;
}

/// Generic repository over the shared table.
///
/// Implementations add no retry policy; backend failures are returned as
/// [`RepositoryError`](super::RepositoryError) values.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Record,
{
    /// Point lookup. Returns `None` when no record matches.
    async fn load(&self, partition_key: &str, sort_key: &str) -> Result<Option<T>>;

    /// Upsert. Overwrites every attribute of an existing record.
    async fn save(&self, record: &T) -> Result<()>;

    /// Conditional create.
    ///
    /// Fails with `AlreadyExists` if a record with the same identity exists.
    async fn insert(&self, record: &T) -> Result<()>;

    /// Removes the record with the same identity. Deleting a missing record
    /// is not an error.
    async fn delete(&self, record: &T) -> Result<()>;

    /// Returns every record in the partition whose sort key satisfies the
    /// condition, ordered by sort key.
    async fn query(&self, partition_key: &str, condition: &SortKeyCondition) -> Result<Vec<T>>;
}
