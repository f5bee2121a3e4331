//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use bandservice_core::storage::{Record, Repository, RepositoryError, Result, SortKeyCondition};

type TableKey = (String, String);

/// In-memory storage backend.
///
/// Uses a `BTreeMap` wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Ordering by `(partition, sort)` makes partition queries return records in
/// sort key order, the same order the remote table uses.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<BTreeMap<TableKey, Value>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records across every partition.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }
}

fn table_key<T: Record>(record: &T) -> TableKey {
    (
        record.partition_key().to_string(),
        record.sort_key().to_string(),
    )
}

fn to_document<T: Record>(record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn from_document<T: Record>(document: &Value) -> Result<T> {
    serde_json::from_value(document.clone())
        .map_err(|e| RepositoryError::Serialization(e.to_string()))
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository
where
    T: Record,
{
    async fn load(&self, partition_key: &str, sort_key: &str) -> Result<Option<T>> {
        let table = self.table.read().await;
        table
            .get(&(partition_key.to_string(), sort_key.to_string()))
            .map(from_document)
            .transpose()
    }

    async fn save(&self, record: &T) -> Result<()> {
        let document = to_document(record)?;
        let mut table = self.table.write().await;
        table.insert(table_key(record), document);
        Ok(())
    }

    async fn insert(&self, record: &T) -> Result<()> {
        let document = to_document(record)?;
        let mut table = self.table.write().await;
        let key = table_key(record);
        if table.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: T::ENTITY_TYPE,
                id: key.1,
            });
        }
        table.insert(key, document);
        Ok(())
    }

    async fn delete(&self, record: &T) -> Result<()> {
        let mut table = self.table.write().await;
        table.remove(&table_key(record));
        Ok(())
    }

    async fn query(&self, partition_key: &str, condition: &SortKeyCondition) -> Result<Vec<T>> {
        let table = self.table.read().await;
        table
            .iter()
            .filter(|((pk, sk), _)| pk == partition_key && condition.matches(sk))
            .map(|(_, document)| from_document(document))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandservice_core::music::{Artist, Band, Person};

    fn band(sort_key: &str, name: &str) -> Band {
        Band::new("BAND", sort_key).with_name(name)
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let repo = InMemoryRepository::new();
        let record = band("BAND#1", "Rantes");

        repo.save(&record).await.unwrap();

        let loaded: Option<Band> = repo.load("BAND", "BAND#1").await.unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[tokio::test]
    async fn test_load_missing_returns_none() {
        let repo = InMemoryRepository::new();
        let loaded: Option<Band> = repo.load("BAND", "BAND#missing").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_load_is_scoped_to_partition() {
        let repo = InMemoryRepository::new();
        repo.save(&band("BAND#1", "Rantes")).await.unwrap();

        let loaded: Option<Band> = repo.load("PERSON", "BAND#1").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_record() {
        let repo = InMemoryRepository::new();
        repo.save(&band("BAND#1", "Old").with_genre("Rock"))
            .await
            .unwrap();
        repo.save(&band("BAND#1", "New")).await.unwrap();

        let loaded: Band = repo.load("BAND", "BAND#1").await.unwrap().unwrap();
        assert_eq!(loaded.name.as_deref(), Some("New"));
        assert_eq!(loaded.genre, None);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_existing_identity() {
        let repo = InMemoryRepository::new();
        repo.insert(&band("BAND#1", "Rantes")).await.unwrap();

        let result = repo.insert(&band("BAND#1", "Other")).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Band",
                ..
            })
        ));
        let loaded: Band = repo.load("BAND", "BAND#1").await.unwrap().unwrap();
        assert_eq!(loaded.name.as_deref(), Some("Rantes"));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = InMemoryRepository::new();
        let record = band("BAND#1", "Rantes");
        repo.save(&record).await.unwrap();

        repo.delete(&record).await.unwrap();

        let loaded: Option<Band> = repo.load("BAND", "BAND#1").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_an_error() {
        let repo = InMemoryRepository::new();
        let result = repo.delete(&band("BAND#missing", "Nope")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_query_begins_with_returns_sorted_matches() {
        let repo = InMemoryRepository::new();
        repo.save(&band("BAND#b", "B")).await.unwrap();
        repo.save(&band("BAND#a", "A")).await.unwrap();
        repo.save(&Person::new("PERSON", "PERSON#1")).await.unwrap();

        let bands: Vec<Band> = repo
            .query("BAND", &SortKeyCondition::begins_with("BAND#"))
            .await
            .unwrap();

        let keys: Vec<&str> = bands.iter().map(|b| b.sort_key.as_str()).collect();
        assert_eq!(keys, vec!["BAND#a", "BAND#b"]);
    }

    #[tokio::test]
    async fn test_query_children_of_parent() {
        let repo = InMemoryRepository::new();
        repo.save(&Artist::new("ARTIST", "BAND#1#x")).await.unwrap();
        repo.save(&Artist::new("ARTIST", "BAND#1#y")).await.unwrap();
        repo.save(&Artist::new("ARTIST", "BAND#12#z")).await.unwrap();

        let artists: Vec<Artist> = repo
            .query("ARTIST", &SortKeyCondition::begins_with("BAND#1#"))
            .await
            .unwrap();

        assert_eq!(artists.len(), 2);
        assert!(artists.iter().all(|a| a.sort_key.starts_with("BAND#1#")));
    }

    #[tokio::test]
    async fn test_query_empty_partition() {
        let repo = InMemoryRepository::new();
        let artists: Vec<Artist> = repo
            .query("ARTIST", &SortKeyCondition::begins_with("BAND#1#"))
            .await
            .unwrap();
        assert!(artists.is_empty());
    }
}
