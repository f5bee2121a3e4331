//! Repository doubles for service and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use bandservice_core::storage::{Record, Repository, RepositoryError, Result, SortKeyCondition};

use crate::storage::InMemoryRepository;

/// In-memory repository that counts write calls.
#[derive(Debug, Default)]
pub struct CountingRepository {
    inner: InMemoryRepository,
    saves: AtomicUsize,
    inserts: AtomicUsize,
    deletes: AtomicUsize,
}

impl CountingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    /// Total write calls of any kind.
    pub fn writes(&self) -> usize {
        self.saves() + self.inserts() + self.deletes()
    }

    /// Stores a record without counting it.
    pub async fn seed<T: Record>(&self, record: &T) {
        Repository::<T>::save(&self.inner, record)
            .await
            .expect("seeding in-memory repository");
    }
}

#[async_trait]
impl<T: Record> Repository<T> for CountingRepository {
    async fn load(&self, partition_key: &str, sort_key: &str) -> Result<Option<T>> {
        Repository::<T>::load(&self.inner, partition_key, sort_key).await
    }

    async fn save(&self, record: &T) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Repository::<T>::save(&self.inner, record).await
    }

    async fn insert(&self, record: &T) -> Result<()> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Repository::<T>::insert(&self.inner, record).await
    }

    async fn delete(&self, record: &T) -> Result<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        Repository::<T>::delete(&self.inner, record).await
    }

    async fn query(&self, partition_key: &str, condition: &SortKeyCondition) -> Result<Vec<T>> {
        Repository::<T>::query(&self.inner, partition_key, condition).await
    }
}

/// Repository whose every call fails as if the backend were unreachable.
#[derive(Debug, Default)]
pub struct FailingRepository;

fn unreachable_backend() -> RepositoryError {
    RepositoryError::ConnectionFailed("backend unreachable".to_string())
}

#[async_trait]
impl<T: Record> Repository<T> for FailingRepository {
    async fn load(&self, _partition_key: &str, _sort_key: &str) -> Result<Option<T>> {
        Err(unreachable_backend())
    }

    async fn save(&self, _record: &T) -> Result<()> {
        Err(unreachable_backend())
    }

    async fn insert(&self, _record: &T) -> Result<()> {
        Err(unreachable_backend())
    }

    async fn delete(&self, _record: &T) -> Result<()> {
        Err(unreachable_backend())
    }

    async fn query(&self, _partition_key: &str, _condition: &SortKeyCondition) -> Result<Vec<T>> {
        Err(unreachable_backend())
    }
}
