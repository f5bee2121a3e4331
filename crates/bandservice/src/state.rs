//! Application state with repository-based storage.
//!
//! Every handler receives a clone of [`AppState`]. The services inside hold
//! `Repository` trait objects, so the storage backend chosen by feature flag
//! is invisible above this module.

use std::sync::Arc;

use bandservice_core::keys::EntityTag;
use bandservice_core::music::{Artist, Band, Person};
use bandservice_core::storage::Repository;

use crate::config::Config;
use crate::services::{ArtistService, BandService, PersonService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub person_service: Arc<PersonService>,
    pub band_service: Arc<BandService>,
    pub artist_service: Arc<ArtistService>,
    /// Name of the active storage backend, reported by `/healthz`.
    pub backend: &'static str,
}

impl AppState {
    /// Wires one service per entity, each bound to its partition tag.
    pub fn with_repositories(
        person_repo: Arc<dyn Repository<Person>>,
        band_repo: Arc<dyn Repository<Band>>,
        artist_repo: Arc<dyn Repository<Artist>>,
        backend: &'static str,
    ) -> Self {
        Self {
            person_service: Arc::new(PersonService::new(person_repo, EntityTag::Person)),
            band_service: Arc::new(BandService::new(band_repo, EntityTag::Band)),
            artist_service: Arc::new(ArtistService::new(artist_repo, EntityTag::Artist)),
            backend,
        }
    }

    /// State over a fresh in-memory table.
    #[cfg(any(feature = "inmemory", test))]
    pub fn in_memory() -> Self {
        let repo = Arc::new(crate::storage::InMemoryRepository::new());
        Self::with_repositories(repo.clone(), repo.clone(), repo, "inmemory")
    }

    /// Builds the state for the backend selected at compile time.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(_config: &Config) -> anyhow::Result<Self> {
        tracing::info!("Using in-memory storage, data is lost on restart");
        Ok(Self::in_memory())
    }

    /// Builds the state for the backend selected at compile time.
    ///
    /// Creates the table first when `DYNAMODB_CREATE_TABLE` is set.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::dynamodb::ensure_table;
        use crate::storage::DynamoDbRepository;

        let repo = Arc::new(DynamoDbRepository::from_config(config).await);

        if config.create_table {
            ensure_table(repo.client(), repo.table_name()).await?;
        }

        tracing::info!(
            table = %config.table_name,
            region = %config.aws_region,
            endpoint = ?config.dynamodb_endpoint_url,
            "Using DynamoDB storage"
        );

        Ok(Self::with_repositories(
            repo.clone(),
            repo.clone(),
            repo,
            "dynamodb",
        ))
    }
}
