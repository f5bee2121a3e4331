use std::sync::Arc;

use bandservice_core::keys::{tag_prefix, EntityTag};
use bandservice_core::music::{
    apply_band_update, build_band, natural_key, require_sort_key, validate_create_band, Band,
    CreateBandRequest, ServiceError,
};
use bandservice_core::storage::{Record, Repository};

use super::{new_id, EntityTable};

/// Band operations over the `BAND` partition.
pub struct BandService {
    table: EntityTable<Band>,
}

impl BandService {
    pub fn new(repository: Arc<dyn Repository<Band>>, tag: EntityTag) -> Self {
        Self {
            table: EntityTable::new(repository, tag),
        }
    }

    pub async fn get_by_id(&self, sort_key: &str) -> Result<Band, ServiceError> {
        self.table.get(sort_key).await
    }

    pub async fn get_all(&self) -> Result<Vec<Band>, ServiceError> {
        self.table.list(tag_prefix(self.table.tag())).await
    }

    /// Creates a band under `BAND#<uuid>`.
    ///
    /// The name must be non-empty and not already taken.
    pub async fn create(&self, request: CreateBandRequest) -> Result<Band, ServiceError> {
        let name = validate_create_band(&request)?;
        self.ensure_name_available(name).await?;

        let band = build_band(self.table.tag(), &new_id(), request);
        let band = self.table.insert(band).await?;

        tracing::info!(sort_key = %band.sort_key, name = ?band.name, "Created band");
        Ok(band)
    }

    pub async fn update(&self, update: Band) -> Result<Band, ServiceError> {
        require_sort_key(Band::ENTITY_TYPE, &update.sort_key)?;

        let mut band = self.table.get(&update.sort_key).await?;
        apply_band_update(&mut band, update);
        let band = self.table.save(band).await?;

        tracing::info!(sort_key = %band.sort_key, "Updated band");
        Ok(band)
    }

    pub async fn delete(&self, sort_key: &str) -> Result<Band, ServiceError> {
        let band = self.table.remove(sort_key).await?;
        tracing::info!(sort_key = %band.sort_key, "Deleted band");
        Ok(band)
    }

    /// Rejects a name that is already taken.
    ///
    /// Checks the natural key `BAND#<name>`, which only records written by
    /// other producers occupy, then scans the partition for the same name.
    /// Every create pays one point lookup plus a full partition query.
    async fn ensure_name_available(&self, name: &str) -> Result<(), ServiceError> {
        let key = natural_key(self.table.tag(), name);
        let taken = self.table.find(&key).await?.is_some()
            || self
                .get_all()
                .await?
                .iter()
                .any(|band| band.name.as_deref().map(str::trim) == Some(name));

        if taken {
            tracing::warn!(band_name = name, "Band name already in use");
            return Err(ServiceError::DuplicateKey {
                entity_type: Band::ENTITY_TYPE,
                sort_key: key,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{CountingRepository, FailingRepository};
    use bandservice_core::keys::split_key;
    use bandservice_core::storage::RepositoryError;

    fn service() -> (BandService, Arc<CountingRepository>) {
        let repo = Arc::new(CountingRepository::new());
        (BandService::new(repo.clone(), EntityTag::Band), repo)
    }

    #[tokio::test]
    async fn test_create_band_and_list_it() {
        let (service, _repo) = service();

        let band = service
            .create(CreateBandRequest::new("Rantes").with_genre("Rock Alternativo"))
            .await
            .unwrap();

        assert_eq!(band.partition_key, "BAND");
        let parts = split_key(&band.sort_key);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "BAND");
        assert!(uuid::Uuid::parse_str(parts[1]).is_ok());
        assert_eq!(band.name.as_deref(), Some("Rantes"));
        assert_eq!(band.genre.as_deref(), Some("Rock Alternativo"));

        let all = service.get_all().await.unwrap();
        assert_eq!(all, vec![band.clone()]);
        assert_eq!(service.get_by_id(&band.sort_key).await.unwrap(), band);
    }

    #[tokio::test]
    async fn test_create_band_without_name_writes_nothing() {
        let (service, repo) = service();

        let result = service.create(CreateBandRequest::new("")).await;

        assert!(matches!(
            result,
            Err(ServiceError::ValidationFailed {
                entity_type: "Band",
                field: "name"
            })
        ));
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn test_create_band_with_taken_name_is_duplicate() {
        let (service, repo) = service();
        service.create(CreateBandRequest::new("Rantes")).await.unwrap();

        let result = service.create(CreateBandRequest::new("Rantes")).await;

        assert!(matches!(
            result,
            Err(ServiceError::DuplicateKey { entity_type: "Band", ref sort_key }) if sort_key == "BAND#Rantes"
        ));
        assert_eq!(repo.inserts(), 1);
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_band_stores_trimmed_name() {
        let (service, repo) = service();

        let band = service
            .create(CreateBandRequest::new(" Rantes "))
            .await
            .unwrap();
        assert_eq!(band.name.as_deref(), Some("Rantes"));

        let stored = service.get_by_id(&band.sort_key).await.unwrap();
        assert_eq!(stored.name.as_deref(), Some("Rantes"));

        let result = service.create(CreateBandRequest::new("Rantes")).await;
        assert!(matches!(result, Err(ServiceError::DuplicateKey { .. })));
        assert_eq!(repo.inserts(), 1);
    }

    #[tokio::test]
    async fn test_create_band_collides_with_natural_key_record() {
        let (service, repo) = service();
        repo.seed(&Band::new("BAND", "BAND#Rantes")).await;

        let result = service.create(CreateBandRequest::new("Rantes")).await;

        assert!(matches!(result, Err(ServiceError::DuplicateKey { .. })));
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn test_get_missing_band_is_not_found() {
        let (service, _repo) = service();

        let result = service.get_by_id("BAND#missing").await;

        assert!(matches!(
            result,
            Err(ServiceError::NotFound { entity_type: "Band", ref sort_key }) if sort_key == "BAND#missing"
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_identity_and_overwrites_fields() {
        let (service, repo) = service();
        let created = service
            .create(CreateBandRequest::new("Rantes").with_genre("Rock"))
            .await
            .unwrap();

        let update = Band::new("", created.sort_key.clone()).with_name("Los Rantes");
        let updated = service.update(update).await.unwrap();

        assert_eq!(updated.partition_key, "BAND");
        assert_eq!(updated.sort_key, created.sort_key);
        assert_eq!(updated.name.as_deref(), Some("Los Rantes"));
        assert_eq!(updated.genre, None);
        assert_eq!(repo.saves(), 1);
        assert_eq!(service.get_by_id(&created.sort_key).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_band_does_not_save() {
        let (service, repo) = service();

        let result = service
            .update(Band::new("BAND", "BAND#missing").with_name("X"))
            .await;

        assert!(matches!(result, Err(ServiceError::NotFound { .. })));
        assert_eq!(repo.saves(), 0);
    }

    #[tokio::test]
    async fn test_update_without_sort_key_is_validation_error() {
        let (service, repo) = service();

        let result = service.update(Band::new("BAND", "")).await;

        assert!(matches!(
            result,
            Err(ServiceError::ValidationFailed {
                field: "sortId",
                ..
            })
        ));
        assert_eq!(repo.saves(), 0);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_band() {
        let (service, repo) = service();
        let created = service.create(CreateBandRequest::new("Rantes")).await.unwrap();

        let deleted = service.delete(&created.sort_key).await.unwrap();

        assert_eq!(deleted, created);
        assert_eq!(repo.deletes(), 1);
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_band_does_not_call_delete() {
        let (service, repo) = service();

        let result = service.delete("BAND#missing").await;

        assert!(matches!(result, Err(ServiceError::NotFound { .. })));
        assert_eq!(repo.deletes(), 0);
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let service = BandService::new(Arc::new(FailingRepository), EntityTag::Band);

        let result = service.get_all().await;

        assert!(matches!(
            result,
            Err(ServiceError::Backend(RepositoryError::ConnectionFailed(_)))
        ));
    }
}
