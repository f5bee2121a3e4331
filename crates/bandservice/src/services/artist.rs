use std::sync::Arc;

use bandservice_core::keys::{children_prefix, tag_prefix, EntityTag};
use bandservice_core::music::{
    apply_artist_update, build_artist, require_sort_key, validate_create_artist, Artist,
    CreateArtistRequest, ServiceError,
};
use bandservice_core::storage::{Record, Repository};

use super::{new_id, EntityTable};

/// Artist operations over the `ARTIST` partition.
///
/// Artist sort keys nest under the owning band: `<band_sort_key>#<uuid>`.
/// Creation has no uniqueness pre-check; only the conditional insert guards
/// against an identical key.
pub struct ArtistService {
    table: EntityTable<Artist>,
}

impl ArtistService {
    pub fn new(repository: Arc<dyn Repository<Artist>>, tag: EntityTag) -> Self {
        Self {
            table: EntityTable::new(repository, tag),
        }
    }

    pub async fn get_by_id(&self, sort_key: &str) -> Result<Artist, ServiceError> {
        self.table.get(sort_key).await
    }

    /// Every artist keyed under a band.
    pub async fn get_all(&self) -> Result<Vec<Artist>, ServiceError> {
        self.table.list(tag_prefix(EntityTag::Band)).await
    }

    /// Artists whose sort key nests under `band_sort_key`.
    pub async fn get_by_band(&self, band_sort_key: &str) -> Result<Vec<Artist>, ServiceError> {
        self.table.list(children_prefix(band_sort_key)).await
    }

    pub async fn create(&self, request: CreateArtistRequest) -> Result<Artist, ServiceError> {
        let band_sort_key = validate_create_artist(&request)?.to_string();

        let artist = build_artist(self.table.tag(), &band_sort_key, &new_id(), request);
        let artist = self.table.insert(artist).await?;

        tracing::info!(
            sort_key = %artist.sort_key,
            band = ?artist.band_sort_key(),
            "Created artist"
        );
        Ok(artist)
    }

    pub async fn update(&self, update: Artist) -> Result<Artist, ServiceError> {
        require_sort_key(Artist::ENTITY_TYPE, &update.sort_key)?;

        let mut artist = self.table.get(&update.sort_key).await?;
        apply_artist_update(&mut artist, update);
        let artist = self.table.save(artist).await?;

        tracing::info!(sort_key = %artist.sort_key, "Updated artist");
        Ok(artist)
    }

    pub async fn delete(&self, sort_key: &str) -> Result<Artist, ServiceError> {
        let artist = self.table.remove(sort_key).await?;
        tracing::info!(sort_key = %artist.sort_key, "Deleted artist");
        Ok(artist)
    }
}
