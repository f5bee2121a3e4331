use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use bandservice_core::music::{Artist, CreateArtistRequest};

use super::error::AppError;
use crate::state::AppState;

/// List every artist (GET /artists).
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>, AppError> {
    Ok(Json(state.artist_service.get_all().await?))
}

/// List the artists of one band (GET /artists/band/{band_sort_id}).
pub async fn list_artists_by_band(
    State(state): State<AppState>,
    Path(band_sort_id): Path<String>,
) -> Result<Json<Vec<Artist>>, AppError> {
    Ok(Json(state.artist_service.get_by_band(&band_sort_id).await?))
}

/// Get a single artist by sort key (GET /artists/{sort_id}).
pub async fn get_artist(
    State(state): State<AppState>,
    Path(sort_id): Path<String>,
) -> Result<Json<Artist>, AppError> {
    Ok(Json(state.artist_service.get_by_id(&sort_id).await?))
}

/// Create a new artist under a band (POST /artists).
pub async fn create_artist(
    State(state): State<AppState>,
    payload: Result<Json<CreateArtistRequest>, JsonRejection>,
) -> Result<Json<Artist>, AppError> {
    let Json(request) = payload?;
    tracing::debug!(?request, "Create artist request");

    Ok(Json(state.artist_service.create(request).await?))
}

/// Update an artist identified by the payload's sort key (PUT /artists).
pub async fn update_artist(
    State(state): State<AppState>,
    payload: Result<Json<Artist>, JsonRejection>,
) -> Result<Json<Artist>, AppError> {
    let Json(update) = payload?;

    Ok(Json(state.artist_service.update(update).await?))
}

/// Delete an artist by sort key (DELETE /artists/{sort_id}).
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(sort_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.artist_service.delete(&sort_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
