use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use bandservice_core::music::{Band, CreateBandRequest};

use super::error::AppError;
use crate::state::AppState;

/// List all bands (GET /bands).
pub async fn list_bands(State(state): State<AppState>) -> Result<Json<Vec<Band>>, AppError> {
    Ok(Json(state.band_service.get_all().await?))
}

/// Get a single band by sort key (GET /bands/{sort_id}).
pub async fn get_band(
    State(state): State<AppState>,
    Path(sort_id): Path<String>,
) -> Result<Json<Band>, AppError> {
    Ok(Json(state.band_service.get_by_id(&sort_id).await?))
}

/// Create a new band (POST /bands).
pub async fn create_band(
    State(state): State<AppState>,
    payload: Result<Json<CreateBandRequest>, JsonRejection>,
) -> Result<Json<Band>, AppError> {
    let Json(request) = payload?;
    tracing::debug!(?request, "Create band request");

    Ok(Json(state.band_service.create(request).await?))
}

/// Update a band identified by the payload's sort key (PUT /bands).
pub async fn update_band(
    State(state): State<AppState>,
    payload: Result<Json<Band>, JsonRejection>,
) -> Result<Json<Band>, AppError> {
    let Json(update) = payload?;

    Ok(Json(state.band_service.update(update).await?))
}

/// Delete a band by sort key (DELETE /bands/{sort_id}).
pub async fn delete_band(
    State(state): State<AppState>,
    Path(sort_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.band_service.delete(&sort_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
