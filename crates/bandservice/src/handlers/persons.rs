use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use bandservice_core::music::{CreatePersonRequest, Person};

use super::error::AppError;
use crate::state::AppState;

/// List all persons (GET /persons).
pub async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    Ok(Json(state.person_service.get_all().await?))
}

/// Get a single person by sort key (GET /persons/{sort_id}).
pub async fn get_person(
    State(state): State<AppState>,
    Path(sort_id): Path<String>,
) -> Result<Json<Person>, AppError> {
    Ok(Json(state.person_service.get_by_id(&sort_id).await?))
}

/// Create a new person (POST /persons).
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Result<Json<Person>, AppError> {
    let Json(request) = payload?;
    tracing::debug!(?request, "Create person request");

    Ok(Json(state.person_service.create(request).await?))
}

/// Update a person identified by the payload's sort key (PUT /persons).
pub async fn update_person(
    State(state): State<AppState>,
    payload: Result<Json<Person>, JsonRejection>,
) -> Result<Json<Person>, AppError> {
    let Json(update) = payload?;

    Ok(Json(state.person_service.update(update).await?))
}

/// Delete a person by sort key (DELETE /persons/{sort_id}).
pub async fn delete_person(
    State(state): State<AppState>,
    Path(sort_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.person_service.delete(&sort_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
