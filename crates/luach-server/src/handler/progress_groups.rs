//! REST handlers for `/api/progress-groups`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use luach_shared::{NewProgressGroup, ProgressGroup, UpdateProgressGroup};
use uuid::Uuid;

use crate::AppState;
use crate::error::ApiError;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProgressGroup>>, ApiError> {
    let groups = state
        .storage
        .progress_groups()
        .map_err(|err| ApiError::storage("fetch progress groups", err))?;
    Ok(Json(groups))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewProgressGroup>, JsonRejection>,
) -> Result<(StatusCode, Json<ProgressGroup>), ApiError> {
    let Json(new) = payload.map_err(|_| ApiError::BadRequest)?;
    new.validate()?;
    let group = state
        .storage
        .create_progress_group(new)
        .map_err(|err| ApiError::storage("create group", err))?;
    Ok((StatusCode::CREATED, Json(group)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateProgressGroup>, JsonRejection>,
) -> Result<Json<ProgressGroup>, ApiError> {
    let Json(patch) = payload.map_err(|_| ApiError::BadRequest)?;
    patch.validate()?;
    let group = state
        .storage
        .update_progress_group(id, &patch)
        .map_err(|err| ApiError::storage("update group", err))?
        .ok_or(ApiError::NotFound("Group"))?;
    Ok(Json(group))
}
