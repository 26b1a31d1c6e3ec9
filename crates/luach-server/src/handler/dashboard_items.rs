//! REST handlers for `/api/dashboard-items`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use luach_shared::{DashboardItem, NewDashboardItem, UpdateDashboardItem};
use uuid::Uuid;

use crate::AppState;
use crate::error::ApiError;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<DashboardItem>>, ApiError> {
    let items = state
        .storage
        .dashboard_items()
        .map_err(|err| ApiError::storage("fetch dashboard items", err))?;
    Ok(Json(items))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewDashboardItem>, JsonRejection>,
) -> Result<(StatusCode, Json<DashboardItem>), ApiError> {
    let Json(new) = payload.map_err(|_| ApiError::BadRequest)?;
    new.validate()?;
    let item = state
        .storage
        .create_dashboard_item(new)
        .map_err(|err| ApiError::storage("create item", err))?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateDashboardItem>, JsonRejection>,
) -> Result<Json<DashboardItem>, ApiError> {
    let Json(patch) = payload.map_err(|_| ApiError::BadRequest)?;
    patch.validate()?;
    let item = state
        .storage
        .update_dashboard_item(id, &patch)
        .map_err(|err| ApiError::storage("update item", err))?
        .ok_or(ApiError::NotFound("Item"))?;
    Ok(Json(item))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .storage
        .delete_dashboard_item(id)
        .map_err(|err| ApiError::storage("delete item", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Item"))
    }
}
