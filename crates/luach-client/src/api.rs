//! REST client for the dashboard API.
//!
//! Plain store-and-refetch: callers reload the affected collection after a
//! successful mutation; nothing is applied optimistically.

use gloo::net::http::{Request, Response};
use luach_shared::{
    DashboardItem, NewDashboardItem, NewProgressGroup, ProgressGroup, UpdateDashboardItem,
    UpdateProgressGroup,
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo::net::Error),
    #[error("server returned status {0}")]
    Status(u16),
}

fn expect_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

pub async fn fetch_dashboard_items() -> Result<Vec<DashboardItem>, ApiError> {
    let response = expect_ok(Request::get("/api/dashboard-items").send().await?)?;
    Ok(response.json().await?)
}

pub async fn create_dashboard_item(new: &NewDashboardItem) -> Result<DashboardItem, ApiError> {
    let response = expect_ok(
        Request::post("/api/dashboard-items")
            .json(new)?
            .send()
            .await?,
    )?;
    Ok(response.json().await?)
}

pub async fn update_dashboard_item(
    id: Uuid,
    patch: &UpdateDashboardItem,
) -> Result<DashboardItem, ApiError> {
    let response = expect_ok(
        Request::put(&format!("/api/dashboard-items/{id}"))
            .json(patch)?
            .send()
            .await?,
    )?;
    Ok(response.json().await?)
}

pub async fn delete_dashboard_item(id: Uuid) -> Result<(), ApiError> {
    expect_ok(
        Request::delete(&format!("/api/dashboard-items/{id}"))
            .send()
            .await?,
    )?;
    Ok(())
}

pub async fn fetch_progress_groups() -> Result<Vec<ProgressGroup>, ApiError> {
    let response = expect_ok(Request::get("/api/progress-groups").send().await?)?;
    Ok(response.json().await?)
}

pub async fn create_progress_group(new: &NewProgressGroup) -> Result<ProgressGroup, ApiError> {
    let response = expect_ok(
        Request::post("/api/progress-groups")
            .json(new)?
            .send()
            .await?,
    )?;
    Ok(response.json().await?)
}

pub async fn update_progress_group(
    id: Uuid,
    patch: &UpdateProgressGroup,
) -> Result<ProgressGroup, ApiError> {
    let response = expect_ok(
        Request::put(&format!("/api/progress-groups/{id}"))
            .json(patch)?
            .send()
            .await?,
    )?;
    Ok(response.json().await?)
}
