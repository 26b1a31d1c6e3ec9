//! REST route table.

use axum::Router;
use axum::routing::{get, put};

use crate::AppState;

pub mod dashboard_items;
pub mod progress_groups;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/dashboard-items",
            get(dashboard_items::list).post(dashboard_items::create),
        )
        .route(
            "/api/dashboard-items/{id}",
            put(dashboard_items::update).delete(dashboard_items::remove),
        )
        .route(
            "/api/progress-groups",
            get(progress_groups::list).post(progress_groups::create),
        )
        .route("/api/progress-groups/{id}", put(progress_groups::update))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use luach_shared::{DashboardItem, ProgressGroup};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::router;
    use crate::AppState;
    use crate::service::{MemStore, seed};

    fn test_app() -> Router {
        router(AppState {
            storage: Arc::new(MemStore::default()),
        })
    }

    fn seeded_app() -> Router {
        let storage = MemStore::default();
        seed::seed_if_empty(&storage).unwrap();
        router(AppState {
            storage: Arc::new(storage),
        })
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_item() -> Value {
        json!({
            "site": "אתר חברת ABC",
            "status": "בטיפול",
            "date": "2024-01-15",
            "contactName": "יוסי כהן",
            "clientName": "חברת ABC בע\"ם"
        })
    }

    #[tokio::test]
    async fn test_list_items_starts_empty() {
        let response = test_app()
            .oneshot(get_request("/api/dashboard-items"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_seeded_store_lists_in_insertion_order() {
        let response = seeded_app()
            .oneshot(get_request("/api/dashboard-items"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let items: Vec<DashboardItem> =
            serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].site, "אתר חברת ABC");
        assert_eq!(items[4].site, "אפליקציית JKL");
    }

    #[tokio::test]
    async fn test_create_item_returns_201_with_assigned_fields() {
        let app = test_app();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/dashboard-items", valid_item()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: DashboardItem =
            serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(created.site, "אתר חברת ABC");

        let response = app
            .oneshot(get_request("/api/dashboard-items"))
            .await
            .unwrap();
        let items: Vec<DashboardItem> =
            serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_item_rejects_empty_required_field() {
        let mut payload = valid_item();
        payload["site"] = json!("");
        let response = test_app()
            .oneshot(json_request("POST", "/api/dashboard-items", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Invalid data provided" })
        );
    }

    #[tokio::test]
    async fn test_create_item_rejects_malformed_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/dashboard-items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("not json"))
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_item_merges_partial_payload() {
        let app = test_app();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/dashboard-items", valid_item()))
            .await
            .unwrap();
        let created: DashboardItem =
            serde_json::from_value(body_json(response).await).unwrap();

        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/dashboard-items/{}", created.id),
                json!({ "status": "הושלם" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let updated: DashboardItem =
            serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(updated.status, "הושלם");
        assert_eq!(updated.site, created.site);
    }

    #[tokio::test]
    async fn test_update_unknown_item_is_404() {
        let response = test_app()
            .oneshot(json_request(
                "PUT",
                "/api/dashboard-items/00000000-0000-0000-0000-000000000000",
                json!({ "status": "הושלם" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Item not found" })
        );
    }

    #[tokio::test]
    async fn test_delete_item_is_204_then_404() {
        let app = test_app();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/dashboard-items", valid_item()))
            .await
            .unwrap();
        let created: DashboardItem =
            serde_json::from_value(body_json(response).await).unwrap();
        let uri = format!("/api/dashboard-items/{}", created.id);

        let delete = |app: Router, uri: String| async move {
            app.oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
        };

        let response = delete(app.clone(), uri.clone()).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = delete(app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_group_applies_counter_defaults() {
        let response = test_app()
            .oneshot(json_request(
                "POST",
                "/api/progress-groups",
                json!({ "name": "קבוצת פנייה א" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let group: ProgressGroup =
            serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(group.completed, 0);
        assert_eq!(group.total, 0);
        assert_eq!(group.percentage, 0);
    }

    #[tokio::test]
    async fn test_update_unknown_group_is_404() {
        let response = test_app()
            .oneshot(json_request(
                "PUT",
                "/api/progress-groups/00000000-0000-0000-0000-000000000000",
                json!({ "percentage": 100 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Group not found" })
        );
    }
}
