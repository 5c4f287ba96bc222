//! API route definitions
//!
//! This module defines all catalog routes and builds the router.

use axum::{routing::get, Router};

use crate::handlers::{
    get_chart, get_chart_icon, get_chart_readme, get_chart_schema, get_chart_values,
    get_chart_version, list_chart_versions, list_charts, list_repo_charts, live, ready, AppState,
};

/// Build the API router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Probe endpoints
        .route("/live", get(live))
        .route("/ready", get(ready))
        // Versioned catalog routes
        .nest("/v1", build_v1_routes())
        .with_state(state)
}

/// Build v1 catalog routes
fn build_v1_routes() -> Router<AppState> {
    Router::new()
        // Chart catalog
        .route("/ns/:namespace/charts", get(list_charts))
        .route("/ns/:namespace/charts/:repo", get(list_repo_charts))
        .route("/ns/:namespace/charts/:repo/:chart_name", get(get_chart))
        .route(
            "/ns/:namespace/charts/:repo/:chart_name/versions",
            get(list_chart_versions),
        )
        .route(
            "/ns/:namespace/charts/:repo/:chart_name/versions/:version",
            get(get_chart_version),
        )
        // Chart assets
        .route("/ns/:namespace/assets/:repo/:chart_name/logo", get(get_chart_icon))
        .route(
            "/ns/:namespace/assets/:repo/:chart_name/versions/:version/README.md",
            get(get_chart_readme),
        )
        .route(
            "/ns/:namespace/assets/:repo/:chart_name/versions/:version/values.schema.json",
            get(get_chart_schema),
        )
        .route(
            "/ns/:namespace/assets/:repo/:chart_name/versions/:version/values/:values_name",
            get(get_chart_values),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chartsvc_core::{Chart, ChartFiles, ChartVersion, Repo};
    use chartsvc_db::{
        ChartFilesRepository, ChartQuery, ChartRepository, DbError, DbResult, MemStore,
    };
    use chartsvc_service::ServiceRegistry;
    use http_body_util::BodyExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Store double that fails every call and counts round-trips.
    #[derive(Default)]
    struct FailingStore {
        chart_calls: AtomicUsize,
        files_calls: AtomicUsize,
    }

    #[async_trait]
    impl ChartRepository for FailingStore {
        async fn get(&self, _namespace: &str, _chart_id: &str) -> DbResult<Chart> {
            self.chart_calls.fetch_add(1, Ordering::SeqCst);
            Err(DbError::Query("connection reset".to_string()))
        }

        async fn list(&self, _query: &ChartQuery) -> DbResult<Vec<Chart>> {
            self.chart_calls.fetch_add(1, Ordering::SeqCst);
            Err(DbError::Query("connection reset".to_string()))
        }

        async fn count(&self, _query: &ChartQuery) -> DbResult<i64> {
            self.chart_calls.fetch_add(1, Ordering::SeqCst);
            Err(DbError::Query("connection reset".to_string()))
        }
    }

    #[async_trait]
    impl ChartFilesRepository for FailingStore {
        async fn get(&self, _namespace: &str, _files_id: &str) -> DbResult<ChartFiles> {
            self.files_calls.fetch_add(1, Ordering::SeqCst);
            Err(DbError::Query("connection reset".to_string()))
        }
    }

    fn router_with(store: &MemStore) -> Router {
        let services =
            ServiceRegistry::new(Arc::new(store.clone()), Arc::new(store.clone()));
        build_router(AppState::new(services))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn seeded_store() -> MemStore {
        let store = MemStore::new();
        store.insert_chart(Chart {
            id: "stable/wordpress".to_string(),
            name: "wordpress".to_string(),
            repo: Repo::new("stable", "default"),
            chart_versions: vec![ChartVersion {
                version: "1.2.3".to_string(),
                app_version: "5.0".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        });
        store
    }

    #[tokio::test]
    async fn test_probe_routes() {
        let store = MemStore::new();
        let response = router_with(&store)
            .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router_with(&store)
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chart_list_route() {
        let store = seeded_store();
        let (status, body) = get_json(router_with(&store), "/v1/ns/default/charts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["id"], "stable/wordpress");
        assert_eq!(body["meta"]["totalPages"], 1);
    }

    #[tokio::test]
    async fn test_chart_detail_route() {
        let store = seeded_store();
        let (status, body) =
            get_json(router_with(&store), "/v1/ns/default/charts/stable/wordpress").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["type"], "chart");
        assert_eq!(
            body["data"]["links"]["self"],
            "/v1/ns/default/charts/stable/wordpress"
        );
    }

    #[tokio::test]
    async fn test_missing_chart_is_404() {
        let store = seeded_store();
        let (status, body) =
            get_json(router_with(&store), "/v1/ns/default/charts/stable/nothere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_version_detail_route() {
        let store = seeded_store();
        let (status, body) = get_json(
            router_with(&store),
            "/v1/ns/default/charts/stable/wordpress/versions/1.2.3",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["type"], "chartVersion");
        assert_eq!(body["data"]["id"], "stable/wordpress-1.2.3");
    }

    #[tokio::test]
    async fn test_failing_store_on_detail_is_404_with_one_call() {
        let store = Arc::new(FailingStore::default());
        let services = ServiceRegistry::new(store.clone(), store.clone());
        let router = build_router(AppState::new(services));

        let (status, body) =
            get_json(router, "/v1/ns/default/charts/stable/wordpress").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(store.chart_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.files_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failing_store_on_icon_is_404_with_one_call() {
        let store = Arc::new(FailingStore::default());
        let services = ServiceRegistry::new(store.clone(), store.clone());
        let router = build_router(AppState::new(services));

        let (status, _) =
            get_json(router, "/v1/ns/default/assets/stable/wordpress/logo").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(store.chart_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failing_store_on_readme_is_404_with_one_call() {
        let store = Arc::new(FailingStore::default());
        let services = ServiceRegistry::new(store.clone(), store.clone());
        let router = build_router(AppState::new(services));

        let (status, _) = get_json(
            router,
            "/v1/ns/default/assets/stable/wordpress/versions/1.2.3/README.md",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(store.files_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.chart_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_namespace_isolation() {
        let store = seeded_store();
        let (status, body) = get_json(router_with(&store), "/v1/ns/other/charts").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].as_array().unwrap().is_empty());
    }
}
