//! API routes module

pub mod products;
pub mod welcome;

use axum::Router;
use axum_helpers::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes, without the `/api` prefix
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Full application: `/api/*`, the welcome route, docs and `/health`
pub fn app(state: &AppState) -> Router {
    let root = welcome::router().merge(health_router(state.config.app));
    create_router::<ApiDoc>(routes(state), root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::{ApiKeyConfig, ErrorResponse};
    use core_config::{AppInfo, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn state(seed_products: bool) -> AppState {
        AppState::new(Config {
            app: AppInfo {
                name: "products_api",
                version: "0.0.0",
            },
            server: ServerConfig::default(),
            api_key: ApiKeyConfig::new("test-key"),
            environment: Environment::Development,
            seed_products,
        })
    }

    async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_welcome_route() {
        let response = app(&state(true)).oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_body(response.into_body()).await;
        assert_eq!(
            body,
            json!({ "message": "Welcome to the Product API! Go to /api/products to see all products." })
        );
    }

    #[tokio::test]
    async fn test_products_are_served_under_api_prefix() {
        let response = app(&state(true))
            .oneshot(get("/api/products"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["pagination"]["total"], 3);
    }

    #[tokio::test]
    async fn test_unseeded_catalog_starts_empty() {
        let response = app(&state(false))
            .oneshot(get("/api/products/stats"))
            .await
            .unwrap();

        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["totalProducts"], 0);
        assert_eq!(body["averagePrice"], 0.0);
    }

    #[tokio::test]
    async fn test_state_clones_share_catalog() {
        let state = state(true);
        let request = Request::builder()
            .method("DELETE")
            .uri("/api/products/1")
            .header("x-api-key", "test-key")
            .body(Body::empty())
            .unwrap();

        let response = app(&state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app(&state.clone())
            .oneshot(get("/api/products/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let response = app(&state(true))
            .oneshot(get("/api/unknown"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(error.error, "NotFound");
    }

    #[tokio::test]
    async fn test_unsupported_method_returns_json_405() {
        for (method, uri) in [
            ("PATCH", "/api/products"),
            ("PATCH", "/api/products/1"),
            ("POST", "/health"),
        ] {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .header("x-api-key", "test-key")
                .body(Body::empty())
                .unwrap();

            let response = app(&state(true)).oneshot(request).await.unwrap();
            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "{method} {uri}"
            );

            let error: ErrorResponse = json_body(response.into_body()).await;
            assert_eq!(error.error, "MethodNotAllowed");
        }
    }

    #[tokio::test]
    async fn test_health_reports_package() {
        let response = app(&state(true)).oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "products_api");
    }

    #[tokio::test]
    async fn test_openapi_lists_product_paths() {
        let response = app(&state(true))
            .oneshot(get("/api-docs/openapi.json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_body(response.into_body()).await;
        assert!(body["paths"].get("/api/products").is_some());
        assert!(body["paths"].get("/api/products/stats").is_some());
        assert!(body["paths"].get("/api/products/{id}").is_some());
    }
}
