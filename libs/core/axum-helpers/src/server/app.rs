use super::shutdown::shutdown_signal;
use crate::auth::API_KEY_HEADER;
use crate::errors::handlers::{method_not_allowed, not_found, panic_response};
use axum::{
    Router,
    http::{HeaderName, Method, header},
};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let router = Router::new();
///     let config = ServerConfig::default();
///     create_app(router, &config).await?;
///     Ok(())
/// }
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// CORS policy for the public API.
///
/// Any origin may call the API; mutating calls still need `x-api-key`, so
/// that header is explicitly allowed.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(API_KEY_HEADER),
        ])
        .max_age(Duration::from_secs(3600))
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`)
/// - API routes nested under `/api`
/// - JSON 404 fallback, and a JSON 405 for known paths called with another method
/// - Panic recovery rendering the `Internal` error body
/// - CORS, response compression and request tracing (outermost)
///
/// Routes outside `/api` (root, health) belong in `root`; the fallbacks and
/// layers only cover routes registered before they are applied.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().nest("/things", things::router(service));
/// let router = create_router::<ApiDoc>(api_routes, Router::new());
/// ```
pub fn create_router<T>(apis: Router, root: Router) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(root)
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CompressionLayer::new())
        .layer(create_cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi()]
    struct EmptyDoc;

    async fn boom() -> StatusCode {
        panic!("kaboom")
    }

    fn app() -> Router {
        let apis = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .route("/boom", get(boom));
        let root = Router::new().route("/", get(|| async { "root" }));
        create_router::<EmptyDoc>(apis, root)
    }

    async fn get_path(path: &str) -> (StatusCode, Vec<u8>) {
        send("GET", path).await
    }

    async fn send(method: &str, path: &str) -> (StatusCode, Vec<u8>) {
        let request = axum::http::Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_api_routes_are_nested_under_api() {
        let (status, body) = get_path("/api/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"pong");

        let (status, _) = get_path("/ping").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_routes_are_merged() {
        let (status, body) = get_path("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"root");
    }

    #[tokio::test]
    async fn test_fallback_renders_not_found_body() {
        let (status, body) = get_path("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "NotFound");
    }

    #[tokio::test]
    async fn test_wrong_method_renders_json_405() {
        for (method, path) in [("POST", "/api/ping"), ("DELETE", "/")] {
            let (status, body) = send(method, path).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {path}");

            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["error"], "MethodNotAllowed");
            assert_eq!(json["code"], 1005);
        }
    }

    #[tokio::test]
    async fn test_panicking_handler_renders_internal_error() {
        let (status, body) = get_path("/api/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal");
        assert!(!json["message"].as_str().unwrap().contains("kaboom"));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, body) = get_path("/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("openapi").is_some());
    }
}
