use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Serialize)]
struct WelcomeResponse {
    message: &'static str,
}

async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Product API! Go to /api/products to see all products.",
    })
}

/// `GET /`, served outside the `/api` prefix
pub fn router() -> Router {
    Router::new().route("/", get(welcome))
}
