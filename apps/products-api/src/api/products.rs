//! Products API routes

use axum::Router;
use domain_products::handlers;

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    handlers::router(state.products.clone(), state.auth.clone())
}
