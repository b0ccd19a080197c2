//! Application state management

use axum_helpers::ApiKeyAuth;
use domain_products::{InMemoryProductRepository, ProductService};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Cloning shares the same in-memory catalog
    pub products: ProductService<InMemoryProductRepository>,
    pub auth: ApiKeyAuth,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let repository = if config.seed_products {
            InMemoryProductRepository::seeded()
        } else {
            InMemoryProductRepository::new()
        };

        Self {
            products: ProductService::new(repository),
            auth: ApiKeyAuth::new(&config.api_key),
            config,
        }
    }
}
