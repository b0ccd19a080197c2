//! Products Domain
//!
//! In-memory product catalog: CRUD, filtered and paginated listing, and
//! catalog-wide statistics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, API key check on mutations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, query parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌───────────────┐
//! │ Repository  │ ──▶ │ Query / Stats │  ← Pure functions over a snapshot
//! └──────┬──────┘     └───────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{ApiKeyAuth, ApiKeyConfig};
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::seeded();
//! let service = ProductService::new(repository);
//! let auth = ApiKeyAuth::new(&ApiKeyConfig::new("secret"));
//!
//! let router = handlers::router(service, auth);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;
pub mod stats;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{
    ListParams, Pagination, Product, ProductFields, ProductInput, ProductPage, seed_products,
};
pub use query::ProductQuery;
pub use repository::ProductRepository;
pub use service::ProductService;
pub use stats::ProductStats;
