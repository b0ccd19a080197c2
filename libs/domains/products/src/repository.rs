use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductFields};

/// Repository trait for Product persistence
///
/// Every operation is atomic with respect to every other one. Implementations
/// keep records in insertion order; `remove` preserves the order of the rest.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product under a freshly generated id and return it
    async fn insert(&self, fields: ProductFields) -> ProductResult<Product>;

    /// Get a product by id
    async fn find(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Position of a product in insertion order.
    ///
    /// A read-only lookup for callers. `replace` and `remove` locate their
    /// record themselves while holding the write lock, so a position read here
    /// must not be used to address a later mutation.
    async fn find_index(&self, id: &str) -> ProductResult<Option<usize>>;

    /// Merge fields into an existing product, keeping its id
    ///
    /// Fails with `NotFound` when no product has this id.
    async fn replace(&self, id: &str, fields: ProductFields) -> ProductResult<Product>;

    /// Remove a product and return it
    ///
    /// Fails with `NotFound` when no product has this id.
    async fn remove(&self, id: &str) -> ProductResult<Product>;

    /// Consistent copy of every product in insertion order
    async fn snapshot(&self) -> ProductResult<Vec<Product>>;
}
