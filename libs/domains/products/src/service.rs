//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{ProductError, ProductResult};
use crate::models::{ListParams, Product, ProductInput, ProductPage};
use crate::query::{self, ProductQuery};
use crate::repository::ProductRepository;
use crate::stats::{self, ProductStats};

/// Product service providing business logic operations
///
/// The service validates payloads and query parameters, then delegates to the
/// repository. Listing and stats work on a single consistent snapshot.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products, filtered and paginated
    #[instrument(skip(self))]
    pub async fn list_products(&self, params: ListParams) -> ProductResult<ProductPage> {
        let query = ProductQuery::try_from(params)?;
        let snapshot = self.repository.snapshot().await?;
        Ok(query::run(snapshot, &query))
    }

    /// Catalog-wide statistics
    #[instrument(skip(self))]
    pub async fn product_stats(&self) -> ProductResult<ProductStats> {
        let snapshot = self.repository.snapshot().await?;
        Ok(stats::aggregate(&snapshot))
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let fields = input.into_fields()?;
        let product = self.repository.insert(fields).await?;

        info!(id = %product.id, "Product created");
        Ok(product)
    }

    /// Replace an existing product; the id never changes
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        let fields = input.into_fields()?;
        let product = self.repository.replace(id, fields).await?;

        info!(id = %product.id, "Product updated");
        Ok(product)
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        let removed = self.repository.remove(id).await?;

        info!(id = %removed.id, "Product deleted");
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
