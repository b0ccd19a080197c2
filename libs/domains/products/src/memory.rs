//! In-memory product repository
//!
//! Records live in a `Vec` behind a `tokio::sync::RwLock`: reads share the
//! lock, every mutation holds the write lock for its whole read-modify-write.
//! Nothing survives a restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFields, seed_products};
use crate::repository::ProductRepository;

#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the given products, in order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Catalog pre-filled with the three demo products.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }
}

fn position(products: &[Product], id: &str) -> Option<usize> {
    products.iter().position(|product| product.id == id)
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, fields: ProductFields) -> ProductResult<Product> {
        let product = Product::new(Uuid::new_v4().to_string(), fields);

        let mut products = self.products.write().await;
        products.push(product.clone());
        debug!(id = %product.id, total = products.len(), "Product stored");

        Ok(product)
    }

    async fn find(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|product| product.id == id).cloned())
    }

    async fn find_index(&self, id: &str) -> ProductResult<Option<usize>> {
        let products = self.products.read().await;
        Ok(position(&products, id))
    }

    async fn replace(&self, id: &str, fields: ProductFields) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let index = position(&products, id).ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let product = &mut products[index];
        product.apply(fields);
        Ok(product.clone())
    }

    async fn remove(&self, id: &str) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let index = position(&products, id).ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let removed = products.remove(index);
        debug!(id, remaining = products.len(), "Product removed");
        Ok(removed)
    }

    async fn snapshot(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn fields(name: &str, price: f64, category: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            description: None,
            price,
            category: category.to_string(),
            in_stock: None,
        }
    }

    #[tokio::test]
    async fn test_insert_generates_unique_ids() {
        let repo = InMemoryProductRepository::new();
        let first = repo.insert(fields("A", 1.0, "x")).await.unwrap();
        let second = repo.insert(fields("B", 2.0, "x")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
        assert_eq!(repo.snapshot().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_find_and_find_index() {
        let repo = InMemoryProductRepository::seeded();

        assert_eq!(repo.find("2").await.unwrap().unwrap().name, "Smartphone");
        assert_eq!(repo.find_index("3").await.unwrap(), Some(2));
        assert_eq!(repo.find("nope").await.unwrap(), None);
        assert_eq!(repo.find_index("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_keeps_id_and_position() {
        let repo = InMemoryProductRepository::seeded();
        let updated = repo
            .replace("2", fields("Phone", 700.0, "mobile"))
            .await
            .unwrap();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "Phone");
        assert_eq!(repo.find_index("2").await.unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_replace_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let result = repo.replace("1", fields("A", 1.0, "x")).await;
        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == "1"));
    }

    #[tokio::test]
    async fn test_remove_preserves_order() {
        let repo = InMemoryProductRepository::seeded();
        let removed = repo.remove("2").await.unwrap();
        assert_eq!(removed.id, "2");

        let ids: Vec<_> = repo
            .snapshot()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);

        assert!(matches!(
            repo.remove("2").await,
            Err(ProductError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_are_all_kept() {
        let repo = Arc::new(InMemoryProductRepository::new());

        let tasks: Vec<_> = (0..50)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.insert(fields(&format!("P{i}"), i as f64, "bulk"))
                        .await
                        .unwrap()
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(repo.snapshot().await.unwrap().len(), 50);
    }
}
