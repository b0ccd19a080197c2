use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

/// Catalog-wide aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: usize,
    /// Number of products per category
    pub category_count: BTreeMap<String, usize>,
    /// Sum of all prices
    pub total_value: f64,
    /// `totalValue / totalProducts`, or 0 for an empty catalog
    pub average_price: f64,
}

/// Aggregate a catalog snapshot in a single pass.
pub fn aggregate(products: &[Product]) -> ProductStats {
    let mut category_count = BTreeMap::new();
    let mut total_value = 0.0;

    for product in products {
        *category_count.entry(product.category.clone()).or_insert(0) += 1;
        total_value += product.price;
    }

    let total_products = products.len();
    let average_price = if total_products == 0 {
        0.0
    } else {
        total_value / total_products as f64
    };

    ProductStats {
        total_products,
        category_count,
        total_value,
        average_price,
    }
}
