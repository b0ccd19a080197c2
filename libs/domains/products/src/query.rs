//! Listing: filter, search, paginate
//!
//! Pure functions over a snapshot of the catalog. Filters apply in a fixed
//! order: category (exact), then search (case-insensitive substring of the
//! name), then the page slice.

use crate::error::{ProductError, ProductResult};
use crate::models::{ListParams, Pagination, Product, ProductPage};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Parsed and checked list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TryFrom<ListParams> for ProductQuery {
    type Error = ProductError;

    /// Empty `category`/`search` count as absent. `page` and `limit` must be
    /// positive integers when present.
    fn try_from(params: ListParams) -> ProductResult<Self> {
        Ok(Self {
            category: params.category.filter(|c| !c.is_empty()),
            search: params.search.filter(|s| !s.is_empty()),
            page: positive("page", params.page.as_deref(), DEFAULT_PAGE)?,
            limit: positive("limit", params.limit.as_deref(), DEFAULT_LIMIT)?,
        })
    }
}

fn positive(name: &str, raw: Option<&str>, default: usize) -> ProductResult<usize> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ProductError::InvalidQuery(format!(
            "'{name}' must be a positive integer, got '{raw}'"
        ))),
    }
}

/// Run a query over a catalog snapshot.
///
/// Pages past the end yield an empty slice with the real totals.
pub fn run(products: Vec<Product>, query: &ProductQuery) -> ProductPage {
    let needle = query.search.as_deref().map(str::to_lowercase);

    let matching: Vec<Product> = products
        .into_iter()
        .filter(|p| query.category.as_deref().is_none_or(|c| p.category == c))
        .filter(|p| {
            needle
                .as_deref()
                .is_none_or(|n| p.name.to_lowercase().contains(n))
        })
        .collect();

    let total = matching.len();
    let start = (query.page - 1).saturating_mul(query.limit);

    let data = matching
        .into_iter()
        .skip(start)
        .take(query.limit)
        .collect();

    ProductPage {
        data,
        pagination: Pagination {
            total,
            page: query.page,
            total_pages: total.div_ceil(query.limit),
        },
    }
}
