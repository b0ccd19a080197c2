use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::ProductResult;

/// Product entity as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier, never changes after creation
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price, never negative
    pub price: f64,
    /// Free-form category, matched exactly when filtering
    pub category: String,
    #[serde(default)]
    pub in_stock: bool,
}

impl Product {
    /// Build a new record from validated fields.
    ///
    /// `inStock` defaults to `false` when the payload omits it.
    pub fn new(id: impl Into<String>, fields: ProductFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock.unwrap_or(false),
        }
    }

    /// Merge validated fields into this record. The id is kept.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.category = fields.category;
        if let Some(description) = fields.description {
            self.description = Some(description);
        }
        if let Some(in_stock) = fields.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// Request body for create and full update.
///
/// Members are kept as raw JSON and type-checked in [`Validate`], so a value
/// of the wrong type is reported against its own field. Unknown members
/// (including a client supplied `id`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[schema(value_type = String)]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
    /// Must be a number, zero or more
    #[schema(value_type = f64)]
    pub price: Option<Value>,
    #[schema(value_type = String)]
    pub category: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<bool>)]
    pub in_stock: Option<Value>,
}

impl ProductInput {
    /// Validate the payload and unwrap its required members.
    pub fn into_fields(self) -> ProductResult<ProductFields> {
        Ok(self.parse()?)
    }

    /// Check every member, collecting one error per offending field.
    fn parse(&self) -> Result<ProductFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(self.name.as_ref(), "name", &mut errors);
        let category = required_text(self.category.as_ref(), "category", &mut errors);
        let price = match self.price.as_ref() {
            Some(Value::Number(n)) => match n.as_f64() {
                Some(price) if price >= 0.0 => Some(price),
                _ => invalid(&mut errors, "price", "range"),
            },
            Some(_) => invalid(&mut errors, "price", "type"),
            None => invalid(&mut errors, "price", "required"),
        };
        let description = optional(
            self.description.as_ref(),
            "description",
            Value::as_str,
            &mut errors,
        );
        let in_stock = optional(self.in_stock.as_ref(), "inStock", Value::as_bool, &mut errors);

        match (name, price, category) {
            (Some(name), Some(price), Some(category)) if errors.is_empty() => Ok(ProductFields {
                name,
                description: description.map(str::to_owned),
                price,
                category,
                in_stock,
            }),
            _ => Err(errors),
        }
    }
}

impl Validate for ProductInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.parse().map(|_| ())
    }
}

fn invalid<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    code: &'static str,
) -> Option<T> {
    errors.add(field, ValidationError::new(code));
    None
}

/// A present, non-empty string.
fn required_text(
    value: Option<&Value>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        Some(Value::String(_)) => invalid(errors, field, "length"),
        Some(_) => invalid(errors, field, "type"),
        None => invalid(errors, field, "required"),
    }
}

/// An absent member, or one `read` accepts.
fn optional<'a, T>(
    value: Option<&'a Value>,
    field: &'static str,
    read: fn(&'a Value) -> Option<T>,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let value = value?;
    read(value).or_else(|| invalid(errors, field, "type"))
}

/// Validated product fields, ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: Option<bool>,
}

/// Raw list query parameters, as received on the wire
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring of the product name
    pub search: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
}

/// Pagination metadata returned with every list page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Number of products matching the filters, before slicing
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

/// One page of list results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub pagination: Pagination,
}

/// Products every fresh catalog starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: Some("High-performance laptop with 16GB RAM".to_string()),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: Some("Latest model with 128GB storage".to_string()),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: Some("Programmable coffee maker with timer".to_string()),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}
