//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{ApiKeyAuth, ErrorResponse, ValidatedJson, api_key_middleware};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{ListParams, Pagination, Product, ProductInput, ProductPage};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::stats::ProductStats;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        product_stats,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(schemas(
        Product,
        ProductInput,
        ProductPage,
        Pagination,
        ProductStats,
        ErrorResponse
    )),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router.
///
/// Reads are public. Create, update and delete go through the API key check
/// before the body is read, so a bad key always wins over a bad payload.
/// `/stats` is registered as a literal segment and never reaches `/{id}`;
/// PUT and DELETE on it behave as they would for a product with that id.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>, auth: ApiKeyAuth) -> Router {
    let shared_service = Arc::new(service);
    let require_api_key = middleware::from_fn_with_state(auth, api_key_middleware);

    Router::new()
        .route("/", get(list_products))
        .route("/stats", get(product_stats))
        .route("/{id}", get(get_product))
        .route("/", post(create_product).route_layer(require_api_key.clone()))
        .route(
            "/stats",
            put(update_stats_id)
                .delete(delete_stats_id)
                .route_layer(require_api_key.clone()),
        )
        .route(
            "/{id}",
            put(update_product)
                .delete(delete_product)
                .route_layer(require_api_key),
        )
        .with_state(shared_service)
}

/// List products, filtered and paginated
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListParams),
    responses(
        (status = 200, description = "One page of products", body = ProductPage),
        (status = 400, description = "Invalid page or limit", body = ErrorResponse),
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ProductResult<Json<ProductPage>> {
    let Query(params) = params.map_err(|e| ProductError::InvalidQuery(e.body_text()))?;
    let page = service.list_products(params).await?;
    Ok(Json(page))
}

/// Catalog statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Products",
    responses(
        (status = 200, description = "Catalog statistics", body = ProductStats),
    )
)]
async fn product_stats<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductStats>> {
    let stats = service.product_stats().await?;
    Ok(Json(stats))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    params(
        ("x-api-key" = String, Header, description = "API key")
    ),
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product; the id is kept
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    request_body = ProductInput,
    params(
        ("id" = String, Path, description = "Product id"),
        ("x-api-key" = String, Header, description = "API key")
    ),
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product id"),
        ("x-api-key" = String, Header, description = "API key")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<StatusCode> {
    service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Id the literal `/stats` segment stands for on PUT and DELETE
const STATS_ID: &str = "stats";

async fn update_stats_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(STATS_ID, input).await?;
    Ok(Json(product))
}

async fn delete_stats_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<StatusCode> {
    service.delete_product(STATS_ID).await?;
    Ok(StatusCode::NO_CONTENT)
}
