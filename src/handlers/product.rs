//! Product CRUD handlers. Input is validated before the store is touched.

use crate::error::{AppError, CatalogError, ErrorBody};
use crate::model::{CreateProductRequest, Product, ProductId, UpdateProductRequest};
use crate::response::{created, ProductCreated};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<ProductId, AppError> {
    Ok(id_str.parse::<ProductId>()?)
}

/// Not-found on mutating routes is reported as 400.
fn missing_for_mutation(err: CatalogError) -> AppError {
    match err {
        CatalogError::NotFound(_) => AppError::BadRequest(err.to_string()),
        other => other.into(),
    }
}

/// GET /products/ — the whole catalog, in insertion order.
#[utoipa::path(
    get,
    path = "/products/",
    tag = "products",
    responses((status = 200, description = "All products", body = [Product]))
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    let catalog = state.catalog.lock().await;
    Json(catalog.list_all().to_vec())
}

/// GET /products/:id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = u64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No product with this id", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Product>, AppError> {
    let id = parse_id(&id_str)?;
    let catalog = state.catalog.lock().await;
    let product = catalog.get_by_id(id)?;
    Ok(Json(product.clone()))
}

/// POST /products/create/
#[utoipa::path(
    post,
    path = "/products/create/",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductCreated),
        (status = 400, description = "Name or price missing or invalid", body = ErrorBody),
        (status = 413, description = "Body over the configured limit", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let new = RequestValidator::validate_create(body)?;
    let product = state.catalog.lock().await.create(new).await?;
    Ok(created(product))
}

/// PUT /products/update/ — id comes from the body as `product_id`.
#[utoipa::path(
    put,
    path = "/products/update/",
    tag = "products",
    request_body = UpdateProductRequest,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Id missing, malformed or not found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(body) = body?;
    let (id, patch) = RequestValidator::validate_update(body)?;
    // The store checks existence before writing anything.
    let mut catalog = state.catalog.lock().await;
    catalog.update(id, patch).await.map_err(missing_for_mutation)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /products/delete/:id
#[utoipa::path(
    delete,
    path = "/products/delete/{id}",
    tag = "products",
    params(("id" = u64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Id malformed or not found", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    let mut catalog = state.catalog.lock().await;
    catalog.delete(id).await.map_err(missing_for_mutation)?;
    Ok(StatusCode::NO_CONTENT)
}
