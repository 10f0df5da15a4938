//! OpenAPI document for the product API, served at `/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{product, root};
use crate::model::{CreateProductRequest, Product, ProductId, UpdateProductRequest};
use crate::response::{MessageBody, ProductCreated};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Product Catalog", description = "CRUD over a JSON-file backed product list"),
    paths(
        root::root,
        root::error_route,
        product::list,
        product::read,
        product::create,
        product::update,
        product::delete
    ),
    components(schemas(
        Product,
        ProductId,
        CreateProductRequest,
        UpdateProductRequest,
        ProductCreated,
        MessageBody,
        ErrorBody,
        ErrorDetail,
        root::RootBody,
        root::EndpointInfo
    )),
    tags(
        (name = "products", description = "Product catalog CRUD"),
        (name = "meta", description = "Informational and debug routes")
    )
)]
pub struct ApiDoc;
