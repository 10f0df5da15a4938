//! Root informational endpoint and the debug error route.

use crate::error::{AppError, ErrorBody};
use crate::response::{message, MessageBody};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Serialize, ToSchema)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub about: &'static str,
}

/// Product API surface, shown by `GET /` and in the startup banner.
pub const ENDPOINTS: &[EndpointInfo] = &[
    EndpointInfo { method: "GET", path: "/", about: "root route" },
    EndpointInfo { method: "GET", path: "/products/", about: "lists all products" },
    EndpointInfo { method: "GET", path: "/products/:id", about: "returns a single product by its id" },
    EndpointInfo { method: "PUT", path: "/products/update/", about: "updates a product name or price by its id (body)" },
    EndpointInfo { method: "POST", path: "/products/create/", about: "creates a new product from its name and price" },
    EndpointInfo { method: "DELETE", path: "/products/delete/:id", about: "deletes a product by its id (param)" },
];

#[derive(Serialize, ToSchema)]
pub struct RootBody {
    pub message: String,
    pub endpoints: Vec<EndpointInfo>,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Welcome message and endpoint list", body = RootBody))
)]
pub async fn root() -> Json<RootBody> {
    Json(RootBody {
        message: "Hello from the product catalog!".into(),
        endpoints: ENDPOINTS.to_vec(),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorRouteParams {
    #[serde(default)]
    pub ok: bool,
}

/// GET /error-route — fails with a generic 500 unless `?ok=true`.
#[utoipa::path(
    get,
    path = "/error-route",
    tag = "meta",
    params(("ok" = Option<bool>, Query, description = "Answer normally instead of failing")),
    responses(
        (status = 200, description = "Debug greeting", body = MessageBody),
        (status = 400, description = "Malformed query string", body = ErrorBody),
        (status = 500, description = "Deliberate failure", body = ErrorBody)
    )
)]
pub async fn error_route(
    State(state): State<AppState>,
    params: Result<Query<ErrorRouteParams>, QueryRejection>,
) -> Result<Json<MessageBody>, AppError> {
    let Query(params) = params?;
    if params.ok {
        return Ok(message(format!("Hello World! Listening on port {}", state.settings.port)));
    }
    Err(AppError::Internal("deliberate failure from /error-route".into()))
}
