//! Product catalog routes. Trailing-slash and bare forms both resolve.

use crate::handlers::product::{create, delete as delete_handler, list, read, update};
use crate::handlers::root::{error_route, root};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/products", get(list))
        .route("/products/", get(list))
        .route("/products/:id", get(read))
        .route("/products/update", put(update))
        .route("/products/update/", put(update))
        .route("/products/create", post(create))
        .route("/products/create/", post(create))
        .route("/products/delete/:id", delete(delete_handler))
        .route("/error-route", get(error_route))
        .with_state(state)
}
