//! Response bodies shared by the handlers.

use crate::model::Product;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ProductCreated {
    pub message: String,
    pub data: Product,
}

pub fn message(text: impl Into<String>) -> Json<MessageBody> {
    Json(MessageBody {
        message: text.into(),
    })
}

pub fn created(product: Product) -> (StatusCode, Json<ProductCreated>) {
    (
        StatusCode::CREATED,
        Json(ProductCreated {
            message: "product created".into(),
            data: product,
        }),
    )
}
