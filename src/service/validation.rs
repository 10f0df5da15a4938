//! Request validation: turns loosely typed JSON payloads into store inputs.

use crate::error::CatalogError;
use crate::model::{CreateProductRequest, NewProduct, ProductId, ProductPatch, UpdateProductRequest};
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Both `name` and `price` must be present (JSON `null` counts as absent).
    pub fn validate_create(body: CreateProductRequest) -> Result<NewProduct, CatalogError> {
        let (Some(name), Some(price)) = (body.name, body.price) else {
            return Err(CatalogError::Validation("product name and price are required".into()));
        };
        Ok(NewProduct {
            name: name_field(name)?,
            price: price_field(price)?,
        })
    }

    /// `product_id` is required; `name` and `price` are optional.
    pub fn validate_update(body: UpdateProductRequest) -> Result<(ProductId, ProductPatch), CatalogError> {
        let id = body
            .product_id
            .ok_or_else(|| CatalogError::Validation("product_id is required".into()))
            .and_then(id_field)?;
        let patch = ProductPatch {
            name: body.name.map(name_field).transpose()?,
            price: body.price.map(price_field).transpose()?,
        };
        Ok((id, patch))
    }
}

fn name_field(v: Value) -> Result<String, CatalogError> {
    match v {
        Value::String(s) => Ok(s),
        _ => Err(CatalogError::Validation("name must be a string".into())),
    }
}

/// Accepts a number or a numeric string, like a lenient float parse.
fn price_field(v: Value) -> Result<f64, CatalogError> {
    let price = match &v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| CatalogError::Validation(format!("price must be a number, got {}", v)))?;
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::Validation(format!(
            "price must be a non-negative number, got {}",
            price
        )));
    }
    Ok(price)
}

fn id_field(v: Value) -> Result<ProductId, CatalogError> {
    match &v {
        Value::Number(n) => n
            .as_u64()
            .and_then(ProductId::new)
            .ok_or_else(|| CatalogError::Validation(format!("invalid product id: {}", v))),
        Value::String(s) => s.parse(),
        _ => Err(CatalogError::Validation(format!("invalid product id: {}", v))),
    }
}
