//! Product record and the typed inputs accepted by the catalog store.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Positive product identifier. Serialized as a plain JSON integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub const FIRST: ProductId = ProductId(1);

    /// Returns `None` for zero, which is never a valid id.
    pub fn new(raw: u64) -> Option<Self> {
        (raw > 0).then_some(ProductId(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// `None` once the id space is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(ProductId)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(ProductId::new)
            .ok_or_else(|| CatalogError::Validation(format!("invalid product id: '{}'", s)))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

/// Fields required to create a product. The id is assigned by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// Partial update: `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ProductPatch {
    pub(crate) fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}

/// Body of `POST /products/create/`. Fields stay loosely typed until validated.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    /// Number or numeric string.
    #[schema(value_type = Option<f64>)]
    pub price: Option<Value>,
}

/// Body of `PUT /products/update/`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    /// Integer or numeric string.
    #[schema(value_type = Option<u64>)]
    pub product_id: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_ids() {
        assert_eq!("7".parse::<ProductId>().unwrap().get(), 7);
        assert_eq!(" 12 ".parse::<ProductId>().unwrap().get(), 12);
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "0", "-1", "1.5", "abc", "update"] {
            let err = raw.parse::<ProductId>().unwrap_err();
            assert!(matches!(err, CatalogError::Validation(_)), "{raw} should be rejected");
        }
    }

    #[test]
    fn next_stops_at_the_end_of_the_id_space() {
        assert_eq!(ProductId::FIRST.next(), ProductId::new(2));
        assert_eq!(ProductId::new(u64::MAX).unwrap().next(), None);
    }

    #[test]
    fn patch_keeps_unsupplied_fields() {
        let mut product = Product {
            id: ProductId::FIRST,
            name: "Lamp".into(),
            price: 20.0,
        };
        ProductPatch {
            name: None,
            price: Some(18.5),
        }
        .apply_to(&mut product);
        assert_eq!(product.name, "Lamp");
        assert_eq!(product.price, 18.5);
    }

    #[test]
    fn id_serializes_as_integer() {
        let product = Product {
            id: ProductId::new(3).unwrap(),
            name: "Mug".into(),
            price: 4.0,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "name": "Mug", "price": 4.0 }));
    }
}
