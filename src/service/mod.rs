//! CatalogStore and request validation.

mod catalog;
mod validation;
pub use catalog::CatalogStore;
pub use validation::RequestValidator;
