//! Product catalog: a JSON-over-HTTP CRUD service over a flat JSON file.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, CatalogError, ConfigError, StorageError};
pub use handlers::root::ENDPOINTS;
pub use model::{NewProduct, Product, ProductId, ProductPatch};
pub use routes::{app, common_routes, product_routes};
pub use service::{CatalogStore, RequestValidator};
pub use state::AppState;
pub use store::{JsonFileStorage, MemoryStorage, ProductStorage};
