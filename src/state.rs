//! Shared application state for all routes.

use crate::config::Settings;
use crate::service::CatalogStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    /// Held for the whole request, including the file rewrite, so mutations never interleave.
    pub catalog: Arc<Mutex<CatalogStore>>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(catalog: CatalogStore, settings: Settings) -> Self {
        AppState {
            catalog: Arc::new(Mutex::new(catalog)),
            settings: Arc::new(settings),
        }
    }
}
