//! Storage backends for the product collection. Every save rewrites the whole collection.

use crate::error::StorageError;
use crate::model::Product;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Where the catalog is loaded from at startup and written to after each mutation.
#[async_trait]
pub trait ProductStorage: Send + Sync {
    async fn load(&self) -> Result<Vec<Product>, StorageError>;

    /// Replace the persisted collection with `products`.
    async fn save(&self, products: &[Product]) -> Result<(), StorageError>;
}

/// A single JSON file holding an array of products. No atomic rename: a crash
/// mid-write can leave a truncated file behind.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl ProductStorage for JsonFileStorage {
    async fn load(&self) -> Result<Vec<Product>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "data file missing, starting with empty catalog");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }
        let bytes = serde_json::to_vec_pretty(products)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), count = products.len(), "catalog written");
        Ok(())
    }
}

/// In-process backend. Keeps the last saved collection and counts writes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    products: Mutex<Vec<Product>>,
    writes: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        MemoryStorage {
            products: Mutex::new(products),
            writes: AtomicUsize::new(0),
        }
    }

    /// Copy of the collection as last saved (or as seeded).
    pub fn snapshot(&self) -> Vec<Product> {
        self.products
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of successful `save` calls.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductStorage for MemoryStorage {
    async fn load(&self) -> Result<Vec<Product>, StorageError> {
        Ok(self.snapshot())
    }

    async fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        *self
            .products
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = products.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
