//! In-memory product catalog with full-collection persistence after every mutation.

use crate::error::{CatalogError, StorageError};
use crate::model::{NewProduct, Product, ProductId, ProductPatch};
use crate::store::ProductStorage;
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered product list (insertion order) plus the backend it is persisted to.
pub struct CatalogStore {
    products: Vec<Product>,
    storage: Arc<dyn ProductStorage>,
}

impl CatalogStore {
    /// Load the collection from `storage`. Rejects zero or duplicate ids.
    pub async fn load(storage: Arc<dyn ProductStorage>) -> Result<Self, StorageError> {
        let products = storage.load().await?;
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if p.id.get() == 0 {
                return Err(StorageError::InvalidRecord("product id 0 is not allowed".into()));
            }
            if !seen.insert(p.id) {
                return Err(StorageError::InvalidRecord(format!("duplicate product id {}", p.id)));
            }
        }
        tracing::info!(count = products.len(), "catalog loaded");
        Ok(CatalogStore { products, storage })
    }

    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get_by_id(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Append a product with id `max + 1` (1 when empty) and persist.
    pub async fn create(&mut self, new: NewProduct) -> Result<Product, CatalogError> {
        let product = Product {
            id: self.next_id()?,
            name: new.name,
            price: new.price,
        };
        let mut next = self.products.clone();
        next.push(product.clone());
        self.commit(next).await?;
        tracing::info!(id = %product.id, name = %product.name, price = product.price, "product created");
        Ok(product)
    }

    /// Replace the supplied fields of product `id` and persist.
    pub async fn update(&mut self, id: ProductId, patch: ProductPatch) -> Result<Product, CatalogError> {
        let idx = self.position(id)?;
        let mut next = self.products.clone();
        tracing::info!(product = ?next[idx], "product to be updated");
        patch.apply_to(&mut next[idx]);
        let updated = next[idx].clone();
        self.commit(next).await?;
        tracing::info!(id = %id, "product updated");
        Ok(updated)
    }

    /// Remove product `id` and persist the remaining collection.
    pub async fn delete(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        let idx = self.position(id)?;
        let mut next = self.products.clone();
        let removed = next.remove(idx);
        tracing::info!(product = ?removed, "product to be deleted");
        self.commit(next).await?;
        tracing::info!(id = %id, "product deleted");
        Ok(removed)
    }

    fn next_id(&self) -> Result<ProductId, CatalogError> {
        match self.products.iter().map(|p| p.id).max() {
            None => Ok(ProductId::FIRST),
            Some(max) => max
                .next()
                .ok_or_else(|| CatalogError::Validation("product id space exhausted".into())),
        }
    }

    fn position(&self, id: ProductId) -> Result<usize, CatalogError> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Persist `next` first; memory is only replaced once the write succeeded.
    async fn commit(&mut self, next: Vec<Product>) -> Result<(), CatalogError> {
        self.storage.save(&next).await?;
        self.products = next;
        Ok(())
    }
}
