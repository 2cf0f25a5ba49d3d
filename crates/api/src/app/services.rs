//! Shared access to the product store.
//!
//! `ProductStore` itself is single-threaded; every handler goes through one
//! `RwLock` here (readers for list/get, writer for mutations).

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use catalog_core::{DomainError, ProductId};
use catalog_products::{Product, ProductStore};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("product store lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Clone)]
pub struct AppServices {
    store: Arc<RwLock<ProductStore>>,
}

impl AppServices {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ProductStore>, ServiceError> {
        self.store.read().map_err(|_| ServiceError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ProductStore>, ServiceError> {
        self.store.write().map_err(|_| ServiceError::LockPoisoned)
    }

    /// Snapshot of the collection in store order.
    pub fn list(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.read()?.products().to_vec())
    }

    pub fn get(&self, id: ProductId) -> Result<Product, ServiceError> {
        Ok(self.read()?.get(id)?.clone())
    }

    /// Add an already-validated product; returns it with its assigned id.
    pub fn add(&self, product: Product) -> Result<Product, ServiceError> {
        let mut store = self.write()?;
        let id = store.add(product);
        Ok(store.get(id)?.clone())
    }

    pub fn update(&self, id: ProductId, product: Product) -> Result<Product, ServiceError> {
        Ok(self.write()?.update(id, product)?.clone())
    }

    pub fn delete(&self, id: ProductId) -> Result<Product, ServiceError> {
        Ok(self.write()?.delete(id)?)
    }
}
