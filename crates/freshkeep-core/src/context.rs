//! Explicit ownership of the single store.
//!
//! A [`StoreProvider`] owns the store for as long as the application (or a
//! test) runs. Consumers never hold the store itself: they get a
//! [`StoreHandle`], a weak reference that stops working once the provider
//! is dropped. Using a handle after that point is the one fault the store
//! surfaces, [`CoreError::OutsideProvider`].

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{CoreError, Result};
use crate::store::InventoryStore;

pub struct StoreProvider {
    store: Arc<Mutex<InventoryStore>>,
    /// Cancelled when the provider goes away.
    alive: CancellationToken,
}

impl StoreProvider {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            alive: CancellationToken::new(),
        }
    }

    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            store: Arc::downgrade(&self.store),
            provider_gone: self.alive.clone(),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&InventoryStore) -> T) -> T {
        f(&*lock(&self.store))
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut InventoryStore) -> T) -> T {
        f(&mut *lock(&self.store))
    }
}

impl Drop for StoreProvider {
    fn drop(&mut self) {
        debug!("store provider dropped");
        self.alive.cancel();
    }
}

/// Cheap, cloneable access to a provider's store.
#[derive(Clone)]
pub struct StoreHandle {
    store: Weak<Mutex<InventoryStore>>,
    provider_gone: CancellationToken,
}

impl StoreHandle {
    pub fn read<T>(&self, f: impl FnOnce(&InventoryStore) -> T) -> Result<T> {
        let store = self.store.upgrade().ok_or(CoreError::OutsideProvider)?;
        let guard = lock(&store);
        Ok(f(&*guard))
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut InventoryStore) -> T) -> Result<T> {
        let store = self.store.upgrade().ok_or(CoreError::OutsideProvider)?;
        let mut guard = lock(&store);
        Ok(f(&mut *guard))
    }

    pub fn is_attached(&self) -> bool {
        !self.provider_gone.is_cancelled() && self.store.strong_count() > 0
    }

    /// Resolves once the owning provider has been dropped.
    pub async fn detached(&self) {
        self.provider_gone.cancelled().await
    }
}

// Poisoning is recovered: the store is plain data.
fn lock(store: &Mutex<InventoryStore>) -> MutexGuard<'_, InventoryStore> {
    store.lock().unwrap_or_else(|poisoned| {
        warn!("store lock was poisoned; continuing with inner state");
        poisoned.into_inner()
    })
}
