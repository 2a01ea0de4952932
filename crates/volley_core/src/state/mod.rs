//! Shared store handle
//!
//! Wraps a `ClubStore` in `Arc<RwLock<..>>` so several callers can hold the
//! same club. Each mutation runs entirely under one write lock, so readers
//! never see a completed match whose team records are not yet updated.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::ClubConfig;
use crate::store::ClubStore;

#[derive(Clone)]
pub struct SharedClub {
    inner: Arc<RwLock<ClubStore>>,
}

impl Default for SharedClub {
    fn default() -> Self {
        Self::new(ClubStore::default())
    }
}

impl SharedClub {
    pub fn new(store: ClubStore) -> Self {
        Self { inner: Arc::new(RwLock::new(store)) }
    }

    pub fn with_config(config: ClubConfig) -> Self {
        Self::new(ClubStore::new(config))
    }

    /// Run a read-only closure against the store
    pub fn read<T>(&self, f: impl FnOnce(&ClubStore) -> T) -> T {
        f(&self.read_guard())
    }

    /// Run a mutation against the store under the write lock
    pub fn write<T>(&self, f: impl FnOnce(&mut ClubStore) -> T) -> T {
        f(&mut self.write_guard())
    }

    // Every mutation checks before it writes, so a poisoned lock still
    // guards a consistent store.
    fn read_guard(&self) -> RwLockReadGuard<'_, ClubStore> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, ClubStore> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
