//! Shared store handle
//!
//! Thread-safe wrapper that makes the serialization discipline explicit.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::Result;

use super::{Command, Entry, OperationResult, Output, Store};

/// Cloneable handle to one [`Store`] shared between threads
///
/// ## Concurrency: Single-Writer / Multiple-Reader
/// - **Writes** (insert/delete/update/load/save/execute): exclusive lock held
///   for the whole operation, so tree mutation and root reassignment are
///   atomic with respect to every other caller. `save` is here too: two
///   concurrent saves would interleave writes to the same file.
/// - **Reads** (search/get_all): shared lock; they run concurrently with
///   each other but never with a write.
///
/// Callers that need several operations to appear as one (mutate, then
/// save) use [`SharedStore::write`] to hold the lock across them.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    /// Wrap an existing store
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Open a store (see [`Store::open`]) and wrap it
    pub fn open(config: Config) -> Result<Self> {
        Ok(Self::new(Store::open(config)?))
    }

    // =========================================================================
    // Writes (exclusive)
    // =========================================================================

    /// See [`Store::insert`]
    pub fn insert(&self, key: &[u8], value: &[u8]) -> OperationResult {
        self.inner.write().insert(key, value)
    }

    /// See [`Store::delete`]
    pub fn delete(&self, key: &[u8]) -> OperationResult {
        self.inner.write().delete(key)
    }

    /// See [`Store::update`]
    pub fn update(&self, key: &[u8], value: &[u8]) -> OperationResult {
        self.inner.write().update(key, value)
    }

    /// See [`Store::load`]
    pub fn load(&self, path: impl AsRef<Path>) -> OperationResult {
        self.inner.write().load(path)
    }

    /// See [`Store::save`]
    pub fn save(&self) -> OperationResult {
        self.inner.write().save()
    }

    /// See [`Store::execute`]
    pub fn execute(&self, command: Command) -> OperationResult<Output> {
        self.inner.write().execute(command)
    }

    /// Run `f` with exclusive access
    pub fn write<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        f(&mut self.inner.write())
    }

    // =========================================================================
    // Reads (shared)
    // =========================================================================

    /// See [`Store::search`]
    pub fn search(&self, key: &[u8]) -> OperationResult<Vec<u8>> {
        self.inner.read().search(key)
    }

    /// See [`Store::get_all`]
    pub fn get_all(&self) -> OperationResult<Vec<Entry>> {
        self.inner.read().get_all()
    }

    /// Run `f` with shared access
    ///
    /// Saving from inside `f` is not serialized against other readers; use
    /// [`SharedStore::save`] or [`SharedStore::write`] for that.
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        f(&self.inner.read())
    }
}
