//! Key/value persistence backends.
//!
//! The history layer only needs `get` and `set` of a string under a fixed key;
//! what that key maps to on disk is up to the backend.

pub mod file;
pub mod memory;
pub mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::types::errors::StoreError;

/// A string-valued key/value store.
pub trait Store {
    /// Returns the value under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Replaces the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Deletes `key`. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
