//! Preference store port — durable key/value storage scoped to the origin.

use std::rc::Rc;

use crate::error::StorageError;

/// Synchronous string key/value storage that survives reloads.
///
/// Mirrors the semantics of the browser's `localStorage`: reads and writes
/// complete immediately and are visible to the next read.
pub trait PreferenceStore {
    /// Read the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the storage area cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the write is rejected.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}
