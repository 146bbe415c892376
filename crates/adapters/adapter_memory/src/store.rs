//! Map-backed preference store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use themeswitch_app::error::StorageError;
use themeswitch_app::ports::PreferenceStore;

/// Preference store held in memory for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryPreferenceStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent read and write fail with
    /// [`StorageError::Unavailable`], or restore normal behaviour.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    /// Value under `key`, bypassing the availability switch.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.peek(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_when_key_missing() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.read("theme"), Ok(None));
    }

    #[test]
    fn should_read_back_written_value() {
        let store = MemoryPreferenceStore::new();
        store.write("theme", "dark").unwrap();
        assert_eq!(store.read("theme"), Ok(Some("dark".to_string())));
    }

    #[test]
    fn should_overwrite_existing_value() {
        let store = MemoryPreferenceStore::with_entry("theme", "dark");
        store.write("theme", "light").unwrap();
        assert_eq!(store.peek("theme").as_deref(), Some("light"));
    }

    #[test]
    fn should_fail_when_unavailable() {
        let store = MemoryPreferenceStore::with_entry("theme", "dark");
        store.set_unavailable(true);
        assert_eq!(store.read("theme"), Err(StorageError::Unavailable));
        assert_eq!(store.write("theme", "light"), Err(StorageError::Unavailable));
        assert_eq!(store.peek("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn should_forget_entries_when_cleared() {
        let store = MemoryPreferenceStore::with_entry("theme", "dark");
        store.clear();
        assert_eq!(store.read("theme"), Ok(None));
    }
}
