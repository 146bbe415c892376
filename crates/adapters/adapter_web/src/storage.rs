//! `localStorage`-backed preference store.

use themeswitch_app::error::StorageError;
use themeswitch_app::ports::PreferenceStore;
use tracing::warn;
use web_sys::{Storage, Window};

use crate::describe_js_error;

/// Preference store over the window's `localStorage`.
///
/// The storage area is looked up once. When the browser has it disabled
/// (private mode, sandboxed iframe, blocked cookies) every operation reports
/// [`StorageError::Unavailable`].
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    /// Look up `localStorage` on `window`, if there is a window.
    #[must_use]
    pub fn from_window(window: Option<&Window>) -> Self {
        let storage = window.and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                warn!(error = %describe_js_error(&err), "localStorage access denied");
                None
            }
        });
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Rejected(describe_js_error(&err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected(describe_js_error(&err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_unavailable_without_window() {
        let store = LocalStorageStore::from_window(None);
        assert_eq!(store.read("theme"), Err(StorageError::Unavailable));
        assert_eq!(store.write("theme", "dark"), Err(StorageError::Unavailable));
    }
}
