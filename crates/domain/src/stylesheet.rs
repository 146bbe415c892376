//! Stylesheet mapping — which CSS resource renders each preference.

use serde::{Deserialize, Serialize};

use crate::preference::Preference;

/// Light variant of Bootstrap, pinned to 5.3.0.
pub const DEFAULT_LIGHT_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";

/// Dark variant of Bootstrap, pinned to 5.3.0.
pub const DEFAULT_DARK_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap-dark.min.css";

/// Two-entry mapping from [`Preference`] to stylesheet URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesheetMap {
    /// URL applied for [`Preference::Light`].
    pub light: String,
    /// URL applied for [`Preference::Dark`].
    pub dark: String,
}

impl StylesheetMap {
    /// Build a map from explicit URLs.
    #[must_use]
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// URL for the given preference.
    #[must_use]
    pub fn url_for(&self, preference: Preference) -> &str {
        match preference {
            Preference::Light => &self.light,
            Preference::Dark => &self.dark,
        }
    }

    /// Reverse lookup: which preference, if any, a URL renders.
    #[must_use]
    pub fn preference_for(&self, url: &str) -> Option<Preference> {
        if url == self.dark {
            Some(Preference::Dark)
        } else if url == self.light {
            Some(Preference::Light)
        } else {
            None
        }
    }
}

impl Default for StylesheetMap {
    fn default() -> Self {
        Self::new(DEFAULT_LIGHT_URL, DEFAULT_DARK_URL)
    }
}
