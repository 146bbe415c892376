//! Theme configuration — TOML text supplied by the host page.
//!
//! Every field has a default matching the stock page layout (a `theme` key in
//! `localStorage`, a `bootstrap-css` link, Bootstrap 5.3.0 from jsDelivr), so
//! an empty document is a valid configuration.

use serde::Deserialize;
use themeswitch_domain::stylesheet::StylesheetMap;

use crate::error::ConfigError;

/// Storage key holding the persisted preference.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Id of the stylesheet `<link>` element in the host page.
pub const DEFAULT_LINK_ELEMENT_ID: &str = "bootstrap-css";

/// Runtime configuration of the theme controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key the preference is persisted under.
    pub storage_key: String,
    /// Id of the `<link>` element whose `href` is rewritten.
    pub link_element_id: String,
    /// Maximum log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Stylesheet URL for each preference.
    pub stylesheets: StylesheetMap,
}

impl ThemeConfig {
    /// Parse a TOML document and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] when a field breaks an invariant.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants that parsing alone cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first broken rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Validation("storage_key must not be empty"));
        }
        if self.link_element_id.is_empty() {
            return Err(ConfigError::Validation("link_element_id must not be empty"));
        }
        if self.stylesheets.light.is_empty() || self.stylesheets.dark.is_empty() {
            return Err(ConfigError::Validation("stylesheet URLs must not be empty"));
        }
        if self.stylesheets.light == self.stylesheets.dark {
            return Err(ConfigError::Validation(
                "light and dark stylesheets must differ",
            ));
        }
        Ok(())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            link_element_id: DEFAULT_LINK_ELEMENT_ID.to_string(),
            log_level: "info".to_string(),
            stylesheets: StylesheetMap::default(),
        }
    }
}
