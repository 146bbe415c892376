//! Application-layer error types.
//!
//! Storage and link failures never leave [`ThemeController`]; they are logged
//! and the controller degrades to the light stylesheet or skips the DOM write.
//! Configuration errors are returned to whoever supplied the configuration.
//!
//! [`ThemeController`]: crate::services::ThemeController

/// Failure of the persistent preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The host exposes no storage area (disabled, sandboxed, or absent).
    #[error("preference storage unavailable")]
    Unavailable,

    /// The host raised an exception for the read or write, e.g. a quota or
    /// security error. Carries the host's message.
    #[error("preference storage rejected access: {0}")]
    Rejected(String),
}

/// Failure to update the stylesheet link element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("stylesheet link rejected href update: {message}")]
pub struct LinkError {
    /// The host's message.
    pub message: String,
}

/// Invalid or malformed [`ThemeConfig`](crate::config::ThemeConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed.
    #[error("failed to parse theme configuration")]
    Parse(#[source] toml::de::Error),

    /// The configuration parsed but breaks an invariant.
    #[error("invalid theme configuration: {0}")]
    Validation(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unavailable_storage_error() {
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "preference storage unavailable"
        );
    }

    #[test]
    fn should_display_rejected_storage_error_with_host_message() {
        let err = StorageError::Rejected("QuotaExceededError".to_string());
        assert_eq!(
            err.to_string(),
            "preference storage rejected access: QuotaExceededError"
        );
    }

    #[test]
    fn should_display_validation_error() {
        let err = ConfigError::Validation("storage_key must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid theme configuration: storage_key must not be empty"
        );
    }

    #[test]
    fn should_keep_toml_error_as_source() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err = ConfigError::Parse(toml_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
