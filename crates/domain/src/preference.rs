//! Display preference — the user's chosen light or dark mode.

use serde::{Deserialize, Serialize};

/// The user's chosen display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    Light,
    Dark,
}

impl Preference {
    /// The string persisted in storage for this preference.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite preference.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Interpret a raw stored value, falling back to [`Preference::Light`].
///
/// Only the exact string `"dark"` selects the dark preference. A missing
/// value, `"light"`, or anything unrecognised yields light.
#[must_use]
pub fn parse_preference(raw: Option<&str>) -> Preference {
    match raw {
        Some("dark") => Preference::Dark,
        _ => Preference::Light,
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_light() {
        assert_eq!(Preference::default(), Preference::Light);
    }

    #[test]
    fn should_parse_dark_only_from_exact_string() {
        assert_eq!(parse_preference(Some("dark")), Preference::Dark);
        assert_eq!(parse_preference(Some("Dark")), Preference::Light);
        assert_eq!(parse_preference(Some(" dark")), Preference::Light);
    }

    #[test]
    fn should_parse_light_when_absent() {
        assert_eq!(parse_preference(None), Preference::Light);
    }

    #[test]
    fn should_parse_light_when_value_is_unrecognised() {
        assert_eq!(parse_preference(Some("")), Preference::Light);
        assert_eq!(parse_preference(Some("solarized")), Preference::Light);
        assert_eq!(parse_preference(Some("light")), Preference::Light);
    }

    #[test]
    fn should_toggle_to_opposite() {
        assert_eq!(Preference::Light.toggled(), Preference::Dark);
        assert_eq!(Preference::Dark.toggled(), Preference::Light);
    }

    #[test]
    fn should_return_to_start_when_toggled_twice() {
        for pref in [Preference::Light, Preference::Dark] {
            assert_eq!(pref.toggled().toggled(), pref);
        }
    }

    #[test]
    fn should_display_storage_string() {
        assert_eq!(Preference::Light.to_string(), "light");
        assert_eq!(Preference::Dark.to_string(), "dark");
    }

    #[test]
    fn should_serialize_as_lowercase_name() {
        let json = serde_json::to_string(&Preference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let parsed: Preference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Preference::Light);
    }
}
