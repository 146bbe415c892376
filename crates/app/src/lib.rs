//! # themeswitch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — synchronous per-origin key/value persistence
//!   - `StylesheetLink` — the page element whose `href` selects the stylesheet
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `ThemeController` — apply, toggle, and query the display preference
//! - Own the runtime configuration (`ThemeConfig`)
//!
//! ## Dependency rule
//! Depends on `themeswitch-domain` only (plus `toml` for configuration).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod error;
pub mod ports;
pub mod services;
