//! # themeswitch-domain
//!
//! Pure domain model for the themeswitch display preference.
//!
//! ## Responsibilities
//! - Define the two-valued **Preference** (`light` / `dark`) and its
//!   parse-with-default policy
//! - Define the **StylesheetMap** from preference to stylesheet URL
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod preference;
pub mod stylesheet;
