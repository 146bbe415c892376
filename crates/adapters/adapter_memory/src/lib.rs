//! # themeswitch-adapter-memory
//!
//! In-process implementations of the themeswitch ports, for hosts that have
//! no browser document and for exercising the controller in tests.
//!
//! | Adapter | Port | Backing |
//! |---------|------|---------|
//! | [`MemoryPreferenceStore`] | `PreferenceStore` | `RefCell<HashMap>` |
//! | [`MemoryStylesheetLink`] | `StylesheetLink` | `RefCell<Option<String>>` |
//!
//! Both can be switched into a failing mode to reproduce a disabled storage
//! area or a read-only element.
//!
//! ## Dependency rule
//!
//! Depends on `themeswitch-app` (port traits) only.

mod link;
mod store;

pub use link::MemoryStylesheetLink;
pub use store::MemoryPreferenceStore;
