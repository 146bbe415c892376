//! # themeswitch-adapter-web
//!
//! Browser adapter: wires the theme controller to `window.localStorage` and
//! the page's `bootstrap-css` `<link>` element, and exports the entry points
//! the host page calls.
//!
//! | JS export | Effect |
//! |-----------|--------|
//! | *(module start)* | Install console logging, apply the stored theme once |
//! | `applyTheme()` | Re-apply the stored theme |
//! | `toggleTheme()` | Flip and persist the theme, then apply it |
//! | `currentTheme()` | `"light"` or `"dark"`, as stored |
//! | `displayedTheme()` | `"light"`, `"dark"`, or `undefined`, as shown by the link |
//! | `configureTheme(toml)` | Replace the configuration and apply once |
//!
//! ```html
//! <link id="bootstrap-css" rel="stylesheet"
//!       href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css">
//! <script type="module">
//!   import init, { toggleTheme } from "./themeswitch_adapter_web.js";
//!   await init();
//!   document.getElementById("theme-toggle").onclick = () => toggleTheme();
//! </script>
//! ```
//!
//! ## Dependency rule
//!
//! Depends on `themeswitch-app` (port traits, controller) and
//! `themeswitch-domain`.

mod link;
mod logging;
mod storage;

use std::cell::RefCell;
use std::error::Error;

use themeswitch_app::config::ThemeConfig;
use themeswitch_app::services::ThemeController;
use themeswitch_domain::preference::Preference;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;

pub use link::DomStylesheetLink;
pub use storage::LocalStorageStore;

/// Controller over the live browser document.
pub type WebThemeController = ThemeController<LocalStorageStore, DomStylesheetLink>;

thread_local! {
    static CONTROLLER: RefCell<Option<WebThemeController>> = const { RefCell::new(None) };
}

/// Build a controller over the current window's storage and document.
#[must_use]
pub fn build_controller(config: ThemeConfig) -> WebThemeController {
    let window = web_sys::window();
    let store = LocalStorageStore::from_window(window.as_ref());
    let link = window
        .as_ref()
        .and_then(web_sys::Window::document)
        .and_then(|document| DomStylesheetLink::find(&document, &config.link_element_id));
    ThemeController::new(store, link, config)
}

fn install(config: ThemeConfig) -> Preference {
    let controller = build_controller(config);
    debug!(
        storage_key = %controller.config().storage_key,
        element_id = %controller.config().link_element_id,
        "theme controller installed"
    );
    let applied = controller.apply_theme();
    CONTROLLER.with(|cell| *cell.borrow_mut() = Some(controller));
    applied
}

fn with_controller<R>(f: impl FnOnce(&WebThemeController) -> R) -> R {
    CONTROLLER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let controller = slot.get_or_insert_with(|| build_controller(ThemeConfig::default()));
        f(controller)
    })
}

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    let config = ThemeConfig::default();
    logging::init(&config.log_level);
    let applied = install(config);
    info!(preference = %applied, "theme initialised");
}

/// Re-apply the stored theme, e.g. after storage was cleared by script.
#[wasm_bindgen(js_name = applyTheme)]
pub fn apply_theme() {
    with_controller(|controller| {
        controller.apply_theme();
    });
}

/// Flip the stored theme and apply it. Bind this to the toggle button.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    with_controller(|controller| {
        controller.toggle_theme();
    });
}

/// The stored theme as `"light"` or `"dark"`.
#[wasm_bindgen(js_name = currentTheme)]
#[must_use]
pub fn current_theme() -> String {
    with_controller(|controller| controller.current_preference().as_str().to_string())
}

/// The theme the page is showing, judged by the stylesheet link's URL.
///
/// `undefined` when the link element is missing or points elsewhere.
#[wasm_bindgen(js_name = displayedTheme)]
#[must_use]
pub fn displayed_theme() -> Option<String> {
    with_controller(|controller| {
        controller
            .displayed_preference()
            .map(|preference| preference.as_str().to_string())
    })
}

/// Replace the configuration with the given TOML document and apply once.
///
/// The previous configuration stays active when the document is rejected.
///
/// # Errors
///
/// Throws when the TOML is malformed or fails validation.
#[wasm_bindgen(js_name = configureTheme)]
pub fn configure_theme(toml: &str) -> Result<(), JsError> {
    let config = ThemeConfig::from_toml(toml).map_err(|err| JsError::new(&error_chain(&err)))?;
    logging::init(&config.log_level);
    let applied = install(config);
    info!(preference = %applied, "theme reconfigured");
    Ok(())
}

/// Best-effort text for a value thrown by a browser API.
pub(crate) fn describe_js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// An error's message followed by each of its sources.
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use themeswitch_app::error::ConfigError;

    #[test]
    fn should_include_source_in_error_chain() {
        let err = ThemeConfig::from_toml("storage_key = ").unwrap_err();
        let message = error_chain(&err);
        assert!(message.starts_with("failed to parse theme configuration: "));
        assert!(message.len() > "failed to parse theme configuration: ".len());
    }

    #[test]
    fn should_render_single_error_without_separator() {
        let err = ConfigError::Validation("storage_key must not be empty");
        assert_eq!(
            error_chain(&err),
            "invalid theme configuration: storage_key must not be empty"
        );
    }
}
