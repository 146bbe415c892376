//! Theme controller — keeps the displayed stylesheet in step with the
//! persisted preference.

use themeswitch_domain::preference::{Preference, parse_preference};
use tracing::{debug, info, warn};

use crate::config::ThemeConfig;
use crate::ports::{PreferenceStore, StylesheetLink};

/// Applies and toggles the light/dark preference.
///
/// Nothing here returns an error: storage failures fall back to
/// [`Preference::Light`] and a missing or unwritable link element is skipped.
pub struct ThemeController<S, L> {
    store: S,
    link: Option<L>,
    config: ThemeConfig,
}

impl<S: PreferenceStore, L: StylesheetLink> ThemeController<S, L> {
    /// Create a controller over the given store and link element.
    ///
    /// Pass `None` for `link` when the host page has no stylesheet element;
    /// the controller then only touches storage.
    pub fn new(store: S, link: Option<L>, config: ThemeConfig) -> Self {
        if link.is_none() {
            debug!(
                element_id = %config.link_element_id,
                "stylesheet link element not found, theme changes will not be displayed"
            );
        }
        Self {
            store,
            link,
            config,
        }
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Read the persisted preference without touching the page.
    ///
    /// An unreadable store counts as an absent key.
    pub fn current_preference(&self) -> Preference {
        let raw = match self.store.read(&self.config.storage_key) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "failed to read theme preference, using light");
                None
            }
        };
        parse_preference(raw.as_deref())
    }

    /// The preference the page is showing, judged by the link's current URL.
    ///
    /// `None` when there is no link element or its URL is not one of the
    /// mapped stylesheets, e.g. before the first apply on a page that ships
    /// a different stylesheet.
    pub fn displayed_preference(&self) -> Option<Preference> {
        let href = self.link.as_ref()?.href()?;
        self.config.stylesheets.preference_for(&href)
    }

    /// Point the stylesheet link at the URL for the persisted preference.
    ///
    /// Never writes storage. Returns the preference that was applied.
    pub fn apply_theme(&self) -> Preference {
        let preference = self.current_preference();
        self.display(preference);
        preference
    }

    /// Flip the persisted preference and display the result.
    ///
    /// When the write fails the new preference is still displayed for the
    /// current page view; it just won't survive a reload. Returns the new
    /// preference.
    pub fn toggle_theme(&self) -> Preference {
        let next = self.current_preference().toggled();
        match self.store.write(&self.config.storage_key, next.as_str()) {
            Ok(()) => info!(preference = %next, "theme preference saved"),
            Err(err) => {
                warn!(error = %err, preference = %next, "failed to save theme preference");
            }
        }
        // Applied from `next` rather than re-read: after a failed write the
        // store still holds the previous value.
        self.display(next);
        next
    }

    fn display(&self, preference: Preference) {
        let Some(link) = &self.link else {
            debug!(preference = %preference, "no stylesheet link, skipping");
            return;
        };
        let url = self.config.stylesheets.url_for(preference);
        if link.href().as_deref() == Some(url) {
            return;
        }
        match link.set_href(url) {
            Ok(()) => debug!(preference = %preference, url, "stylesheet applied"),
            Err(err) => warn!(error = %err, url, "failed to update stylesheet link"),
        }
    }
}
