//! Stylesheet link port — the page element that selects the active stylesheet.

use std::rc::Rc;

use crate::error::LinkError;

/// Handle to the `<link>` element whose target URL picks the theme.
///
/// The element is owned by the host document; implementations hold a
/// non-owning handle to it.
pub trait StylesheetLink {
    /// The URL currently assigned, if any.
    fn href(&self) -> Option<String>;

    /// Point the element at `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`LinkError`] when the host refuses the attribute change.
    fn set_href(&self, url: &str) -> Result<(), LinkError>;
}

impl<T: StylesheetLink + ?Sized> StylesheetLink for Rc<T> {
    fn href(&self) -> Option<String> {
        (**self).href()
    }

    fn set_href(&self, url: &str) -> Result<(), LinkError> {
        (**self).set_href(url)
    }
}
