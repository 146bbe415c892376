//! Stand-in for the page's stylesheet `<link>` element.

use std::cell::{Cell, RefCell};

use themeswitch_app::error::LinkError;
use themeswitch_app::ports::StylesheetLink;
use tracing::trace;

/// Records the `href` the controller assigns.
#[derive(Debug, Default)]
pub struct MemoryStylesheetLink {
    href: RefCell<Option<String>>,
    updates: Cell<usize>,
    read_only: Cell<bool>,
}

impl MemoryStylesheetLink {
    /// A link with an initial `href`, as a host page would render it.
    #[must_use]
    pub fn with_href(url: &str) -> Self {
        let link = Self::default();
        *link.href.borrow_mut() = Some(url.to_string());
        link
    }

    /// Number of successful `href` assignments so far.
    #[must_use]
    pub fn updates(&self) -> usize {
        self.updates.get()
    }

    /// Reject every subsequent `href` assignment, or accept them again.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl StylesheetLink for MemoryStylesheetLink {
    fn href(&self) -> Option<String> {
        self.href.borrow().clone()
    }

    fn set_href(&self, url: &str) -> Result<(), LinkError> {
        if self.read_only.get() {
            return Err(LinkError {
                message: "element is read-only".to_string(),
            });
        }
        trace!(url, "memory link href updated");
        *self.href.borrow_mut() = Some(url.to_string());
        self.updates.set(self.updates.get() + 1);
        Ok(())
    }
}
