//! DOM-backed stylesheet link.

use themeswitch_app::error::LinkError;
use themeswitch_app::ports::StylesheetLink;
use web_sys::{Document, Element};

use crate::describe_js_error;

const HREF: &str = "href";

/// The page's stylesheet `<link>` element, found by id.
pub struct DomStylesheetLink {
    element: Element,
}

impl DomStylesheetLink {
    /// Find the element with `id` in `document`.
    #[must_use]
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        document
            .get_element_by_id(id)
            .map(|element| Self { element })
    }
}

impl StylesheetLink for DomStylesheetLink {
    fn href(&self) -> Option<String> {
        self.element.get_attribute(HREF)
    }

    fn set_href(&self, url: &str) -> Result<(), LinkError> {
        self.element
            .set_attribute(HREF, url)
            .map_err(|err| LinkError {
                message: describe_js_error(&err),
            })
    }
}
