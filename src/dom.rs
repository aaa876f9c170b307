//! Minimal document model.
//!
//! The site only needs a handful of DOM features: look elements up by id or
//! attribute, change their text, attributes and inline style, register click
//! listeners and dispatch clicks, and serialize the tree back to HTML. This
//! module provides exactly that on a reference-counted element tree.
//!
//! Elements are shared with `Rc` and are therefore confined to one thread,
//! which matches the single-threaded event dispatch of a page.

/// Element tree.
pub mod element;
/// Click events and listeners.
pub mod event;

pub use element::{Element, WeakElement};
pub use event::{ClickEvent, ClickListener};

use time::OffsetDateTime;

/// A loaded page: the root element plus document-level metadata.
pub struct Document {
    root: Element,
    last_modified: OffsetDateTime,
}

impl Document {
    /// Creates an empty document whose root is an `<html>` element.
    pub fn new(last_modified: OffsetDateTime) -> Self {
        Self {
            root: Element::new("html"),
            last_modified,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Timestamp the document was last modified (`document.lastModified`).
    pub fn last_modified(&self) -> OffsetDateTime {
        self.last_modified
    }

    /// Returns the first element in tree order carrying `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.root.find_by_id(id)
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}", self.root.to_html())
    }
}
