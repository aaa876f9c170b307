use std::cell::Cell;
use std::rc::Rc;

use crate::dom::Element;

/// Listener invoked when an element is clicked.
pub type ClickListener = Rc<dyn Fn(&ClickEvent)>;

/// A click dispatched to an element.
pub struct ClickEvent {
    target: Element,
    default_prevented: Cell<bool>,
}

impl ClickEvent {
    pub fn new(target: Element) -> Self {
        Self {
            target,
            default_prevented: Cell::new(false),
        }
    }

    /// The element the click was dispatched to.
    pub fn target(&self) -> &Element {
        &self.target
    }

    /// Suppresses the element's default action (following a link, submitting a form).
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}
