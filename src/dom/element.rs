use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::rc::{Rc, Weak};

use crate::dom::event::{ClickEvent, ClickListener};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "meta", "link", "input"];

struct Node {
    tag: String,
    attributes: RefCell<BTreeMap<String, String>>,
    style: RefCell<BTreeMap<String, String>>,
    text: RefCell<String>,
    children: RefCell<Vec<Element>>,
    listeners: RefCell<Vec<ClickListener>>,
    onclick: RefCell<Option<ClickListener>>,
}

/// Handle to an element in the tree. Cloning the handle does not clone the element.
#[derive(Clone)]
pub struct Element(Rc<Node>);

/// Non-owning handle, for listeners that must not keep an ancestor alive.
#[derive(Clone)]
pub struct WeakElement(Weak<Node>);

impl WeakElement {
    pub fn upgrade(&self) -> Option<Element> {
        self.0.upgrade().map(Element)
    }
}

impl Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.0.tag)
            .field("attributes", &self.0.attributes.borrow())
            .finish_non_exhaustive()
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(Node {
            tag: tag.to_ascii_lowercase(),
            attributes: RefCell::new(BTreeMap::new()),
            style: RefCell::new(BTreeMap::new()),
            text: RefCell::new(String::new()),
            children: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            onclick: RefCell::new(None),
        }))
    }

    /// Builder-style attribute setter.
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style text setter.
    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Builder-style child append.
    pub fn with_child(self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn id(&self) -> Option<String> {
        self.attr("id")
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.0.attributes.borrow().contains_key(name)
    }

    pub fn set_attr(&self, name: &str, value: &str) {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Inline style property, e.g. `style("display")`.
    pub fn style(&self, property: &str) -> Option<String> {
        self.0.style.borrow().get(property).cloned()
    }

    pub fn set_style(&self, property: &str, value: &str) {
        self.0
            .style
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }

    /// The element's own text (`textContent` for leaf elements).
    pub fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    pub fn set_text(&self, text: &str) {
        *self.0.text.borrow_mut() = text.to_string();
    }

    pub fn append_child(&self, child: Element) {
        self.0.children.borrow_mut().push(child);
    }

    pub fn children(&self) -> Vec<Element> {
        self.0.children.borrow().clone()
    }

    /// Drops every child (`innerHTML = ""`).
    pub fn clear_children(&self) {
        self.0.children.borrow_mut().clear();
    }

    /// All descendants in tree order, not including `self`.
    pub fn descendants(&self) -> Vec<Element> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants(&self, out: &mut Vec<Element>) {
        for child in self.0.children.borrow().iter() {
            out.push(child.clone());
            child.collect_descendants(out);
        }
    }

    /// `self` or the first descendant whose id is `id`.
    pub fn find_by_id(&self, id: &str) -> Option<Element> {
        if self.id().as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.descendants()
            .into_iter()
            .find(|e| e.id().as_deref() == Some(id))
    }

    /// Descendants carrying attribute `name` (`querySelectorAll("[name]")`).
    pub fn query_by_attr(&self, name: &str) -> Vec<Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_attr(name))
            .collect()
    }

    pub fn query_by_class(&self, class: &str) -> Vec<Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Registers a click listener. Listeners run in registration order.
    pub fn add_click_listener(&self, listener: impl Fn(&ClickEvent) + 'static) {
        self.0.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Sets the `onclick` handler, replacing any earlier one.
    pub fn set_onclick(&self, listener: impl Fn(&ClickEvent) + 'static) {
        *self.0.onclick.borrow_mut() = Some(Rc::new(listener));
    }

    /// Dispatches a click to this element and returns the event after all
    /// listeners and the `onclick` handler ran.
    pub fn click(&self) -> ClickEvent {
        let event = ClickEvent::new(self.clone());
        // Listeners may touch this element, so don't hold the borrow while calling them.
        let listeners = self.0.listeners.borrow().clone();
        for listener in listeners {
            listener(&event);
        }
        let onclick = self.0.onclick.borrow().clone();
        if let Some(onclick) = onclick {
            onclick(&event);
        }
        event
    }

    pub fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            let classes = match self.attr("class") {
                Some(c) if !c.trim().is_empty() => format!("{} {}", c.trim(), class),
                _ => class.to_string(),
            };
            self.set_attr("class", &classes);
        }
    }

    pub fn remove_class(&self, class: &str) {
        if let Some(c) = self.attr("class") {
            let kept: Vec<&str> = c.split_whitespace().filter(|c| *c != class).collect();
            self.set_attr("class", &kept.join(" "));
        }
    }

    /// `classList.toggle`. Returns whether the class is now present.
    pub fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    pub fn downgrade(&self) -> WeakElement {
        WeakElement(Rc::downgrade(&self.0))
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Serializes the element and its subtree (`outerHTML`).
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.0.tag);
        for (name, value) in self.0.attributes.borrow().iter() {
            out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        let style = self.0.style.borrow();
        if !style.is_empty() {
            let decl: Vec<String> = style.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            out.push_str(&format!(" style=\"{}\"", escape(&decl.join("; "))));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.0.tag.as_str()) {
            return;
        }

        out.push_str(&escape(&self.0.text.borrow()));
        for child in self.0.children.borrow().iter() {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.0.tag);
        out.push('>');
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
