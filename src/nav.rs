//! Mobile navigation toggles.
//!
//! Two markups are supported. Current pages have `#navToggle` and
//! `#mainNav`: the toggle flips `aria-expanded` and the `show` class, and
//! following any nav link closes the menu. Older pages have `#menu-toggle`
//! and `#nav-menu`, shown and hidden through inline `display` with the
//! toggle's icon swapped. Each binder does nothing when its elements are
//! absent.

use crate::dom::Document;

pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const MAIN_NAV_ID: &str = "mainNav";
/// Class that opens `#mainNav`.
pub const NAV_SHOW_CLASS: &str = "show";

pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";

/// Toggle text while the menu is closed.
pub const MENU_CLOSED_ICON: &str = "☰";
/// Toggle text while the menu is open.
pub const MENU_OPEN_ICON: &str = "✖";

/// Wires `#navToggle` to `#mainNav`. Returns whether both were found.
pub fn bind_main_nav(doc: &Document) -> bool {
    let (Some(toggle), Some(nav)) = (
        doc.get_element_by_id(NAV_TOGGLE_ID),
        doc.get_element_by_id(MAIN_NAV_ID),
    ) else {
        log::debug!("No #{} / #{} on this page", NAV_TOGGLE_ID, MAIN_NAV_ID);
        return false;
    };

    let menu = nav.clone();
    toggle.add_click_listener(move |ev| {
        let expanded = ev.target().attr("aria-expanded").as_deref() == Some("true");
        ev.target().set_attr("aria-expanded", if expanded { "false" } else { "true" });
        menu.toggle_class(NAV_SHOW_CLASS);
    });

    // Links live inside the nav, so their listeners hold weak handles.
    for link in nav.descendants().into_iter().filter(|e| e.tag() == "a") {
        let menu = nav.downgrade();
        let toggle = toggle.downgrade();
        link.add_click_listener(move |_| {
            if let Some(menu) = menu.upgrade() {
                menu.remove_class(NAV_SHOW_CLASS);
            }
            if let Some(toggle) = toggle.upgrade() {
                toggle.set_attr("aria-expanded", "false");
            }
        });
    }

    true
}

/// Wires `#menu-toggle` to `#nav-menu`. Returns whether both were found.
pub fn bind_menu_toggle(doc: &Document) -> bool {
    let (Some(toggle), Some(menu)) = (
        doc.get_element_by_id(MENU_TOGGLE_ID),
        doc.get_element_by_id(NAV_MENU_ID),
    ) else {
        return false;
    };

    toggle.add_click_listener(move |ev| {
        if menu.style("display").as_deref() == Some("flex") {
            menu.set_style("display", "none");
            ev.target().set_text(MENU_CLOSED_ICON);
        } else {
            menu.set_style("display", "flex");
            ev.target().set_text(MENU_OPEN_ICON);
        }
    });

    true
}
