//! Collapsible navigation menu for narrow viewports.

use gloo_events::EventListener;
use web_sys::{Document, Element};

use crate::config::NavConfig;
use crate::util::dom;

/// Mounted nav toggle. Dropping it unbinds the click listener.
pub struct NavMenuHandle {
    _listener: EventListener,
}

/// Toggle the open class on the links container whenever the toggle button
/// is clicked. Returns `None` unless both elements exist.
pub fn mount_nav_menu(doc: &Document, config: &NavConfig) -> Option<NavMenuHandle> {
    let toggle: Element = dom::query(doc, &config.toggle_selector)?;
    let links: Element = dom::query(doc, &config.links_selector)?;
    let open_class = config.open_class.clone();
    let listener = EventListener::new(&toggle, "click", move |_| {
        dom::warn_on_err("nav toggle", links.class_list().toggle(&open_class));
    });
    Some(NavMenuHandle { _listener: listener })
}
