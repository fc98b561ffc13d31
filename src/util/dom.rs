//! DOM lookup and style helpers.
//!
//! Lookups return `None` for missing or mistyped elements so callers can skip
//! a component when its markup is not on the current page. Style values are
//! plain functions so visibility rules stay testable natively.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// `display` value for the chat panel.
pub fn panel_display(visible: bool) -> &'static str {
    if visible { "flex" } else { "none" }
}

/// Whether a panel `display` value counts as open. Only an explicit `flex`
/// does; the stylesheet hides the panel initially.
pub fn panel_is_open(display: &str) -> bool {
    display == "flex"
}

/// `display` value for a product card. Visible cards fall back to the
/// stylesheet.
pub fn card_display(visible: bool) -> &'static str {
    if visible { "" } else { "none" }
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element};

    /// The current document, if running in a window.
    pub fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    /// Element with `id`, cast to `T`.
    pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
        doc.get_element_by_id(id)?.dyn_into::<T>().ok()
    }

    /// First element matching `selector`, cast to `T`.
    pub fn query<T: JsCast>(doc: &Document, selector: &str) -> Option<T> {
        doc.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
    }

    /// Text of the first descendant of `parent` matching `selector`, or empty.
    pub fn child_text(parent: &Element, selector: &str) -> String {
        parent
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    }

    /// Log a failed DOM mutation instead of dropping it.
    pub fn warn_on_err<T>(context: &str, result: Result<T, JsValue>) {
        if let Err(e) = result {
            log::warn!("{context}: {e:?}");
        }
    }
}
