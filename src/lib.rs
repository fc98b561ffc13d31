//! # storefront
//!
//! WASM enhancement layer for the storefront marketing site. The server renders
//! every page as plain HTML; this crate binds to that markup and adds the
//! interactive pieces: the collapsible nav menu, the chat widget backed by the
//! answer service, the product search/filter, the footer year stamp, and the
//! confirmation-only contact/service forms.
//!
//! Logic lives in browser-independent modules (`state`, `net`, and the cores
//! of each component) so it can be tested natively. Everything that touches
//! the DOM is gated behind the `hydrate` feature.

pub mod components;
pub mod config;
pub mod net;
#[cfg(feature = "hydrate")]
pub mod page;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
thread_local! {
    static PAGE: std::cell::RefCell<Option<page::PageHandle>> = const { std::cell::RefCell::new(None) };
}

/// WASM entry point: set up logging, load config, and mount every component
/// found on the current page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!("console logger unavailable: {e}")));
    }

    let config = config::load();
    let Some(handle) = page::mount(&config) else {
        log::warn!("no document available; storefront not mounted");
        return;
    };
    PAGE.with(|slot| *slot.borrow_mut() = Some(handle));
}
