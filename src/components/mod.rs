//! Interactive page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` and `product_filter` carry browser-independent controllers
//! plus their DOM bindings. `nav_menu`, `footer_year` and `form_confirmation`
//! are plain event bindings and only exist in browser builds.

pub mod chat_widget;
#[cfg(feature = "hydrate")]
pub mod footer_year;
#[cfg(feature = "hydrate")]
pub mod form_confirmation;
#[cfg(feature = "hydrate")]
pub mod nav_menu;
pub mod product_filter;
