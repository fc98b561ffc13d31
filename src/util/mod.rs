//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` isolates web-sys lookups and style values; `diagnostics` is the error
//! reporting seam used by the chat widget.

pub mod diagnostics;
pub mod dom;
