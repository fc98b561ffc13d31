//! Browser-independent state for the interactive page components.
//!
//! DESIGN
//! ======
//! State is split by component (`chat`, `catalog`) so each can be tested
//! natively without DOM access. Components own the DOM side and feed these
//! models.

pub mod catalog;
pub mod chat;
