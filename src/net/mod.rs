//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `answer` talks to the chat answer service. It is the only network
//! collaborator on the page; the forms are confirmation-only.

pub mod answer;
