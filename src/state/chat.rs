//! Message log state for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat widget appends one entry per submitted line and one per answer
//! service reply (or failure). The log is append-only for the page session.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Literal shown as the bot reply when an exchange fails.
pub const CONNECTION_ERROR_MESSAGE: &str = "Error connecting to server.";

/// Who authored a chat entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Default CSS class for the rendered entry.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-msg",
            Self::Bot => "bot-msg",
        }
    }
}

/// A single chat log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    /// Build a user entry from raw input. Returns `None` when the input is
    /// blank after trimming.
    pub fn user(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self { sender: Sender::User, text: text.to_owned() })
    }

    /// Build a bot entry. Replies are shown verbatim.
    pub fn bot(text: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, text: text.into() }
    }
}

/// Ordered chat log for the current page session.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    /// Append an entry to the end of the log.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}
