//! Chat widget: panel toggle, message log, and answer-service exchanges.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup provides the chat icon, the collapsible panel, a text
//! input, a send button and an empty log container. This module binds to
//! those elements and runs one request/response exchange per submitted line.
//!
//! DESIGN
//! ======
//! `ChatWidget` is the browser-independent controller. It talks to the page
//! through `ChatView`, to the backend through `AnswerService`, and reports
//! failures through `DiagnosticSink`, so tests substitute all three.
//!
//! A send is split in two: `accept` runs synchronously inside the event
//! handler (append the user entry, clear the input) and `complete_exchange`
//! is the suspended part that appends the reply. Exchanges are independent;
//! replies land in arrival order and nothing is cancelled or retried.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use std::cell::RefCell;
use std::future::Future;

use crate::net::answer::AnswerService;
use crate::state::chat::{CONNECTION_ERROR_MESSAGE, ChatMessage, ChatState};
use crate::util::diagnostics::{DiagnosticSink, LogDiagnostics};

/// Key that submits the current input.
pub const SUBMIT_KEY: &str = "Enter";

/// Page surface the widget drives.
pub trait ChatView {
    fn panel_visible(&self) -> bool;
    fn set_panel_visible(&self, visible: bool);
    fn input_value(&self) -> String;
    fn clear_input(&self);
    fn append_message(&self, message: &ChatMessage);
    /// Scroll the log so the newest entry is in view.
    fn scroll_to_latest(&self);
}

/// Chat controller, constructed once per page.
pub struct ChatWidget<V, S, D = LogDiagnostics> {
    view: V,
    service: S,
    diagnostics: D,
    error_message: String,
    state: RefCell<ChatState>,
}

impl<V: ChatView, S: AnswerService, D: DiagnosticSink> ChatWidget<V, S, D> {
    pub fn new(view: V, service: S, diagnostics: D) -> Self {
        Self {
            view,
            service,
            diagnostics,
            error_message: CONNECTION_ERROR_MESSAGE.to_owned(),
            state: RefCell::new(ChatState::default()),
        }
    }

    /// Replace the reply shown when an exchange fails.
    #[must_use]
    pub fn with_error_message(mut self, text: impl Into<String>) -> Self {
        self.error_message = text.into();
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Snapshot of the log.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.borrow().messages.clone()
    }

    /// Flip panel visibility; returns the new state.
    pub fn toggle_panel(&self) -> bool {
        let next = !self.view.panel_visible();
        self.view.set_panel_visible(next);
        next
    }

    /// Synchronous half of a send. Appends the user entry and clears the
    /// input, returning the text to send. Blank input changes nothing.
    pub fn accept(&self, raw: &str) -> Option<String> {
        let message = ChatMessage::user(raw)?;
        let text = message.text.clone();
        self.append(message);
        self.view.clear_input();
        Some(text)
    }

    /// [`Self::accept`] applied to the view's current input.
    pub fn accept_input(&self) -> Option<String> {
        let raw = self.view.input_value();
        self.accept(&raw)
    }

    /// [`Self::accept_input`] when `key` is the submit key.
    pub fn on_key(&self, key: &str) -> Option<String> {
        if key != SUBMIT_KEY {
            return None;
        }
        self.accept_input()
    }

    /// Asynchronous half of a send: ask the service and append the reply, or
    /// the error message when the exchange fails.
    pub async fn complete_exchange(&self, text: String) {
        let reply = match self.service.ask(&text).await {
            Ok(answer) => ChatMessage::bot(answer),
            Err(e) => {
                self.diagnostics.report("chat exchange failed", &e);
                ChatMessage::bot(self.error_message.clone())
            }
        };
        self.append(reply);
    }

    /// Full send. The user entry is appended before this returns; the
    /// returned future performs the request and must be driven to get a reply.
    pub fn send_message(&self, raw: &str) -> Option<impl Future<Output = ()>> {
        let text = self.accept(raw)?;
        Some(self.complete_exchange(text))
    }

    fn append(&self, message: ChatMessage) {
        self.view.append_message(&message);
        self.view.scroll_to_latest();
        self.state.borrow_mut().push(message);
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{ChatWidgetHandle, DomChatView, mount_chat_widget};

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, HtmlInputElement, KeyboardEvent};

    use super::{ChatView, ChatWidget};
    use crate::config::ChatConfig;
    use crate::net::answer::HttpAnswerService;
    use crate::state::chat::{ChatMessage, Sender};
    use crate::util::diagnostics::LogDiagnostics;
    use crate::util::dom;

    /// [`ChatView`] over the page's chat elements.
    pub struct DomChatView {
        document: Document,
        panel: HtmlElement,
        input: HtmlInputElement,
        log: HtmlElement,
        user_class: String,
        bot_class: String,
    }

    impl ChatView for DomChatView {
        fn panel_visible(&self) -> bool {
            self.panel
                .style()
                .get_property_value("display")
                .is_ok_and(|display| dom::panel_is_open(&display))
        }

        fn set_panel_visible(&self, visible: bool) {
            dom::warn_on_err(
                "chat panel display",
                self.panel.style().set_property("display", dom::panel_display(visible)),
            );
        }

        fn input_value(&self) -> String {
            self.input.value()
        }

        fn clear_input(&self) {
            self.input.set_value("");
        }

        fn append_message(&self, message: &ChatMessage) {
            let entry = match self.document.create_element("div") {
                Ok(el) => el,
                Err(e) => {
                    log::warn!("chat entry create: {e:?}");
                    return;
                }
            };
            let class = match message.sender {
                Sender::User => &self.user_class,
                Sender::Bot => &self.bot_class,
            };
            entry.set_class_name(class);
            entry.set_text_content(Some(&message.text));
            dom::warn_on_err("chat entry append", self.log.append_child(&entry));
        }

        fn scroll_to_latest(&self) {
            self.log.set_scroll_top(self.log.scroll_height());
        }
    }

    type DomChatWidget = ChatWidget<DomChatView, HttpAnswerService, LogDiagnostics>;

    /// Mounted chat widget. Dropping it unbinds every listener.
    pub struct ChatWidgetHandle {
        _listeners: Vec<EventListener>,
    }

    /// Bind the chat widget to the page. Returns `None` when any of its
    /// elements is missing.
    pub fn mount_chat_widget(doc: &Document, config: &ChatConfig, endpoint: &str) -> Option<ChatWidgetHandle> {
        let icon: HtmlElement = dom::by_id(doc, &config.icon_id)?;
        let send: HtmlElement = dom::by_id(doc, &config.send_id)?;
        let input: HtmlInputElement = dom::by_id(doc, &config.input_id)?;
        let view = DomChatView {
            document: doc.clone(),
            panel: dom::by_id(doc, &config.panel_id)?,
            input: input.clone(),
            log: dom::by_id(doc, &config.log_id)?,
            user_class: config.entry_class(Sender::User).to_owned(),
            bot_class: config.entry_class(Sender::Bot).to_owned(),
        };
        let widget = Rc::new(
            ChatWidget::new(view, HttpAnswerService::new(endpoint), LogDiagnostics)
                .with_error_message(config.error_message.clone()),
        );

        let on_icon = {
            let widget = Rc::clone(&widget);
            EventListener::new(&icon, "click", move |_| {
                widget.toggle_panel();
            })
        };
        let on_send = {
            let widget = Rc::clone(&widget);
            EventListener::new(&send, "click", move |_| {
                if let Some(text) = widget.accept_input() {
                    spawn_exchange(&widget, text);
                }
            })
        };
        // Single keydown binding: Enter submits exactly once.
        let on_key = {
            let widget = Rc::clone(&widget);
            EventListener::new(&input, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if let Some(text) = widget.on_key(&event.key()) {
                    spawn_exchange(&widget, text);
                }
            })
        };

        log::debug!("chat widget mounted (endpoint {endpoint})");
        Some(ChatWidgetHandle { _listeners: vec![on_icon, on_send, on_key] })
    }

    fn spawn_exchange(widget: &Rc<DomChatWidget>, text: String) {
        let widget = Rc::clone(widget);
        wasm_bindgen_futures::spawn_local(async move {
            widget.complete_exchange(text).await;
        });
    }
}
