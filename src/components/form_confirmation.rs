//! Confirmation-only form submissions.
//!
//! The service and contact forms are not posted anywhere from the page. A
//! submit shows the configured confirmation text next to the form and clears
//! the fields.

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, HtmlFormElement};

use crate::config::FormConfirmation;
use crate::util::dom;

/// Mounted form handler. Dropping it unbinds the submit listener.
pub struct FormConfirmationHandle {
    form_id: String,
    _listener: EventListener,
}

impl FormConfirmationHandle {
    pub fn form_id(&self) -> &str {
        &self.form_id
    }
}

/// Intercept submits of the configured form. Returns `None` when the form is
/// not on the page.
pub fn mount_form_confirmation(doc: &Document, confirmation: &FormConfirmation) -> Option<FormConfirmationHandle> {
    let form: HtmlFormElement = dom::by_id(doc, &confirmation.form_id)?;
    let doc = doc.clone();
    let message_id = confirmation.message_id.clone();
    let text = confirmation.text.clone();
    let target = form.clone();

    // Non-passive so `prevent_default` takes effect.
    let listener = EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            match doc.get_element_by_id(&message_id) {
                Some(el) => el.set_text_content(Some(&text)),
                None => log::warn!("confirmation element #{message_id} missing"),
            }
            form.reset();
        },
    );

    Some(FormConfirmationHandle { form_id: confirmation.form_id.clone(), _listener: listener })
}

/// Mount every configured form that is present on the page.
pub fn mount_form_confirmations(doc: &Document, confirmations: &[FormConfirmation]) -> Vec<FormConfirmationHandle> {
    confirmations
        .iter()
        .filter_map(|confirmation| mount_form_confirmation(doc, confirmation))
        .collect()
}
