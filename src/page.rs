//! Page bootstrap: mount every component whose markup is present.
//!
//! Each component is independent. A missing element disables only the
//! component that needs it.

use web_sys::Document;

use crate::components::chat_widget::{ChatWidgetHandle, mount_chat_widget};
use crate::components::footer_year::stamp_year;
use crate::components::form_confirmation::{FormConfirmationHandle, mount_form_confirmations};
use crate::components::nav_menu::{NavMenuHandle, mount_nav_menu};
use crate::components::product_filter::{ProductFilterHandle, mount_product_filter};
use crate::config::SiteConfig;
use crate::util::dom;

/// Everything mounted on the current page. Dropping it unbinds all listeners.
pub struct PageHandle {
    pub nav: Option<NavMenuHandle>,
    pub chat: Option<ChatWidgetHandle>,
    pub catalog: Option<ProductFilterHandle>,
    pub forms: Vec<FormConfirmationHandle>,
}

/// Mount onto the current document. Returns `None` outside a window.
pub fn mount(config: &SiteConfig) -> Option<PageHandle> {
    let doc = dom::document()?;
    Some(mount_on(&doc, config))
}

/// Mount onto `doc`.
pub fn mount_on(doc: &Document, config: &SiteConfig) -> PageHandle {
    stamp_year(doc, &config.footer_year_id);

    let handle = PageHandle {
        nav: mount_nav_menu(doc, &config.nav),
        chat: mount_chat_widget(doc, &config.chat, &config.answer_endpoint),
        catalog: mount_product_filter(doc, &config.catalog),
        forms: mount_form_confirmations(doc, &config.forms),
    };
    let forms: Vec<&str> = handle.forms.iter().map(FormConfirmationHandle::form_id).collect();
    log::debug!(
        "page mounted: nav={} chat={} catalog={} forms={forms:?}",
        handle.nav.is_some(),
        handle.chat.is_some(),
        handle.catalog.is_some(),
    );
    handle
}
