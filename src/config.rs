//! Page configuration: element ids, selectors, endpoint and literal texts.
//!
//! The defaults match the site's templates. A page can override any subset by
//! embedding `<script type="application/json" id="storefront-config">` with a
//! partial JSON object; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::net::answer::DEFAULT_ANSWER_ENDPOINT;
use crate::state::chat::{CONNECTION_ERROR_MESSAGE, Sender};

/// Id of the inline JSON element read by [`load`].
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub answer_endpoint: String,
    pub nav: NavConfig,
    pub chat: ChatConfig,
    pub catalog: CatalogConfig,
    pub footer_year_id: String,
    pub forms: Vec<FormConfirmation>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            answer_endpoint: DEFAULT_ANSWER_ENDPOINT.to_owned(),
            nav: NavConfig::default(),
            chat: ChatConfig::default(),
            catalog: CatalogConfig::default(),
            footer_year_id: "year".to_owned(),
            forms: vec![
                FormConfirmation {
                    form_id: "serviceForm".to_owned(),
                    message_id: "serviceMsg".to_owned(),
                    text: "Thank you! Your request has been received. We will confirm shortly.".to_owned(),
                },
                FormConfirmation {
                    form_id: "contactForm".to_owned(),
                    message_id: "contactMsg".to_owned(),
                    text: "Message sent. We will get back to you soon!".to_owned(),
                },
            ],
        }
    }
}

/// Collapsible navigation menu.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_selector: String,
    pub links_selector: String,
    pub open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".nav-toggle".to_owned(),
            links_selector: ".nav-links".to_owned(),
            open_class: "show".to_owned(),
        }
    }
}

/// Chat widget element ids, entry classes and the failure reply.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub icon_id: String,
    pub panel_id: String,
    pub send_id: String,
    pub input_id: String,
    pub log_id: String,
    pub user_class: String,
    pub bot_class: String,
    pub error_message: String,
}

impl ChatConfig {
    /// Class applied to a rendered entry from `sender`.
    pub fn entry_class(&self, sender: Sender) -> &str {
        match sender {
            Sender::User => &self.user_class,
            Sender::Bot => &self.bot_class,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            icon_id: "chatbot-icon".to_owned(),
            panel_id: "chatbot-body".to_owned(),
            send_id: "chat-send".to_owned(),
            input_id: "chat-input".to_owned(),
            log_id: "chat-messages".to_owned(),
            user_class: Sender::User.css_class().to_owned(),
            bot_class: Sender::Bot.css_class().to_owned(),
            error_message: CONNECTION_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Product filter inputs and card markup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub search_id: String,
    pub category_id: String,
    pub price_id: String,
    pub grid_id: String,
    pub card_selector: String,
    pub title_selector: String,
    pub description_selector: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_id: "search".to_owned(),
            category_id: "category".to_owned(),
            price_id: "price".to_owned(),
            grid_id: "productGrid".to_owned(),
            card_selector: ".product".to_owned(),
            title_selector: "h3".to_owned(),
            description_selector: "p".to_owned(),
        }
    }
}

/// A form whose submit only shows a fixed confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FormConfirmation {
    pub form_id: String,
    pub message_id: String,
    pub text: String,
}

/// Parse a (possibly partial) JSON config.
pub fn parse(raw: &str) -> Result<SiteConfig, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Load config from the page, falling back to defaults.
pub fn load() -> SiteConfig {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return SiteConfig::default();
        };
        match parse(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                SiteConfig::default()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SiteConfig::default()
    }
}
