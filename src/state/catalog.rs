//! Product catalog filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Product cards are rendered by the server; the filter only decides which of
//! them stay visible. A card is shown when it passes the category, price band
//! and text checks together.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A product card as read from the page markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductCard {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price_band: String,
}

/// Current values of the three filter inputs.
///
/// `text` is stored normalized (trimmed and lowercased); category and price
/// band compare exactly as stored in markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterQuery {
    text: String,
    category: String,
    price_band: String,
}

impl FilterQuery {
    pub fn new(text: &str, category: &str, price_band: &str) -> Self {
        Self {
            text: text.trim().to_lowercase(),
            category: category.to_owned(),
            price_band: price_band.to_owned(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price_band(&self) -> &str {
        &self.price_band
    }

    fn category_matches(&self, card: &ProductCard) -> bool {
        self.category.is_empty() || card.category == self.category
    }

    fn price_band_matches(&self, card: &ProductCard) -> bool {
        self.price_band.is_empty() || card.price_band == self.price_band
    }

    fn text_matches(&self, card: &ProductCard) -> bool {
        self.text.is_empty()
            || card.title.to_lowercase().contains(&self.text)
            || card.description.to_lowercase().contains(&self.text)
    }

    /// Whether `card` should be visible under this query.
    pub fn matches(&self, card: &ProductCard) -> bool {
        self.category_matches(card) && self.price_band_matches(card) && self.text_matches(card)
    }
}

/// Visibility decision for every card, in card order.
pub fn apply_filters(query: &FilterQuery, cards: &[ProductCard]) -> Vec<bool> {
    cards.iter().map(|card| query.matches(card)).collect()
}
