//! Product search/filter over the server-rendered product grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The products page renders every card up front with `data-category` and
//! `data-price` attributes. Three inputs (search text, category, price band)
//! narrow the grid; any input event re-evaluates every card from scratch.
//!
//! Pages without a product grid still load this module; refreshing is then a
//! no-op.

#[cfg(test)]
#[path = "product_filter_test.rs"]
mod product_filter_test;

use crate::state::catalog::{FilterQuery, ProductCard, apply_filters};

/// The rendered product cards.
pub trait ProductGrid {
    /// Cards in document order.
    fn cards(&self) -> Vec<ProductCard>;
    /// Apply one visibility flag per card, in the same order as `cards`.
    fn set_visibility(&self, visible: &[bool]);
}

/// The three filter inputs. Missing inputs read as empty.
pub trait FilterInputs {
    fn query(&self) -> FilterQuery;
}

/// Filter controller, constructed once per page.
pub struct ProductFilter<G, I> {
    grid: Option<G>,
    inputs: I,
}

impl<G: ProductGrid, I: FilterInputs> ProductFilter<G, I> {
    pub fn new(grid: Option<G>, inputs: I) -> Self {
        Self { grid, inputs }
    }

    pub fn grid(&self) -> Option<&G> {
        self.grid.as_ref()
    }

    pub fn inputs(&self) -> &I {
        &self.inputs
    }

    /// Re-run the filter over every card. Returns how many cards remain
    /// visible, or `None` when the page has no grid.
    pub fn refresh(&self) -> Option<usize> {
        let grid = self.grid.as_ref()?;
        let query = self.inputs.query();
        let visible = apply_filters(&query, &grid.cards());
        grid.set_visibility(&visible);
        Some(visible.iter().filter(|shown| **shown).count())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{DomFilterInputs, DomProductGrid, ProductFilterHandle, mount_product_filter};

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

    use super::{FilterInputs, ProductFilter, ProductGrid};
    use crate::config::CatalogConfig;
    use crate::state::catalog::{FilterQuery, ProductCard};
    use crate::util::dom;

    /// [`ProductGrid`] over the grid container's card elements.
    pub struct DomProductGrid {
        container: Element,
        card_selector: String,
        title_selector: String,
        description_selector: String,
    }

    impl DomProductGrid {
        fn card_elements(&self) -> Vec<HtmlElement> {
            let Ok(nodes) = self.container.query_selector_all(&self.card_selector) else {
                log::warn!("invalid card selector: {}", self.card_selector);
                return Vec::new();
            };
            (0..nodes.length())
                .filter_map(|i| nodes.item(i))
                .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
                .collect()
        }
    }

    impl ProductGrid for DomProductGrid {
        fn cards(&self) -> Vec<ProductCard> {
            self.card_elements()
                .iter()
                .map(|el| ProductCard {
                    title: dom::child_text(el, &self.title_selector),
                    description: dom::child_text(el, &self.description_selector),
                    category: el.get_attribute("data-category").unwrap_or_default(),
                    price_band: el.get_attribute("data-price").unwrap_or_default(),
                })
                .collect()
        }

        fn set_visibility(&self, visible: &[bool]) {
            for (el, shown) in self.card_elements().iter().zip(visible) {
                dom::warn_on_err(
                    "product card display",
                    el.style().set_property("display", dom::card_display(*shown)),
                );
            }
        }
    }

    /// [`FilterInputs`] over the search field and the two selectors.
    pub struct DomFilterInputs {
        search: Option<Element>,
        category: Option<Element>,
        price: Option<Element>,
    }

    fn field_value(el: Option<&Element>) -> String {
        let Some(el) = el else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            return select.value();
        }
        String::new()
    }

    impl FilterInputs for DomFilterInputs {
        fn query(&self) -> FilterQuery {
            FilterQuery::new(
                &field_value(self.search.as_ref()),
                &field_value(self.category.as_ref()),
                &field_value(self.price.as_ref()),
            )
        }
    }

    type DomProductFilter = ProductFilter<DomProductGrid, DomFilterInputs>;

    /// Mounted product filter. Dropping it unbinds every listener.
    pub struct ProductFilterHandle {
        _listeners: Vec<EventListener>,
    }

    /// Bind the filter inputs that exist on the page. Returns `None` when the
    /// page has none of them.
    pub fn mount_product_filter(doc: &Document, config: &CatalogConfig) -> Option<ProductFilterHandle> {
        let grid = doc.get_element_by_id(&config.grid_id).map(|container| DomProductGrid {
            container,
            card_selector: config.card_selector.clone(),
            title_selector: config.title_selector.clone(),
            description_selector: config.description_selector.clone(),
        });
        let inputs = DomFilterInputs {
            search: doc.get_element_by_id(&config.search_id),
            category: doc.get_element_by_id(&config.category_id),
            price: doc.get_element_by_id(&config.price_id),
        };
        let targets: Vec<Element> = [&inputs.search, &inputs.category, &inputs.price]
            .into_iter()
            .flatten()
            .cloned()
            .collect();
        if targets.is_empty() {
            return None;
        }

        let filter: Rc<DomProductFilter> = Rc::new(ProductFilter::new(grid, inputs));
        let listeners = targets
            .iter()
            .map(|target| {
                let filter = Rc::clone(&filter);
                EventListener::new(target, "input", move |_| {
                    if let Some(count) = filter.refresh() {
                        log::debug!("product filter: {count} visible");
                    }
                })
            })
            .collect();

        Some(ProductFilterHandle { _listeners: listeners })
    }
}
