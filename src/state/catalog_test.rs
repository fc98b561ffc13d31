use super::*;

// =============================================================
// Helpers
// =============================================================

fn card(title: &str, description: &str, category: &str, price_band: &str) -> ProductCard {
    ProductCard {
        title: title.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        price_band: price_band.to_owned(),
    }
}

fn catalog() -> Vec<ProductCard> {
    vec![
        card("Office Chair", "Ergonomic mesh back", "furniture", "$$"),
        card("Desk Lamp", "Warm LED light", "lighting", "$"),
        card("Standing Desk", "Electric height adjust", "furniture", "$$$"),
        card("Floor Lamp", "Tall arc lamp for the office", "lighting", "$$"),
    ]
}

// =============================================================
// FilterQuery construction
// =============================================================

#[test]
fn query_text_is_trimmed_and_lowercased() {
    let query = FilterQuery::new("  ChAiR ", "furniture", "$$");
    assert_eq!(query.text(), "chair");
    assert_eq!(query.category(), "furniture");
    assert_eq!(query.price_band(), "$$");
}

#[test]
fn query_category_and_price_are_not_normalized() {
    let query = FilterQuery::new("", " Furniture", "$$ ");
    assert_eq!(query.category(), " Furniture");
    assert_eq!(query.price_band(), "$$ ");
}

#[test]
fn whitespace_only_text_counts_as_empty() {
    let query = FilterQuery::new("   ", "", "");
    assert_eq!(query.text(), "");
    assert!(apply_filters(&query, &catalog()).iter().all(|v| *v));
}

// =============================================================
// Predicate
// =============================================================

#[test]
fn empty_query_shows_everything() {
    let visible = apply_filters(&FilterQuery::default(), &catalog());
    assert_eq!(visible, vec![true, true, true, true]);
}

#[test]
fn text_matches_title_case_insensitively() {
    let cards = vec![card("Office Chair", "", "", ""), card("Desk Lamp", "", "", "")];
    let visible = apply_filters(&FilterQuery::new("chair", "", ""), &cards);
    assert_eq!(visible, vec![true, false]);
}

#[test]
fn text_matches_description() {
    let visible = apply_filters(&FilterQuery::new("OFFICE", "", ""), &catalog());
    assert_eq!(visible, vec![true, false, false, true]);
}

#[test]
fn category_is_exact_and_case_sensitive() {
    assert_eq!(
        apply_filters(&FilterQuery::new("", "lighting", ""), &catalog()),
        vec![false, true, false, true]
    );
    assert_eq!(
        apply_filters(&FilterQuery::new("", "Lighting", ""), &catalog()),
        vec![false, false, false, false]
    );
}

#[test]
fn price_band_is_exact() {
    assert_eq!(
        apply_filters(&FilterQuery::new("", "", "$$"), &catalog()),
        vec![true, false, false, true]
    );
}

#[test]
fn price_mismatch_hides_card_even_when_category_matches() {
    let cards = vec![card("Stool", "", "furniture", "$")];
    let query = FilterQuery::new("", "furniture", "$$");
    assert_eq!(apply_filters(&query, &cards), vec![false]);
}

#[test]
fn all_conditions_combine_with_and() {
    let query = FilterQuery::new("lamp", "lighting", "$$");
    assert_eq!(apply_filters(&query, &catalog()), vec![false, false, false, true]);
}

#[test]
fn predicate_equals_conjunction_of_each_condition() {
    let queries = [
        FilterQuery::new("lamp", "", ""),
        FilterQuery::new("", "furniture", ""),
        FilterQuery::new("", "", "$$"),
        FilterQuery::new("desk", "furniture", "$$$"),
        FilterQuery::new("zzz", "lighting", "$"),
    ];
    for query in &queries {
        for c in &catalog() {
            let expected = (query.category().is_empty() || c.category == query.category())
                && (query.price_band().is_empty() || c.price_band == query.price_band())
                && (query.text().is_empty()
                    || c.title.to_lowercase().contains(query.text())
                    || c.description.to_lowercase().contains(query.text()));
            assert_eq!(query.matches(c), expected, "query={query:?} card={c:?}");
        }
    }
}

#[test]
fn apply_filters_is_idempotent() {
    let cards = catalog();
    let query = FilterQuery::new("desk", "", "");
    let first = apply_filters(&query, &cards);
    let second = apply_filters(&query, &cards);
    assert_eq!(first, second);
}

#[test]
fn apply_filters_on_empty_catalog_is_empty() {
    assert!(apply_filters(&FilterQuery::new("chair", "", ""), &[]).is_empty());
}
