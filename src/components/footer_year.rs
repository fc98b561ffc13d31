//! Footer copyright year.

use web_sys::Document;

/// Write the current local year into the element with `id`, if present.
pub fn stamp_year(doc: &Document, id: &str) {
    let Some(el) = doc.get_element_by_id(id) else {
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    el.set_text_content(Some(&year.to_string()));
}
