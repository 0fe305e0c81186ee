//! Small DOM helpers shared by the shell modules.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Look up an element the page shell is required to ship.
pub fn require(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("page shell is missing #{id}")))
}

/// Un-hide an element shipped with the `hidden` attribute.
pub fn reveal(el: &Element) {
    let _ = el.remove_attribute("hidden");
}

/// Fill the footer year from the client clock.
pub fn set_footer_year(document: &Document) {
    if let Some(el) = document.get_element_by_id("footer-year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
