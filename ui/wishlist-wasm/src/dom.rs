//! Thin DOM helpers.
//!
//! Fallible calls surface as `anyhow` errors; class-list edits ignore
//! failures the same way the rest of the UI does.

use anyhow::{Result, anyhow};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlDocument, HtmlElement, Window};

pub fn window() -> Window {
    gloo_utils::window()
}

pub fn document() -> Document {
    gloo_utils::document()
}

/// `JsValue` is not `std::error::Error`; render it with its debug form.
pub fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let list = document()
        .query_selector_all(selector)
        .map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

pub fn attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

pub fn create_element(tag: &str) -> Result<Element> {
    document().create_element(tag).map_err(js_error)
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Raw `document.cookie`.
pub fn cookie_string() -> Result<String> {
    let doc: HtmlDocument = document()
        .dyn_into()
        .map_err(|_| anyhow!("document is not an HTML document"))?;
    doc.cookie().map_err(js_error)
}
