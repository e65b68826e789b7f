//! Thin lookups over `web_sys` that turn absent nodes into `SiteError`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{Result, SiteError};
use crate::primitives::Viewport;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn viewport(window: &Window) -> Viewport {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(w, h)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// First match for a CSS selector, cast to the requested element type.
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<T> {
    document
        .query_selector(selector)?
        .ok_or_else(|| SiteError::missing(selector))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::WrongElement(selector.to_string(), std::any::type_name::<T>()))
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::missing(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::WrongElement(format!("#{id}"), std::any::type_name::<T>()))
}

/// Every element matching the selector, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}
