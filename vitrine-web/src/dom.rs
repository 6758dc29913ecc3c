//! web-sys helpers shared by the controllers

use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList, Window};

use crate::error::AttachError;

pub fn window() -> Result<Window, AttachError> {
    web_sys::window().ok_or(AttachError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, AttachError> {
    window.document().ok_or(AttachError::NoDocument)
}

/// `window.innerWidth`, or 0 if the browser refuses to answer
pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First descendant of `root` matching `selector`
pub fn find(root: &Element, selector: &str) -> Result<Element, AttachError> {
    root.query_selector(selector)
        .map_err(|_| AttachError::InvalidSelector(selector.to_string()))?
        .ok_or_else(|| AttachError::MissingElement(selector.to_string()))
}

/// All descendants of `root` matching `selector`
pub fn find_all(root: &Element, selector: &str) -> Result<Vec<Element>, AttachError> {
    root.query_selector_all(selector)
        .map(elements)
        .map_err(|_| AttachError::InvalidSelector(selector.to_string()))
}

/// First element in the document matching `selector`
pub fn find_in_document(document: &Document, selector: &str) -> Result<Element, AttachError> {
    document
        .query_selector(selector)
        .map_err(|_| AttachError::InvalidSelector(selector.to_string()))?
        .ok_or_else(|| AttachError::MissingElement(selector.to_string()))
}

/// All elements in the document matching `selector`
pub fn find_all_in_document(
    document: &Document,
    selector: &str,
) -> Result<Vec<Element>, AttachError> {
    document
        .query_selector_all(selector)
        .map(elements)
        .map_err(|_| AttachError::InvalidSelector(selector.to_string()))
}

pub fn set_attribute(element: &Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        warn!(name, value, error = ?e, "setAttribute failed");
    }
}

pub fn remove_attribute(element: &Element, name: &str) {
    if let Err(e) = element.remove_attribute(name) {
        warn!(name, error = ?e, "removeAttribute failed");
    }
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        warn!(class, on, error = ?e, "classList.toggle failed");
    }
}

/// Whether the focused element is `root` or one of its descendants
pub fn focus_within(document: &Document, root: &Element) -> bool {
    document
        .active_element()
        .is_some_and(|active| root.contains(Some(active.as_ref())))
}
