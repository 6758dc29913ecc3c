//! DOM fixtures for the browser tests
#![allow(dead_code)]

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub fn tracing_init() {
    vitrine_web::logging::init(tracing::Level::TRACE);
}

pub fn document() -> Document {
    web_sys::window()
        .expect("window")
        .document()
        .expect("document")
}

pub fn body() -> HtmlElement {
    document().body().expect("body")
}

/// Replace the page content with `html` and clear any body classes.
pub fn mount(html: &str) -> HtmlElement {
    let body = body();
    body.set_class_name("");
    body.set_inner_html(html);
    body
}

pub fn query(selector: &str) -> Element {
    document()
        .query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let list = document()
        .query_selector_all(selector)
        .expect("valid selector");
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.dyn_into::<Element>().expect("element"))
        .collect()
}

pub fn click(element: &Element) {
    element
        .dyn_ref::<HtmlElement>()
        .expect("html element")
        .click();
}

pub fn attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Breakpoint that puts any test browser in the desktop layout
pub const DESKTOP_BREAKPOINT: u32 = 1;
/// Breakpoint that puts any test browser in the mobile layout
pub const MOBILE_BREAKPOINT: u32 = 100_000;

/// Markup for one complete carousel
pub fn carousel_html(id: &str, items: usize, breakpoint: u32) -> String {
    let items: String = (0..items)
        .map(|i| format!(r#"<div class="carousel-item">Item {i}</div>"#))
        .collect();
    format!(
        r#"<div class="carousel" id="{id}" data-breakpoint="{breakpoint}">
             <div class="carousel-items">{items}</div>
             <div class="carousel-bullets-controls"></div>
           </div>"#
    )
}

/// Pagination buttons of the carousel with the given id
pub fn buttons(id: &str) -> Vec<Element> {
    query_all(&format!("#{id} .carousel-bullets-controls button"))
}

/// Index of every button marked selected
pub fn selected(id: &str) -> Vec<usize> {
    buttons(id)
        .iter()
        .enumerate()
        .filter(|(_, b)| attr(b, "aria-selected").as_deref() == Some("true"))
        .map(|(i, _)| i)
        .collect()
}

/// Index of every button carrying the active class
pub fn active(id: &str) -> Vec<usize> {
    buttons(id)
        .iter()
        .enumerate()
        .filter(|(_, b)| b.class_list().contains("active"))
        .map(|(i, _)| i)
        .collect()
}

pub const MENU_HTML: &str = r#"
    <button class="mobile-menu-toggle">Menu</button>
    <nav class="nav-container"><a href="/">Home</a></nav>
"#;
