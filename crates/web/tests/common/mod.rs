#![allow(dead_code)]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh container appended to `<body>`.
pub fn container() -> HtmlElement {
    let document = document();
    let div = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Yield to the browser so pending reactive updates reach the DOM.
pub async fn settle() {
    TimeoutFuture::new(0).await;
}

pub fn find(root: &HtmlElement, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

pub fn count(root: &HtmlElement, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

pub fn icon_name(root: &HtmlElement) -> String {
    find(root, ".lock-icon").get_attribute("data-icon").unwrap()
}

pub fn click_login(root: &HtmlElement) {
    find(root, "button.btn").unchecked_into::<HtmlElement>().click();
}

pub fn type_into(root: &HtmlElement, selector: &str, text: &str) {
    let input = find(root, selector).unchecked_into::<HtmlInputElement>();
    input.set_value(text);
    let event = Event::new("input").unwrap();
    input.dispatch_event(&event).unwrap();
}
