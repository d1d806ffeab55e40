// =============================================================================
// Stock Tracker Web - DOM Utilities
// =============================================================================

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use crate::error::MountError;

/// Get the browser window object.
pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::NoWindow)
}

/// Look up an HTML element by id.
pub fn root_element(id: &str) -> Result<HtmlElement, MountError> {
    let document = window()?.document().ok_or(MountError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingRoot(id.to_string()))?;

    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(id.to_string()))
}
