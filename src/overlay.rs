use crate::constants::{HIDDEN_CLASS, START_OVERLAY_ID};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show or dismiss the "click to enter" overlay.
pub fn set_visible(document: &web::Document, visible: bool) {
    let Some(el) = document.get_element_by_id(START_OVERLAY_ID) else {
        return;
    };
    _ = el.class_list().toggle_with_force(HIDDEN_CLASS, !visible);
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        html.set_hidden(!visible);
    }
}
