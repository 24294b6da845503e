use crate::constants::{HIDDEN_CLASS, INTRO_LOADER_ID};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INTRO_LOADER_ID) {
        let cl = el.class_list();
        _ = cl.remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INTRO_LOADER_ID) {
        let cl = el.class_list();
        _ = cl.add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}
