use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Typed element lookup; missing ids and wrong element types are wiring
/// errors, reported through the init error path.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{id} is not the expected element type"))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn set_css_var(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Option<(f32, f32)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w as f32, h as f32))
}

/// Match the canvas backing store to the viewport so the particle field
/// draws in CSS pixel coordinates.
pub fn size_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    if let Some((w, h)) = viewport_size(window) {
        canvas.set_width(w.max(1.0) as u32);
        canvas.set_height(h.max(1.0) as u32);
    }
}
