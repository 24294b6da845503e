//! Pointer wiring for the profile card. Events only record input and
//! schedule steps; all observable work happens in the frame loop.

use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_card_pointer(ctx: &Rc<RefCell<FrameContext>>, card_el: &web::HtmlElement) {
    wire_pointermove(ctx, card_el);
    wire_pointerenter(ctx, card_el);
    wire_pointerleave(ctx, card_el);
}

fn wire_pointermove(ctx: &Rc<RefCell<FrameContext>>, card_el: &web::HtmlElement) {
    let ctx = ctx.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Samples coalesce in the engine; only the latest one before the
        // next frame is applied.
        ctx.borrow_mut()
            .card
            .pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = card_el.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerenter(ctx: &Rc<RefCell<FrameContext>>, card_el: &web::HtmlElement) {
    let ctx = ctx.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        ctx.borrow_mut().card.pointer_enter();
    }) as Box<dyn FnMut(_)>);
    _ = card_el.add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(ctx: &Rc<RefCell<FrameContext>>, card_el: &web::HtmlElement) {
    let ctx = ctx.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut c = ctx.borrow_mut();
        let FrameContext { card, sink, .. } = &mut *c;
        card.pointer_leave(sink);
    }) as Box<dyn FnMut(_)>);
    _ = card_el.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
