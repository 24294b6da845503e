use crate::core::card::{CardEngine, Surface};
use crate::core::particles::ParticleField;
use crate::dom;
use crate::overlay;
use crate::render::{CssVarSink, ParticleRenderer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub card: CardEngine,
    pub sink: CssVarSink,
    pub card_el: web::HtmlElement,

    pub particles: ParticleField,
    pub renderer: ParticleRenderer,

    pub last_instant: Instant,
    pub loader_hidden: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Card steps due this frame. The surface is read fresh from layout
        // only when a transform step actually fires.
        self.card
            .run_frame(dt_sec, || surface_of(&self.card_el), &mut self.sink);

        self.particles.step(dt_sec);
        self.renderer.draw(&self.particles);

        if !self.loader_hidden {
            if let Some(document) = dom::window_document() {
                overlay::hide(&document);
            }
            self.loader_hidden = true;
        }
    }
}

/// Current bounding box of an element, in viewport coordinates.
pub fn surface_of(el: &web::HtmlElement) -> Option<Surface> {
    let rect = el.get_bounding_client_rect();
    Some(Surface {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    })
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
