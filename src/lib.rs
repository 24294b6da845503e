#![cfg(target_arch = "wasm32")]
//! folio-web: wasm entry point for the portfolio page.
//!
//! The page shell lives in `web/index.html`; this module finds its elements,
//! wires the interactive pieces (profile card engine, particle background,
//! theme toggle, contact form, chat widget) and starts the frame loop.

use crate::constants::{CARD_CONTAINER_ID, PARTICLES_CANVAS_ID};
use crate::content::CardProps;
use crate::core::card::{CardEngine, CardTuning};
use crate::core::particles::ParticleField;
use crate::frame::FrameContext;
use crate::render::{CssVarSink, ParticleRenderer};
use crate::theme::ThemeController;
use instant::Instant;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod api;
mod constants;
mod content;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Theme first so the page paints with the right palette.
    let mut theme_ctl = ThemeController::load(&window);
    let initial = theme_ctl.current();
    theme_ctl.set(&window, &document, initial);
    events::forms::wire_theme_toggle(&window, &document, theme_ctl);

    // Profile card: display data, engine, CSS-variable sink.
    content::populate_card(&document, &CardProps::default())?;
    content::wire_contact_activation(&document);
    let card_el: web::HtmlElement = dom::element_by_id(&document, CARD_CONTAINER_ID)?;
    let card = CardEngine::new(CardTuning::default());
    let sink = CssVarSink::new(card_el.clone());

    // Background particle field on the full-viewport canvas.
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, PARTICLES_CANVAS_ID)?;
    dom::size_canvas_to_viewport(&window, &canvas);
    let (vw, vh) = dom::viewport_size(&window).unwrap_or((1.0, 1.0));
    let seed: u64 = rand::thread_rng().gen();
    let particles = ParticleField::new(vw, vh, seed);
    let renderer = ParticleRenderer::new(&canvas)?;

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        card,
        sink,
        card_el: card_el.clone(),
        particles,
        renderer,
        last_instant: Instant::now(),
        loader_hidden: false,
    }));

    events::pointer::wire_card_pointer(&frame_ctx, &card_el);
    wire_viewport_resize(frame_ctx.clone(), canvas);
    events::forms::wire_contact_form(&document)?;
    events::forms::wire_chat(&document)?;

    // Loader stays up until the first frame has rendered.
    overlay::show(&document);
    frame::start_loop(frame_ctx);

    Ok(())
}

fn wire_viewport_resize(frame_ctx: Rc<RefCell<FrameContext>>, canvas: web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            dom::size_canvas_to_viewport(&window, &canvas);
            if let Some((w, h)) = dom::viewport_size(&window) {
                frame_ctx.borrow_mut().particles.resize(w, h);
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
