//! Visual output: the card's CSS custom properties and the particle canvas.

use crate::constants::{
    VAR_CARD_OPACITY, VAR_GLOW_X, VAR_GLOW_Y, VAR_POINTER_X, VAR_POINTER_Y, VAR_ROTATE_X,
    VAR_ROTATE_Y,
};
use crate::core::card::{PresentationSink, TiltState};
use crate::core::particles::ParticleField;
use crate::dom;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

// Particle palette, matching the page accent colors.
const BACKGROUND_WASH: &str = "rgba(2,6,23,0.6)";
const LINK_COLOR: (u8, u8, u8) = (56, 189, 248);
const HALO_COLOR: (u8, u8, u8) = (168, 85, 247);
const DOT_COLOR: (u8, u8, u8) = (56, 189, 248);
const LINK_WIDTH: f64 = 0.6;

/// Writes the engine's transform parameters onto the card container as CSS
/// custom properties; the stylesheet turns them into the 3D transform and
/// the glow layer's position.
pub struct CssVarSink {
    container: web::HtmlElement,
}

impl CssVarSink {
    pub fn new(container: web::HtmlElement) -> Self {
        Self { container }
    }
}

impl PresentationSink for CssVarSink {
    fn apply_tilt(&mut self, tilt: &TiltState) {
        let c = &self.container;
        dom::set_css_var(c, VAR_POINTER_X, &format!("{}%", tilt.percent_x));
        dom::set_css_var(c, VAR_POINTER_Y, &format!("{}%", tilt.percent_y));
        dom::set_css_var(c, VAR_ROTATE_X, &format!("{}deg", tilt.rotate_x));
        dom::set_css_var(c, VAR_ROTATE_Y, &format!("{}deg", tilt.rotate_y));
        dom::set_css_var(c, VAR_GLOW_X, &format!("{}px", tilt.glow_x));
        dom::set_css_var(c, VAR_GLOW_Y, &format!("{}px", tilt.glow_y));
    }

    fn reset_tilt(&mut self) {
        let c = &self.container;
        dom::set_css_var(c, VAR_ROTATE_X, "0deg");
        dom::set_css_var(c, VAR_ROTATE_Y, "0deg");
        dom::set_css_var(c, VAR_GLOW_X, "0px");
        dom::set_css_var(c, VAR_GLOW_Y, "0px");
    }

    fn set_presence_opacity(&mut self, opacity: f32) {
        dom::set_css_var(&self.container, VAR_CARD_OPACITY, &format!("{opacity}"));
    }
}

/// Canvas 2D renderer for the background particle field.
pub struct ParticleRenderer {
    ctx: web::CanvasRenderingContext2d,
}

impl ParticleRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{e:?}"))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        Ok(Self { ctx })
    }

    pub fn draw(&self, field: &ParticleField) {
        let (w, h) = field.bounds();
        let (w, h) = (w as f64, h as f64);
        let ctx = &self.ctx;

        ctx.clear_rect(0.0, 0.0, w, h);
        ctx.set_fill_style_str(BACKGROUND_WASH);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_line_width(LINK_WIDTH);
        for link in field.links() {
            ctx.set_stroke_style_str(&rgba(LINK_COLOR, link.alpha));
            ctx.begin_path();
            ctx.move_to(link.a.x as f64, link.a.y as f64);
            ctx.line_to(link.b.x as f64, link.b.y as f64);
            ctx.stroke();
        }

        for p in field.particles() {
            let (x, y, r) = (p.pos.x as f64, p.pos.y as f64, p.radius as f64);
            if let Ok(halo) = ctx.create_radial_gradient(x, y, 0.0, x, y, r * 4.0) {
                _ = halo.add_color_stop(0.0, &rgba(HALO_COLOR, p.alpha));
                _ = halo.add_color_stop(1.0, "rgba(0,0,0,0)");
                ctx.set_fill_style_canvas_gradient(&halo);
                ctx.begin_path();
                _ = ctx.arc(x, y, r * 3.0, 0.0, TAU);
                ctx.fill();
            }
            ctx.set_fill_style_str(&rgba(DOT_COLOR, p.alpha));
            ctx.begin_path();
            _ = ctx.arc(x, y, r, 0.0, TAU);
            ctx.fill();
        }
    }
}

fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({r},{g},{b},{alpha:.3})")
}
