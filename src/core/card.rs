// Pointer-reactive profile card engine.
//
// Translates pointer movement over the card's bounding box into a 3D tilt
// and a glow-layer offset, and fades a presence opacity in on pointer entry
// and out on exit. The engine is pure: input arrives through the
// `pointer_*` methods, per-frame work is driven by [`CardEngine::run_frame`]
// against a [`StepQueue`], and output lands in a [`PresentationSink`] owned
// by the host. Nothing here touches the DOM, which is what lets the tests
// run the whole state machine on the host.

use super::constants::{
    GLOW_TRANSLATE_SCALE, PRESENCE_FADE_RATE_PER_SEC, ROTATE_X_DIVISOR, ROTATE_Y_DIVISOR,
};
use super::sched::{Handle, StepQueue, StepToken};

/// Bounding box of the card at the moment a transform step fires.
///
/// Surfaces are read fresh for every step, never cached, so layout shifts
/// between frames (resize, scroll) are tolerated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Surface {
    /// Zero-area surfaces occur transiently during reflow; they must be
    /// skipped, not divided by.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Transform parameters derived from the latest pointer sample.
///
/// `percent_x`/`percent_y` are the pointer position as a percentage of the
/// surface extent and are deliberately unclamped: with pointer capture the
/// sample can land outside the box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltState {
    pub percent_x: f32,
    pub percent_y: f32,
    /// Degrees; inverted so the card tilts away from the cursor.
    pub rotate_x: f32,
    /// Degrees.
    pub rotate_y: f32,
    /// Glow layer translation, px.
    pub glow_x: f32,
    pub glow_y: f32,
}

/// Tuning knobs with the reference values from `core::constants`.
#[derive(Clone, Copy, Debug)]
pub struct CardTuning {
    pub rotate_x_divisor: f32,
    pub rotate_y_divisor: f32,
    pub glow_translate_scale: f32,
    /// Opacity change per second; the reference is 0.05/frame at 60 Hz.
    pub fade_rate_per_sec: f32,
}

impl Default for CardTuning {
    fn default() -> Self {
        Self {
            rotate_x_divisor: ROTATE_X_DIVISOR,
            rotate_y_divisor: ROTATE_Y_DIVISOR,
            glow_translate_scale: GLOW_TRANSLATE_SCALE,
            fade_rate_per_sec: PRESENCE_FADE_RATE_PER_SEC,
        }
    }
}

/// Map an absolute pointer position to tilt parameters. `None` for a
/// degenerate surface; the caller keeps its previous tilt in that case.
pub fn tilt_from_pointer(
    tuning: &CardTuning,
    surface: &Surface,
    x: f32,
    y: f32,
) -> Option<TiltState> {
    if surface.is_degenerate() {
        return None;
    }
    let percent_x = 100.0 * (x - surface.left) / surface.width;
    let percent_y = 100.0 * (y - surface.top) / surface.height;
    let center_x = percent_x - 50.0;
    let center_y = percent_y - 50.0;
    Some(TiltState {
        percent_x,
        percent_y,
        rotate_x: -(center_x / tuning.rotate_x_divisor),
        rotate_y: center_y / tuning.rotate_y_divisor,
        glow_x: center_x * tuning.glow_translate_scale,
        glow_y: center_y * tuning.glow_translate_scale,
    })
}

/// Presence of the pointer over the card, as seen by the fade animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Idle,
    FadingIn,
    Full,
    FadingOut,
}

/// Where the engine writes its observable output. The wasm host maps this
/// onto CSS custom properties; tests record the calls.
pub trait PresentationSink {
    fn apply_tilt(&mut self, tilt: &TiltState);
    fn reset_tilt(&mut self);
    fn set_presence_opacity(&mut self, opacity: f32);
}

/// The card engine proper. One instance per attached card surface.
pub struct CardEngine {
    tuning: CardTuning,
    queue: StepQueue,
    tilt: TiltState,
    opacity: f32,
    presence: Presence,
    /// Latest unprocessed pointer sample; move events coalesce here so at
    /// most one transform step runs per frame.
    pending_sample: Option<(f32, f32)>,
    move_task: Option<Handle>,
    fade_task: Option<Handle>,
}

impl CardEngine {
    pub fn new(tuning: CardTuning) -> Self {
        Self {
            tuning,
            queue: StepQueue::new(),
            tilt: TiltState::default(),
            opacity: 0.0,
            presence: Presence::Idle,
            pending_sample: None,
            move_task: None,
            fade_task: None,
        }
    }

    pub fn tilt(&self) -> TiltState {
        self.tilt
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// True when a step is scheduled for the next frame.
    pub fn needs_frame(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Record a pointer sample. Samples arriving before the next frame
    /// replace the pending one; the transform step itself runs in
    /// [`run_frame`](Self::run_frame).
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pending_sample = Some((x, y));
        if self.move_task.is_none() {
            self.move_task = Some(self.queue.schedule(StepToken::Transform));
        }
    }

    /// Pointer entered the surface: cancel any fade-out in flight and ramp
    /// the presence opacity toward 1.
    pub fn pointer_enter(&mut self) {
        self.restart_fade(Presence::FadingIn);
    }

    /// Pointer left the surface. Tilt snaps back to neutral immediately
    /// (only presence eases), any still-pending move sample is discarded
    /// (leave wins over stale moves), and the presence ramps toward 0.
    pub fn pointer_leave(&mut self, sink: &mut impl PresentationSink) {
        self.tilt = TiltState::default();
        sink.reset_tilt();
        self.pending_sample = None;
        if let Some(h) = self.move_task.take() {
            self.queue.cancel(h);
        }
        self.restart_fade(Presence::FadingOut);
    }

    /// Detach from the surface: cancel all scheduled work and return to the
    /// initial state. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.queue.clear();
        self.move_task = None;
        self.fade_task = None;
        self.pending_sample = None;
        self.tilt = TiltState::default();
        self.opacity = 0.0;
        self.presence = Presence::Idle;
    }

    fn restart_fade(&mut self, direction: Presence) {
        if let Some(h) = self.fade_task.take() {
            self.queue.cancel(h);
        }
        self.presence = direction;
        self.fade_task = Some(self.queue.schedule(StepToken::Fade));
    }

    /// Execute the steps due this frame. `surface` is consulted lazily and
    /// only when a transform step actually fires, so coalesced bursts of
    /// pointer events cost one layout read. `dt_sec` is the time since the
    /// previous frame.
    pub fn run_frame<F, S>(&mut self, dt_sec: f32, mut surface: F, sink: &mut S)
    where
        F: FnMut() -> Option<Surface>,
        S: PresentationSink,
    {
        for (handle, token) in self.queue.drain_due() {
            match token {
                StepToken::Transform => {
                    if self.move_task == Some(handle) {
                        self.move_task = None;
                    }
                    let Some((x, y)) = self.pending_sample.take() else {
                        continue;
                    };
                    if let Some(surf) = surface() {
                        if let Some(tilt) = tilt_from_pointer(&self.tuning, &surf, x, y) {
                            self.tilt = tilt;
                            sink.apply_tilt(&tilt);
                        }
                    }
                }
                StepToken::Fade => {
                    if self.fade_task == Some(handle) {
                        self.fade_task = None;
                        self.step_fade(dt_sec, sink);
                    }
                }
            }
        }
    }

    /// One fade step. Monotone toward the current target; clamps exactly at
    /// the bound and stops rescheduling there.
    fn step_fade(&mut self, dt_sec: f32, sink: &mut impl PresentationSink) {
        let step = dt_sec * self.tuning.fade_rate_per_sec;
        match self.presence {
            Presence::FadingIn => {
                self.opacity += step;
                if self.opacity >= 1.0 {
                    self.opacity = 1.0;
                    self.presence = Presence::Full;
                } else {
                    self.fade_task = Some(self.queue.schedule(StepToken::Fade));
                }
                sink.set_presence_opacity(self.opacity);
            }
            Presence::FadingOut => {
                self.opacity -= step;
                if self.opacity <= 0.0 {
                    self.opacity = 0.0;
                    self.presence = Presence::Idle;
                } else {
                    self.fade_task = Some(self.queue.schedule(StepToken::Fade));
                }
                sink.set_presence_opacity(self.opacity);
            }
            // A step that survived into Idle/Full is stale; nothing to do.
            Presence::Idle | Presence::Full => {}
        }
    }
}
