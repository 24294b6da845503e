// Host-side tests for the card engine. The main crate is wasm-only, so we
// include the pure-Rust modules directly.

#![allow(dead_code)]
mod enginecore {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod sched {
        include!("../src/core/sched.rs");
    }
    pub mod card {
        include!("../src/core/card.rs");
    }
}

use enginecore::card::*;

const DT: f32 = 1.0 / 60.0;

#[derive(Default)]
struct RecordingSink {
    tilts: Vec<TiltState>,
    resets: usize,
    opacities: Vec<f32>,
}

impl PresentationSink for RecordingSink {
    fn apply_tilt(&mut self, tilt: &TiltState) {
        self.tilts.push(*tilt);
    }
    fn reset_tilt(&mut self) {
        self.resets += 1;
    }
    fn set_presence_opacity(&mut self, opacity: f32) {
        self.opacities.push(opacity);
    }
}

fn surface_200x100() -> Surface {
    Surface {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 100.0,
    }
}

fn run_frames(engine: &mut CardEngine, sink: &mut RecordingSink, surface: Surface, n: usize) {
    for _ in 0..n {
        engine.run_frame(DT, || Some(surface), sink);
    }
}

fn assert_non_decreasing(values: &[f32]) {
    for pair in values.windows(2) {
        assert!(pair[1] >= pair[0], "expected non-decreasing: {values:?}");
    }
}

fn assert_non_increasing(values: &[f32]) {
    for pair in values.windows(2) {
        assert!(pair[1] <= pair[0], "expected non-increasing: {values:?}");
    }
}

// ---------------- tilt mapping ----------------

#[test]
fn center_pointer_is_neutral() {
    let tilt = tilt_from_pointer(&CardTuning::default(), &surface_200x100(), 100.0, 50.0).unwrap();
    assert_eq!(tilt.percent_x, 50.0);
    assert_eq!(tilt.percent_y, 50.0);
    assert_eq!(tilt.rotate_x, 0.0);
    assert_eq!(tilt.rotate_y, 0.0);
    assert_eq!(tilt.glow_x, 0.0);
    assert_eq!(tilt.glow_y, 0.0);
}

#[test]
fn top_left_corner_mapping() {
    let tilt = tilt_from_pointer(&CardTuning::default(), &surface_200x100(), 0.0, 0.0).unwrap();
    assert_eq!(tilt.percent_x, 0.0);
    assert_eq!(tilt.percent_y, 0.0);
    assert_eq!(tilt.rotate_x, 10.0);
    assert_eq!(tilt.rotate_y, -12.5);
    assert_eq!(tilt.glow_x, -25.0);
    assert_eq!(tilt.glow_y, -25.0);
}

#[test]
fn bottom_right_corner_mapping() {
    let tilt = tilt_from_pointer(&CardTuning::default(), &surface_200x100(), 200.0, 100.0).unwrap();
    assert_eq!(tilt.percent_x, 100.0);
    assert_eq!(tilt.percent_y, 100.0);
    assert_eq!(tilt.rotate_x, -10.0);
    assert_eq!(tilt.rotate_y, 12.5);
    assert_eq!(tilt.glow_x, 25.0);
    assert_eq!(tilt.glow_y, 25.0);
}

#[test]
fn offset_surface_uses_relative_position() {
    let surface = Surface {
        left: 40.0,
        top: 30.0,
        width: 200.0,
        height: 100.0,
    };
    let tilt = tilt_from_pointer(&CardTuning::default(), &surface, 140.0, 80.0).unwrap();
    assert_eq!(tilt.percent_x, 50.0);
    assert_eq!(tilt.percent_y, 50.0);
}

#[test]
fn interior_points_stay_in_percent_range() {
    let surface = surface_200x100();
    let tuning = CardTuning::default();
    for &(x, y) in &[(1.0, 1.0), (50.0, 25.0), (199.0, 99.0), (137.0, 4.0)] {
        let tilt = tilt_from_pointer(&tuning, &surface, x, y).unwrap();
        assert!(tilt.percent_x >= 0.0 && tilt.percent_x <= 100.0);
        assert!(tilt.percent_y >= 0.0 && tilt.percent_y <= 100.0);
        assert_eq!(tilt.rotate_x, -((tilt.percent_x - 50.0) / 5.0));
        assert_eq!(tilt.rotate_y, (tilt.percent_y - 50.0) / 4.0);
    }
}

#[test]
fn captured_pointer_outside_surface_is_unclamped() {
    let tilt = tilt_from_pointer(&CardTuning::default(), &surface_200x100(), 250.0, 125.0).unwrap();
    assert_eq!(tilt.percent_x, 125.0);
    assert_eq!(tilt.percent_y, 125.0);
}

#[test]
fn zero_area_surface_maps_to_nothing() {
    let tuning = CardTuning::default();
    let flat = Surface {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 50.0,
    };
    assert!(tilt_from_pointer(&tuning, &flat, 10.0, 10.0).is_none());
    let thin = Surface {
        left: 0.0,
        top: 0.0,
        width: 50.0,
        height: 0.0,
    };
    assert!(tilt_from_pointer(&tuning, &thin, 10.0, 10.0).is_none());
}

// ---------------- engine: move handling ----------------

#[test]
fn move_applies_on_next_frame_only() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();

    engine.pointer_move(0.0, 0.0);
    assert!(engine.needs_frame());
    assert_eq!(sink.tilts.len(), 0);

    run_frames(&mut engine, &mut sink, surface_200x100(), 1);
    assert_eq!(sink.tilts.len(), 1);
    assert_eq!(engine.tilt().rotate_x, 10.0);
    assert!(!engine.needs_frame());
}

#[test]
fn moves_coalesce_to_latest_sample() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();

    engine.pointer_move(10.0, 10.0);
    engine.pointer_move(60.0, 20.0);
    engine.pointer_move(100.0, 50.0);

    let surface = surface_200x100();
    let mut layout_reads = 0;
    engine.run_frame(
        DT,
        || {
            layout_reads += 1;
            Some(surface)
        },
        &mut sink,
    );

    // One step, one layout read, only the latest sample applied.
    assert_eq!(sink.tilts.len(), 1);
    assert_eq!(layout_reads, 1);
    assert_eq!(sink.tilts[0].percent_x, 50.0);
    assert_eq!(sink.tilts[0].percent_y, 50.0);
}

#[test]
fn degenerate_surface_keeps_previous_tilt() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();

    engine.pointer_move(0.0, 0.0);
    run_frames(&mut engine, &mut sink, surface_200x100(), 1);
    let before = engine.tilt();

    engine.pointer_move(100.0, 50.0);
    let collapsed = Surface {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };
    run_frames(&mut engine, &mut sink, collapsed, 1);

    assert_eq!(engine.tilt(), before);
    assert_eq!(sink.tilts.len(), 1);
    assert!(!engine.needs_frame());
}

// ---------------- engine: presence fades ----------------

#[test]
fn fade_in_is_monotone_and_clamps_at_one() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();

    assert_eq!(engine.presence(), Presence::Idle);
    engine.pointer_enter();
    assert_eq!(engine.presence(), Presence::FadingIn);

    run_frames(&mut engine, &mut sink, surface_200x100(), 30);

    assert_eq!(engine.presence(), Presence::Full);
    assert_eq!(engine.opacity(), 1.0);
    assert_non_decreasing(&sink.opacities);
    assert!(sink.opacities.iter().all(|&o| o <= 1.0));
    assert_eq!(*sink.opacities.last().unwrap(), 1.0);
    // Ramp finished; nothing left scheduled.
    assert!(!engine.needs_frame());
}

#[test]
fn repeated_enter_does_not_compound_step_rate() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();

    engine.pointer_enter();
    engine.pointer_enter();
    run_frames(&mut engine, &mut sink, surface_200x100(), 1);

    // A single fade step per frame, not two.
    assert_eq!(sink.opacities.len(), 1);
    assert!(engine.opacity() < 0.09, "opacity {}", engine.opacity());
}

#[test]
fn leave_reverses_fade_in_immediately() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();

    engine.pointer_enter();
    run_frames(&mut engine, &mut sink, surface_200x100(), 3);
    let risen = engine.opacity();
    assert!(risen > 0.0 && risen < 1.0);

    engine.pointer_leave(&mut sink);
    assert_eq!(engine.presence(), Presence::FadingOut);
    let split = sink.opacities.len();
    run_frames(&mut engine, &mut sink, surface_200x100(), 30);

    assert_non_increasing(&sink.opacities[split..]);
    assert_eq!(engine.opacity(), 0.0);
    assert_eq!(engine.presence(), Presence::Idle);
    assert!(!engine.needs_frame());
}

#[test]
fn reentry_during_fade_out_ramps_back_up() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();
    let surface = surface_200x100();

    engine.pointer_enter();
    run_frames(&mut engine, &mut sink, surface, 30);
    assert_eq!(engine.presence(), Presence::Full);

    engine.pointer_leave(&mut sink);
    run_frames(&mut engine, &mut sink, surface, 5);
    let partway = engine.opacity();
    assert!(partway > 0.0 && partway < 1.0);

    engine.pointer_enter();
    assert_eq!(engine.presence(), Presence::FadingIn);
    let split = sink.opacities.len();
    run_frames(&mut engine, &mut sink, surface, 30);

    assert_non_decreasing(&sink.opacities[split..]);
    assert_eq!(engine.opacity(), 1.0);
    assert_eq!(engine.presence(), Presence::Full);
}

#[test]
fn leave_from_full_fades_out() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();
    let surface = surface_200x100();

    engine.pointer_enter();
    run_frames(&mut engine, &mut sink, surface, 30);
    engine.pointer_leave(&mut sink);
    let split = sink.opacities.len();
    run_frames(&mut engine, &mut sink, surface, 30);

    assert_non_increasing(&sink.opacities[split..]);
    assert_eq!(engine.opacity(), 0.0);
    assert!(sink.opacities.iter().all(|&o| o >= 0.0));
}

// ---------------- engine: leave semantics ----------------

#[test]
fn leave_resets_tilt_without_easing() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();

    engine.pointer_move(0.0, 0.0);
    run_frames(&mut engine, &mut sink, surface_200x100(), 1);
    assert_ne!(engine.tilt(), TiltState::default());

    engine.pointer_leave(&mut sink);
    // Neutral immediately, not on the next frame.
    assert_eq!(engine.tilt(), TiltState::default());
    assert_eq!(sink.resets, 1);
}

#[test]
fn leave_discards_stale_pending_move() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();

    engine.pointer_move(0.0, 0.0);
    engine.pointer_leave(&mut sink);
    run_frames(&mut engine, &mut sink, surface_200x100(), 2);

    // The stale move never re-applies tilt after the reset.
    assert_eq!(sink.tilts.len(), 0);
    assert_eq!(engine.tilt(), TiltState::default());
}

// ---------------- engine: detach ----------------

#[test]
fn detach_is_idempotent() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();

    engine.pointer_enter();
    engine.pointer_move(10.0, 10.0);
    engine.detach();
    engine.detach();

    assert_eq!(engine.presence(), Presence::Idle);
    assert_eq!(engine.opacity(), 0.0);
    assert_eq!(engine.tilt(), TiltState::default());
    assert!(!engine.needs_frame());

    // No residual scheduled work fires afterwards.
    run_frames(&mut engine, &mut sink, surface_200x100(), 3);
    assert!(sink.tilts.is_empty());
    assert!(sink.opacities.is_empty());
}

// ---------------- end-to-end scenario ----------------

#[test]
fn full_interaction_scenario() {
    let mut engine = CardEngine::new(CardTuning::default());
    let mut sink = RecordingSink::default();
    let surface = surface_200x100();

    // Center: everything neutral.
    engine.pointer_enter();
    engine.pointer_move(100.0, 50.0);
    run_frames(&mut engine, &mut sink, surface, 1);
    let centered = *sink.tilts.last().unwrap();
    assert_eq!(centered.rotate_x, 0.0);
    assert_eq!(centered.rotate_y, 0.0);
    assert_eq!(centered.glow_x, 0.0);
    assert_eq!(centered.glow_y, 0.0);

    // Top-left corner.
    engine.pointer_move(0.0, 0.0);
    run_frames(&mut engine, &mut sink, surface, 1);
    let corner = *sink.tilts.last().unwrap();
    assert_eq!(corner.percent_x, 0.0);
    assert_eq!(corner.percent_y, 0.0);
    assert_eq!(corner.rotate_x, 10.0);
    assert_eq!(corner.rotate_y, -12.5);
    assert_eq!(corner.glow_x, -25.0);
    assert_eq!(corner.glow_y, -25.0);

    // Leave: tilt snaps to neutral now, opacity decays over later frames.
    let before_leave = engine.opacity();
    engine.pointer_leave(&mut sink);
    assert_eq!(engine.tilt(), TiltState::default());
    let split = sink.opacities.len();
    run_frames(&mut engine, &mut sink, surface, 2);
    assert!(engine.opacity() < before_leave);
    assert_non_increasing(&sink.opacities[split..]);
}
