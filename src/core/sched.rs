// Frame-step scheduling with first-class cancellation.
//
// The browser's `requestAnimationFrame` hands out opaque ids and hides
// cancellation inside closure state; here scheduling is an explicit queue so
// that superseding a step (enter/leave races, detach) is an operation the
// host and the tests can both exercise. The wasm frame loop drains the
// queue once per animation frame; tests drain it by hand.

use std::mem;

/// Identity of one scheduled step. Handles are unique for the lifetime of
/// the queue and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle(u64);

/// What kind of work a step performs when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepToken {
    /// Apply the latest coalesced pointer sample to the tilt transform.
    Transform,
    /// Advance the presence fade by one step.
    Fade,
}

/// Pending steps for the next frame. A step fires at most once; cancelling
/// removes it before it can fire. Steps scheduled while a drain is in
/// progress land in the following frame.
#[derive(Default)]
pub struct StepQueue {
    next_id: u64,
    pending: Vec<(Handle, StepToken)>,
}

impl StepQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `token` for the next frame drain.
    pub fn schedule(&mut self, token: StepToken) -> Handle {
        let handle = Handle(self.next_id);
        self.next_id += 1;
        self.pending.push((handle, token));
        handle
    }

    /// Remove a scheduled step. Unknown or already-fired handles are a no-op.
    pub fn cancel(&mut self, handle: Handle) {
        self.pending.retain(|(h, _)| *h != handle);
    }

    /// Take everything due this frame, in scheduling order. Re-scheduled
    /// steps accumulate for the next drain.
    pub fn drain_due(&mut self) -> Vec<(Handle, StepToken)> {
        mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
