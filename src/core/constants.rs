/// Card interaction and particle tuning constants.
///
/// These values express intended behavior (rotation feel, fade pacing,
/// particle density) and keep magic numbers out of the code. The card
/// constants are aesthetic tuning values, not derived quantities; retune
/// here, or per-instance via `CardTuning`.
// Pointer-to-rotation mapping. Horizontal displacement tilts the card away
// from the cursor (inverted, gentler divisor); vertical displacement tilts
// toward it. The 5/4 ratio is intentional; retune both together.
pub const ROTATE_X_DIVISOR: f32 = 5.0;
pub const ROTATE_Y_DIVISOR: f32 = 4.0;

// Glow layer: translation as a fraction of the centered percentage, plus a
// constant rotation independent of pointer state.
pub const GLOW_TRANSLATE_SCALE: f32 = 0.5;
pub const GLOW_LAYER_ROTATE_DEG: f32 = 45.0;

// Presence fade. The reference ramp is 0.05 per frame at 60 Hz (a 20-frame
// ramp); the engine steps by time so the ramp length is display-independent.
pub const PRESENCE_FADE_STEP_PER_FRAME: f32 = 0.05;
pub const REFERENCE_FRAME_RATE_HZ: f32 = 60.0;
pub const PRESENCE_FADE_RATE_PER_SEC: f32 =
    PRESENCE_FADE_STEP_PER_FRAME * REFERENCE_FRAME_RATE_HZ;

// Particle field sizing: one particle per PARTICLE_AREA_DIVISOR px², capped.
pub const MAX_PARTICLES: usize = 160;
pub const PARTICLE_AREA_DIVISOR: f32 = 15_000.0;

// Per-particle spawn ranges. Velocity is in px per reference frame, applied
// per-second through the same 60 Hz reference as the presence fade.
pub const PARTICLE_SPEED: f32 = 0.6;
pub const PARTICLE_RADIUS_MIN: f32 = 0.4;
pub const PARTICLE_RADIUS_SPAN: f32 = 1.8;
pub const PARTICLE_ALPHA_MIN: f32 = 0.2;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.8;

// Proximity links between particles.
pub const LINK_MAX_DIST: f32 = 120.0;
pub const LINK_ALPHA_SCALE: f32 = 0.45;

// Chat relay keeps only the most recent turns in each request.
pub const CHAT_HISTORY_LIMIT: usize = 10;

// Contact form: minimum message length accepted by validation.
pub const CONTACT_MESSAGE_MIN_CHARS: usize = 10;
