//! Global configuration constants for the collider space.

/// Ray length that counts as unbounded. Any ray whose distance is at least
/// this value behaves as an infinite ray in every interval test.
pub const MAX_RAY_DISTANCE: f32 = f32::MAX;

/// Allowed drift of `f0 + f1` away from `1.0` when splitting a correction by inverse mass.
pub const MASS_FRACTION_TOLERANCE: f32 = 0.01;

/// Default fixed simulation step (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Frame budget (in milliseconds) above which a scene step logs a warning.
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 4.0;
