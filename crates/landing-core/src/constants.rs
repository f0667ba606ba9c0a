//! Default tuning parameters. Every value here can be overridden through
//! [`GameConfig`](crate::config::GameConfig).

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, TAU};

// --- Aerodrome ---

pub const AERODROME_LEFT: f64 = 0.0;
pub const AERODROME_TOP: f64 = 100.0;
pub const AERODROME_RIGHT: f64 = 100.0;
pub const AERODROME_BOTTOM: f64 = 0.0;

// --- Landing sites ---

pub const LONG_RUNWAY_POSITION: (f64, f64) = (50.0, 75.0);
/// Heading into the long runway (radians, 0 = towards +x).
pub const LONG_RUNWAY_CENTER_ANGLE: f64 = 0.0;
pub const LONG_RUNWAY_APERTURE_ANGLE: f64 = FRAC_PI_3;

pub const SHORT_RUNWAY_POSITION: (f64, f64) = (75.0, 25.0);
pub const SHORT_RUNWAY_CENTER_ANGLE: f64 = FRAC_PI_2;
pub const SHORT_RUNWAY_APERTURE_ANGLE: f64 = FRAC_PI_3;

pub const HELIPAD_POSITION: (f64, f64) = (25.0, 25.0);
pub const HELIPAD_APERTURE_ANGLE: f64 = TAU;

/// Tolerance for entry-arc limit comparisons (radians).
pub const ANGLE_EPSILON: f64 = 1e-9;

// --- Aircraft categories (speeds in aerodrome units per second) ---

pub const LARGE_PLANE_RADIUS: f64 = 5.0;
pub const LARGE_PLANE_MIN_SPEED: f64 = 8.0;
pub const LARGE_PLANE_MAX_SPEED: f64 = 12.0;

pub const LIGHT_PLANE_RADIUS: f64 = 3.0;
pub const LIGHT_PLANE_MIN_SPEED: f64 = 6.0;
pub const LIGHT_PLANE_MAX_SPEED: f64 = 10.0;

pub const HELICOPTER_RADIUS: f64 = 2.0;
pub const HELICOPTER_MIN_SPEED: f64 = 3.0;
pub const HELICOPTER_MAX_SPEED: f64 = 5.0;

// --- Timing ---

/// Nominal tick period. Movement uses the measured elapsed time instead.
pub const TICK_PERIOD_MS: u64 = 30;

/// Minimum delay between two generated aircraft.
pub const SPAWN_MIN_DELAY_MS: u64 = 1_000;

/// Random extra delay on top of the minimum, drawn from `[0, jitter)`.
pub const SPAWN_JITTER_MS: u64 = 1_000;

/// Spawn headings stay this far (radians, 5°) away from running along the edge.
pub const SPAWN_HEADING_MARGIN: f64 = 5.0 * std::f64::consts::PI / 180.0;

// --- Input ---

/// Selection tolerance as a multiple of the aircraft radius.
pub const SELECTION_MARGIN: f64 = 1.5;
