//! Effect constants
//!
//! The overlay has no runtime configuration; everything it does is fixed here.

use crate::scheduler::TargetMoment;

/// Wall-clock moment (local time) at which the overlay starts.
pub const TARGET_MOMENT: TargetMoment = TargetMoment {
    year: 2024,
    month: 11,
    day: 21,
    hour: 17,
    minute: 36,
    second: 0,
};

// Pool
pub const MAX_PARTICLES: usize = 250;
pub const PREFILL_PARTICLES: usize = 80;
pub const SPAWN_CHANCE: f64 = 0.6;
pub const FLAKE_SHARE: f64 = 0.85;

// Timing
pub const NOMINAL_FRAME_MS: f64 = 16.6667;
pub const SWAY_TIME_SCALE: f64 = 0.05;
pub const SWAY_DELTA_SCALE: f64 = 0.6;

// Exit margins around the drawing surface
pub const BOTTOM_MARGIN: f64 = 50.0;
pub const SIDE_MARGIN: f64 = 100.0;

// Flake ranges
pub const FLAKE_SIZE: (f64, f64) = (1.2, 4.0);
pub const FLAKE_SPAWN_Y: (f64, f64) = (-50.0, -10.0);
pub const FLAKE_SPEED: (f64, f64) = (0.6, 2.2);
pub const FLAKE_DRIFT: (f64, f64) = (-0.6, 0.6);
pub const FLAKE_SWAY_AMPLITUDE: (f64, f64) = (6.0, 20.0);
pub const FLAKE_SWAY_FREQUENCY: (f64, f64) = (0.002, 0.008);
pub const FLAKE_ROTATION_SPEED: (f64, f64) = (-0.02, 0.02);
pub const FLAKE_ALPHA: (f64, f64) = (0.7, 1.0);
pub const FLAKE_MIN_LINE_WIDTH: f64 = 1.0;
pub const FLAKE_LINE_WIDTH_SCALE: f64 = 0.18;
pub const FLAKE_DIAGONAL: f64 = 0.7;

// Ball ranges
pub const BALL_SIZE: (f64, f64) = (8.0, 18.0);
pub const BALL_SPAWN_Y: (f64, f64) = (-100.0, -20.0);
pub const BALL_SPEED: (f64, f64) = (1.8, 4.0);
pub const BALL_DRIFT: (f64, f64) = (-0.3, 0.3);
pub const BALL_SWAY_AMPLITUDE: (f64, f64) = (0.0, 6.0);
pub const BALL_SWAY_FREQUENCY: (f64, f64) = (0.001, 0.004);
pub const BALL_ALPHA: (f64, f64) = (0.85, 1.0);

// Decor
pub const STAR_COUNT: usize = 40;
pub const STAR_SIZE_PX: (f64, f64) = (2.0, 5.0);
pub const STAR_MAX_DELAY_S: f64 = 2.0;
pub const FLASH_PERIOD_MS: i32 = 1500;
pub const FLASH_PULSE_MS: i32 = 80;
pub const FLASH_OPACITY: &str = "0.8";
