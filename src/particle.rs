//! Snow particles: small rotating flakes and larger falling balls.

use std::f64::consts::PI;

use rand::Rng;

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Flake,
    Ball,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub kind: Kind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub vertical_speed: f64,
    pub drift: f64,
    pub sway_amplitude: f64,
    pub sway_frequency: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub alpha: f64,
}

/// `min + (max - min) * u` for `u` in `[0, 1)`. Degenerate ranges yield `min`.
#[inline]
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    min + (max - min) * rng.gen::<f64>()
}

impl Particle {
    /// Spawns a new particle above the top edge of a surface `width` wide.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f64) -> Self {
        if rng.gen::<f64>() < FLAKE_SHARE {
            Self::flake(rng, width)
        } else {
            Self::ball(rng, width)
        }
    }

    pub fn flake<R: Rng + ?Sized>(rng: &mut R, width: f64) -> Self {
        let x = uniform(rng, (0.0, width));
        let y = uniform(rng, FLAKE_SPAWN_Y);
        Self {
            kind: Kind::Flake,
            x,
            y,
            size: uniform(rng, FLAKE_SIZE),
            vertical_speed: uniform(rng, FLAKE_SPEED),
            drift: uniform(rng, FLAKE_DRIFT),
            sway_amplitude: uniform(rng, FLAKE_SWAY_AMPLITUDE),
            sway_frequency: uniform(rng, FLAKE_SWAY_FREQUENCY),
            rotation: uniform(rng, (0.0, 2.0 * PI)),
            rotation_speed: uniform(rng, FLAKE_ROTATION_SPEED),
            alpha: uniform(rng, FLAKE_ALPHA),
        }
    }

    pub fn ball<R: Rng + ?Sized>(rng: &mut R, width: f64) -> Self {
        let x = uniform(rng, (0.0, width));
        let y = uniform(rng, BALL_SPAWN_Y);
        Self {
            kind: Kind::Ball,
            x,
            y,
            size: uniform(rng, BALL_SIZE),
            vertical_speed: uniform(rng, BALL_SPEED),
            drift: uniform(rng, BALL_DRIFT),
            sway_amplitude: uniform(rng, BALL_SWAY_AMPLITUDE),
            sway_frequency: uniform(rng, BALL_SWAY_FREQUENCY),
            rotation: 0.0,
            rotation_speed: 0.0,
            alpha: uniform(rng, BALL_ALPHA),
        }
    }

    /// Moves the particle by one normalized tick. `now_ms` is the frame
    /// timestamp; the sway term mixes it with `y` on purpose.
    pub fn advance(&mut self, delta: f64, now_ms: f64) {
        self.y += self.vertical_speed * delta;
        let phase = (self.y + now_ms * SWAY_TIME_SCALE) * self.sway_frequency;
        self.x += self.drift * delta
            + phase.sin() * self.sway_amplitude * (delta * SWAY_DELTA_SCALE);
        self.rotation += self.rotation_speed * delta;
    }

    /// True once the particle has left the surface past a margin.
    pub fn is_outside(&self, width: f64, height: f64) -> bool {
        self.y - self.size > height + BOTTOM_MARGIN
            || self.x < -SIDE_MARGIN
            || self.x > width + SIDE_MARGIN
    }
}
