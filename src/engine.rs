//! Snow particle engine: spawn, advance, draw and recycle.

use std::f64::consts::PI;

use rand::Rng;

use crate::constants::*;
use crate::particle::{Kind, Particle};
use crate::surface::DrawSurface;

/// What happened during one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub spawned: usize,
    pub removed: usize,
    pub live: usize,
}

/// Owns the particle pool. Frame timing is supplied by the caller.
pub struct Engine<R> {
    particles: Vec<Particle>,
    rng: R,
    last_frame_ms: f64,
}

impl<R: Rng> Engine<R> {
    /// Creates an engine pre-filled with [`PREFILL_PARTICLES`] particles
    /// spread across a surface `width` wide. `start_ms` seeds the delta clock.
    pub fn new(mut rng: R, width: f64, start_ms: f64) -> Self {
        let mut particles = Vec::with_capacity(MAX_PARTICLES);
        for _ in 0..PREFILL_PARTICLES.min(MAX_PARTICLES) {
            particles.push(Particle::spawn(&mut rng, width));
        }
        Self {
            particles,
            rng,
            last_frame_ms: start_ms,
        }
    }

    /// An engine with no particles; used to seed exact scenarios.
    pub fn empty(rng: R, start_ms: f64) -> Self {
        Self {
            particles: Vec::with_capacity(MAX_PARTICLES),
            rng,
            last_frame_ms: start_ms,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.particles.len() >= MAX_PARTICLES
    }

    /// Adds `particle` unless the pool is full.
    pub fn insert(&mut self, particle: Particle) -> bool {
        if self.is_full() {
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Runs one animation callback at timestamp `now_ms`.
    pub fn frame<S: DrawSurface>(
        &mut self,
        now_ms: f64,
        surface: &mut S,
    ) -> Result<FrameStats, S::Error> {
        let delta = (now_ms - self.last_frame_ms) / NOMINAL_FRAME_MS;
        self.last_frame_ms = now_ms;
        self.step(delta, now_ms, surface)
    }

    /// Advances every particle by `delta` normalized ticks and draws it.
    pub fn step<S: DrawSurface>(
        &mut self,
        delta: f64,
        now_ms: f64,
        surface: &mut S,
    ) -> Result<FrameStats, S::Error> {
        let width = surface.width();
        let height = surface.height();
        let mut stats = FrameStats::default();

        surface.clear();

        if !self.is_full() && self.rng.gen::<f64>() < SPAWN_CHANCE {
            let particle = Particle::spawn(&mut self.rng, width);
            self.particles.push(particle);
            stats.spawned += 1;
        }

        // Reverse pass: a swap-removed slot is refilled from the already
        // visited tail, and replacements land past the cursor.
        let mut i = self.particles.len();
        while i > 0 {
            i -= 1;
            let p = &mut self.particles[i];
            p.advance(delta, now_ms);
            draw(p, surface)?;

            if p.is_outside(width, height) {
                self.particles.swap_remove(i);
                stats.removed += 1;
                if !self.is_full() {
                    let particle = Particle::spawn(&mut self.rng, width);
                    self.particles.push(particle);
                    stats.spawned += 1;
                }
            }
        }

        stats.live = self.particles.len();
        log::trace!(
            "snow frame: live={} spawned={} removed={}",
            stats.live,
            stats.spawned,
            stats.removed
        );
        Ok(stats)
    }
}

fn draw<S: DrawSurface>(p: &Particle, surface: &mut S) -> Result<(), S::Error> {
    surface.save();
    surface.set_alpha(p.alpha);
    let drawn = draw_shape(p, surface);
    surface.restore();
    drawn
}

fn draw_shape<S: DrawSurface>(p: &Particle, surface: &mut S) -> Result<(), S::Error> {
    surface.translate(p.x, p.y)?;
    match p.kind {
        Kind::Flake => {
            surface.rotate(p.rotation)?;
            let r = p.size;
            let d = r * FLAKE_DIAGONAL;
            surface.set_line_width((r * FLAKE_LINE_WIDTH_SCALE).max(FLAKE_MIN_LINE_WIDTH));
            surface.begin_path();
            surface.move_to(-r, 0.0);
            surface.line_to(r, 0.0);
            surface.move_to(0.0, -r);
            surface.line_to(0.0, r);
            surface.move_to(-d, -d);
            surface.line_to(d, d);
            surface.move_to(d, -d);
            surface.line_to(-d, d);
            surface.stroke_white();
        }
        Kind::Ball => {
            surface.begin_path();
            surface.arc(0.0, 0.0, p.size / 2.0, 0.0, 2.0 * PI)?;
            surface.fill_white();
        }
    }
    Ok(())
}
