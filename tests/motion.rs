use std::convert::Infallible;

use celebration_overlay::constants::{MAX_PARTICLES, NOMINAL_FRAME_MS, PREFILL_PARTICLES};
use celebration_overlay::{DrawSurface, Engine, Kind, Particle};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Surface that only reports its size.
struct Blank {
    width: f64,
    height: f64,
}

impl DrawSurface for Blank {
    type Error = Infallible;

    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
    fn clear(&mut self) {}
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn set_alpha(&mut self, _: f64) {}
    fn translate(&mut self, _: f64, _: f64) -> Result<(), Infallible> {
        Ok(())
    }
    fn rotate(&mut self, _: f64) -> Result<(), Infallible> {
        Ok(())
    }
    fn set_line_width(&mut self, _: f64) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _: f64, _: f64) {}
    fn line_to(&mut self, _: f64, _: f64) {}
    fn arc(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64) -> Result<(), Infallible> {
        Ok(())
    }
    fn stroke_white(&mut self) {}
    fn fill_white(&mut self) {}
}

fn marker(x: f64) -> Particle {
    Particle {
        kind: Kind::Ball,
        x,
        y: 0.0,
        size: 10.0,
        vertical_speed: 3.0,
        drift: 0.25,
        sway_amplitude: 0.0,
        sway_frequency: 0.002,
        rotation: 0.0,
        rotation_speed: 0.0,
        alpha: 0.9,
    }
}

#[test]
fn fall_distance_ignores_frame_rate() {
    let mut surface = Blank { width: 1920.0, height: 1080.0 };

    let mut at_60 = Engine::empty(SmallRng::seed_from_u64(1), 0.0);
    at_60.insert(marker(777.0));
    let mut at_30 = Engine::empty(SmallRng::seed_from_u64(1), 0.0);
    at_30.insert(marker(777.0));

    for i in 1..=60 {
        at_60.frame(i as f64 * NOMINAL_FRAME_MS, &mut surface).unwrap();
    }
    for i in 1..=30 {
        at_30.frame(i as f64 * 2.0 * NOMINAL_FRAME_MS, &mut surface).unwrap();
    }

    let a = at_60.particles().iter().find(|p| p.size == 10.0 && p.alpha == 0.9).unwrap();
    let b = at_30.particles().iter().find(|p| p.size == 10.0 && p.alpha == 0.9).unwrap();
    assert!((a.y - 180.0).abs() < 1e-6);
    assert!((a.y - b.y).abs() < 1e-6);
    assert!((a.x - b.x).abs() < 1e-6);
}

#[test]
fn long_run_respects_cap_and_bounds() {
    let mut surface = Blank { width: 800.0, height: 600.0 };
    let mut engine = Engine::new(SmallRng::seed_from_u64(99), surface.width, 0.0);
    assert_eq!(engine.len(), PREFILL_PARTICLES);

    for i in 1..=2_000 {
        engine.frame(i as f64 * NOMINAL_FRAME_MS, &mut surface).unwrap();
        assert!(engine.len() <= MAX_PARTICLES);
        for p in engine.particles() {
            assert!(!p.is_outside(surface.width, surface.height));
        }
    }

    // Shrinking the surface pushes particles out; they must be gone next frame.
    surface.width = 100.0;
    surface.height = 100.0;
    engine.frame(2_001.0 * NOMINAL_FRAME_MS, &mut surface).unwrap();
    for p in engine.particles() {
        assert!(!p.is_outside(surface.width, surface.height));
    }
}
