//! Static decoration: style sheet, twinkling stars and strobe colors.

use rand::Rng;

use crate::constants::{STAR_MAX_DELAY_S, STAR_SIZE_PX};
use crate::particle::uniform;

pub const OVERLAY_CLASS: &str = "decor-overlay";
pub const SPOTLIGHT_CLASS: &str = "spotlight";
pub const SPOTLIGHT_BLUE_CLASS: &str = "spotlight blue";
pub const FLASH_CLASS: &str = "flash";
pub const STAR_CLASS: &str = "star";
pub const CANVAS_CLASS: &str = "snow-canvas";

pub const STYLE_SHEET: &str = r#"
.decor-overlay {
  position: fixed;
  top: 0;
  left: 0;
  width: 100vw;
  height: 100vh;
  pointer-events: none;
  overflow: hidden;
  z-index: 10000;
}

.spotlight {
  position: absolute;
  width: 30vw;
  height: 30vw;
  border-radius: 50%;
  background: radial-gradient(circle at 50% 50%, rgba(92, 201, 59, 0.5) 0%, transparent 60%);
  filter: blur(20px);
  animation: moveSpotlight 5s infinite ease-in-out;
}
.spotlight.blue {
  background: radial-gradient(circle at 50% 50%, rgba(65, 147, 201, 0.5) 0%, transparent 60%);
  animation-direction: alternate;
}
@keyframes moveSpotlight {
  0%   { transform: translate(-30vw, -30vw); }
  25%  { transform: translate(120vw, -30vw); }
  50%  { transform: translate(120vw, 120vw); }
  75%  { transform: translate(-30vw, 120vw); }
  100% { transform: translate(-30vw, -30vw); }
}

.flash {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  background: #ffffff;
  opacity: 0;
  pointer-events: none;
  transition: opacity 0.08s ease-in-out;
}

.star {
  position: absolute;
  background: #dedede;
  border-radius: 50%;
  opacity: 0;
  pointer-events: none;
  animation: twinkle 2s infinite ease-in-out;
}
@keyframes twinkle {
  0%, 100% { opacity: 0; }
  50%      { opacity: 1; }
}

.snow-canvas {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  z-index: 10003;
  pointer-events: none;
}
"#;

/// Placement of one twinkling star, in CSS units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub size_px: f64,
    pub left_vw: f64,
    pub top_vh: f64,
    pub delay_s: f64,
}

impl Star {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let size_px = uniform(rng, STAR_SIZE_PX);
        Self {
            size_px,
            left_vw: uniform(rng, (0.0, 100.0)),
            top_vh: uniform(rng, (0.0, 100.0)),
            delay_s: uniform(rng, (0.0, STAR_MAX_DELAY_S)),
        }
    }

    /// Inline `(property, value)` pairs for the star element.
    pub fn style_properties(&self) -> [(&'static str, String); 5] {
        [
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            ("left", format!("{}vw", self.left_vw)),
            ("top", format!("{}vh", self.top_vh)),
            ("animation-delay", format!("{}s", self.delay_s)),
        ]
    }
}

/// Strobe color for a uniform `roll` in `[0, 1)`.
pub fn flash_color(roll: f64) -> &'static str {
    if roll < 0.33 {
        "#ffffff"
    } else if roll < 0.66 {
        "rgba(92, 201, 59, 0.8)"
    } else {
        "rgba(65, 147, 201, 0.8)"
    }
}
