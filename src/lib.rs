#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Timed celebration overlay: spotlights, strobe, stars and a snow particle
//! engine drawn on a full-viewport canvas.

pub mod constants;
pub mod decor;
pub mod engine;
pub mod error;
pub mod launcher;
pub mod particle;
pub mod scheduler;
pub mod surface;

pub use engine::{Engine, FrameStats};
pub use error::OverlayError;
pub use launcher::{Launcher, OverlayHost};
pub use particle::{Kind, Particle};
pub use scheduler::{Clock, Scheduler, TargetMoment, Timer, Trigger};
pub use surface::DrawSurface;

// Only compile browser-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Window};

    use crate::constants::TARGET_MOMENT;
    use crate::error::OverlayError;
    use crate::launcher::{with_page, Launcher};
    use crate::scheduler::{when_ready, Scheduler};

    mod host;
    pub mod render;
    pub mod scaffold;

    pub use host::{local_epoch_ms, BrowserClock, BrowserHost, BrowserTimer};

    /// A launcher bound to the current page.
    pub fn launcher() -> Result<Launcher<BrowserHost>, OverlayError> {
        let window = web_sys::window().ok_or(OverlayError::NoWindow)?;
        let document = window.document().ok_or(OverlayError::NoDocument)?;
        Ok(Launcher::new(BrowserHost::new(window, document)))
    }

    fn arm(window: Window, launcher: Rc<RefCell<Launcher<BrowserHost>>>) {
        let scheduler = Scheduler::new(local_epoch_ms(&TARGET_MOMENT));
        let start = Box::new(move || {
            if let Err(err) = launcher.borrow_mut().start() {
                log::error!("overlay start failed: {err}");
            }
        });
        if let Err(err) = scheduler.arm(&BrowserClock, &mut BrowserTimer::new(window), start) {
            log::error!("could not schedule overlay: {err:?}");
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window();
        let document = window.as_ref().and_then(|w| w.document());
        with_page(window, document, |window: Window, document: Document| -> Result<(), JsValue> {
            let host = BrowserHost::new(window.clone(), document.clone());
            let launcher = Rc::new(RefCell::new(Launcher::new(host)));
            when_ready(&document, Box::new(move || arm(window, launcher)))?;
            Ok(())
        })
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
