use rand::rngs::SmallRng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Window};

use super::render;
use super::scaffold::{self, Overlay};
use crate::error::OverlayError;
use crate::launcher::OverlayHost;
use crate::scheduler::{Clock, Page, TargetMoment, Timer};

pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

pub struct BrowserTimer {
    window: Window,
}

impl BrowserTimer {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Timer for BrowserTimer {
    type Error = JsValue;

    fn after(&mut self, delay_ms: i32, callback: Box<dyn FnOnce()>) -> Result<(), JsValue> {
        let cb = Closure::once_into_js(move || callback());
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)?;
        Ok(())
    }
}

impl Page for Document {
    type Error = JsValue;

    fn ready_state(&self) -> String {
        Document::ready_state(self)
    }

    fn on_content_loaded(&self, callback: Box<dyn FnOnce()>) -> Result<(), JsValue> {
        let cb = Closure::once_into_js(move || callback());
        self.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
    }
}

/// Epoch milliseconds of `moment` in the browser's local timezone.
pub fn local_epoch_ms(moment: &TargetMoment) -> f64 {
    js_sys::Date::new_with_year_month_day_hr_min_sec(
        moment.year,
        moment.month as i32 - 1,
        moment.day as i32,
        moment.hour as i32,
        moment.minute as i32,
        moment.second as i32,
    )
    .get_time()
}

/// Performs the overlay setup steps against the live document.
pub struct BrowserHost {
    window: Window,
    document: Document,
    rng: SmallRng,
    overlay: Option<Overlay>,
}

impl BrowserHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            rng: render::browser_rng(),
            overlay: None,
        }
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    fn built(&self) -> Result<&Overlay, OverlayError> {
        self.overlay
            .as_ref()
            .ok_or(OverlayError::MissingElement("overlay"))
    }
}

impl OverlayHost for BrowserHost {
    type Error = OverlayError;

    fn inject_style(&mut self) -> Result<(), OverlayError> {
        scaffold::inject_style(&self.document)
    }

    fn build_overlay(&mut self) -> Result<(), OverlayError> {
        let overlay = scaffold::build_overlay(&self.document, &mut self.rng)?;
        self.overlay = Some(overlay);
        Ok(())
    }

    fn start_strobe(&mut self) -> Result<(), OverlayError> {
        let flash = self.built()?.flash.clone();
        scaffold::start_strobe(&self.window, flash)
    }

    fn start_animation(&mut self) -> Result<(), OverlayError> {
        render::start(self.built()?.canvas.clone())
    }
}
