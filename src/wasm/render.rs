use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::engine::Engine;
use crate::error::OverlayError;
use crate::surface::DrawSurface;

const WHITE: &str = "#ffffff";

/// Canvas-backed drawing surface.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, OverlayError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(OverlayError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| OverlayError::NoContext)?;
        Ok(Self { canvas, ctx })
    }
}

impl DrawSurface for CanvasSurface {
    type Error = JsValue;

    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.translate(x, y)
    }

    fn rotate(&mut self, angle: f64) -> Result<(), JsValue> {
        self.ctx.rotate(angle)
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        self.ctx.arc(x, y, radius, start, end)
    }

    fn stroke_white(&mut self) {
        self.ctx.set_stroke_style_str(WHITE);
        self.ctx.stroke();
    }

    fn fill_white(&mut self) {
        self.ctx.set_fill_style_str(WHITE);
        self.ctx.fill();
    }
}

/// Sets the canvas pixel size to the window's inner size.
pub fn fit_to_viewport(window: &Window, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    Ok(())
}

/// Seed drawn from `Math.random`, which needs no entropy feature on wasm.
pub fn browser_rng() -> SmallRng {
    let seed = js_sys::Math::random() * (1u64 << 53) as f64;
    SmallRng::seed_from_u64(seed as u64)
}

/// Sizes the canvas, keeps it synced on resize and runs the snow loop
/// until the page goes away.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), OverlayError> {
    let win = window().ok_or(OverlayError::NoWindow)?;
    fit_to_viewport(&win, &canvas)?;

    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Some(win) = window() {
                if let Err(err) = fit_to_viewport(&win, &canvas) {
                    log::warn!("canvas resize failed: {err:?}");
                }
            }
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let mut surface = CanvasSurface::new(canvas)?;
    let start_ms = win.performance().map(|p| p.now()).unwrap_or(0.0);
    let mut engine = Engine::new(browser_rng(), surface.width(), start_ms);
    log::info!(
        "snow engine started with {} particles on {}x{}",
        engine.len(),
        surface.width(),
        surface.height()
    );

    // `f` holds the frame closure so it can re-request itself each frame.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if let Err(err) = engine.frame(now, &mut surface) {
            log::warn!("snow frame failed: {err:?}");
        }

        let next = f.borrow();
        if let (Some(win), Some(cb)) = (window(), next.as_ref()) {
            if let Err(err) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("could not schedule snow frame: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
