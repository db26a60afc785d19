//! DOM scaffolding: style sheet, overlay container and its decorations.

use rand::Rng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, Window};

use crate::constants::{FLASH_OPACITY, FLASH_PERIOD_MS, FLASH_PULSE_MS, STAR_COUNT};
use crate::decor::*;
use crate::error::OverlayError;

/// Elements of a built overlay that later setup steps need.
pub struct Overlay {
    pub flash: HtmlElement,
    pub canvas: HtmlCanvasElement,
}

pub fn inject_style(document: &Document) -> Result<(), OverlayError> {
    let head = document.head().ok_or(OverlayError::MissingElement("head"))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(STYLE_SHEET));
    head.append_child(&style)?;
    Ok(())
}

fn child(document: &Document, parent: &Element, class: &str) -> Result<Element, OverlayError> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    parent.append_child(&el)?;
    Ok(el)
}

fn html(el: Element) -> Result<HtmlElement, OverlayError> {
    el.dyn_into::<HtmlElement>()
        .map_err(|_| OverlayError::Js("element is not an HtmlElement".into()))
}

/// Appends the overlay with spotlights, flash layer, stars and the snow canvas.
pub fn build_overlay<R: Rng>(document: &Document, rng: &mut R) -> Result<Overlay, OverlayError> {
    let body = document.body().ok_or(OverlayError::MissingElement("body"))?;
    let container = document.create_element("div")?;
    container.set_class_name(OVERLAY_CLASS);
    body.append_child(&container)?;

    child(document, &container, SPOTLIGHT_CLASS)?;
    child(document, &container, SPOTLIGHT_BLUE_CLASS)?;
    let flash = html(child(document, &container, FLASH_CLASS)?)?;

    for _ in 0..STAR_COUNT {
        let star = html(child(document, &container, STAR_CLASS)?)?;
        let style = star.style();
        for (prop, value) in Star::random(rng).style_properties() {
            style.set_property(prop, &value)?;
        }
    }

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| OverlayError::Js("canvas element expected".into()))?;
    canvas.set_class_name(CANVAS_CLASS);
    container.append_child(&canvas)?;

    Ok(Overlay {
        flash,
        canvas,
    })
}

fn pulse(window: &Window, flash: &HtmlElement) -> Result<(), JsValue> {
    let style = flash.style();
    style.set_property("background", flash_color(js_sys::Math::random()))?;
    style.set_property("opacity", FLASH_OPACITY)?;

    let fade = {
        let flash = flash.clone();
        Closure::once_into_js(move || {
            if let Err(err) = flash.style().set_property("opacity", "0") {
                log::warn!("flash fade failed: {err:?}");
            }
        })
    };
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        fade.unchecked_ref(),
        FLASH_PULSE_MS,
    )?;
    Ok(())
}

/// Flashes the strobe layer in a random color every period.
pub fn start_strobe(window: &Window, flash: HtmlElement) -> Result<(), OverlayError> {
    let tick = {
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            if let Err(err) = pulse(&window, &flash) {
                log::warn!("strobe pulse failed: {err:?}");
            }
        }) as Box<dyn FnMut()>)
    };
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        FLASH_PERIOD_MS,
    )?;
    tick.forget();
    Ok(())
}
