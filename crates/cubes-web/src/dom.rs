use crate::input;
use cubes_core::{CubeCount, CUBE_COUNT_MAX, CUBE_COUNT_MIN};
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_ID: &str = "loading";
pub const SLIDER_ID: &str = "cube-count";
pub const SLIDER_LABEL_ID: &str = "cube-count-value";

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        let _ = el.set_attribute("style", input::HIDDEN_STYLE);
    }
}

pub fn slider(document: &web::Document) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(SLIDER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

/// Put the slider's range and value in sync with `count`.
pub fn init_slider(slider: &web::HtmlInputElement, count: CubeCount) {
    slider.set_min(&CUBE_COUNT_MIN.to_string());
    slider.set_max(&CUBE_COUNT_MAX.to_string());
    slider.set_step("1");
    slider.set_value(&count.get().to_string());
}

/// Reflect `count` on the slider and its label, whichever of them exist.
pub fn show_count(document: &web::Document, count: CubeCount) {
    if let Some(slider) = slider(document) {
        let value = count.get().to_string();
        if slider.value() != value {
            slider.set_value(&value);
        }
    }
    if let Some(label) = document.get_element_by_id(SLIDER_LABEL_ID) {
        label.set_text_content(Some(&input::count_label(count)));
    }
}
