use cubes_core::CubeCount;

// WheelEvent.deltaMode values
const DOM_DELTA_PIXEL: u32 = 0;
const DOM_DELTA_LINE: u32 = 1;
// Pixels of wheel travel that count as one notch
const PIXELS_PER_WHEEL_STEP: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

/// Active canvas drag: mode plus the last pointer position in backing pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub mode: DragMode,
    pub last: (f32, f32),
}

impl DragState {
    /// Advance to `(x, y)` and return the delta since the previous sample.
    pub fn advance(&mut self, x: f32, y: f32) -> (f32, f32) {
        let (px, py) = self.last;
        self.last = (x, y);
        (x - px, y - py)
    }
}

/// Map a `pointerdown` button to a drag: primary rotates (pans with Shift),
/// middle and secondary pan.
#[inline]
pub fn drag_mode_for_button(button: i16, shift: bool) -> Option<DragMode> {
    match button {
        0 if shift => Some(DragMode::Pan),
        0 => Some(DragMode::Rotate),
        1 | 2 => Some(DragMode::Pan),
        _ => None,
    }
}

/// Wheel notches, positive when scrolling up (zoom in).
#[inline]
pub fn wheel_steps(delta_y: f64, delta_mode: u32) -> f32 {
    let dy = delta_y as f32;
    match delta_mode {
        DOM_DELTA_PIXEL => -dy / PIXELS_PER_WHEEL_STEP,
        DOM_DELTA_LINE => -dy,
        // DOM_DELTA_PAGE
        _ => -dy * 10.0,
    }
}

/// Client (CSS) coordinates to backing-store pixels relative to the canvas.
#[inline]
pub fn client_to_canvas_px(client_x: f64, client_y: f64, left: f64, top: f64, dpr: f64) -> (f32, f32) {
    (((client_x - left) * dpr) as f32, ((client_y - top) * dpr) as f32)
}

/// Slider value to a count; unparsable input falls back to the default.
pub fn slider_count(value: &str) -> CubeCount {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => CubeCount::clamped(v.round() as i64),
        _ => CubeCount::default(),
    }
}

/// Inline style that hides an overlay regardless of author `display` rules
/// on its id or class.
pub const HIDDEN_STYLE: &str = "display:none !important";

pub fn count_label(count: CubeCount) -> String {
    format!("{} cubes", count.get())
}
