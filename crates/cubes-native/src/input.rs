use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::NamedKey;

// Pixels of trackpad scroll that count as one wheel notch
const PIXELS_PER_WHEEL_STEP: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

/// Cursor bookkeeping for turning raw cursor moves into orbit drags.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerTracker {
    pub last: Option<(f32, f32)>,
    pub drag: Option<DragMode>,
    pub shift: bool,
}

impl PointerTracker {
    /// Record a cursor position; returns the drag delta when a button is held.
    pub fn moved(&mut self, x: f32, y: f32) -> Option<(DragMode, f32, f32)> {
        let prev = self.last.replace((x, y));
        match (self.drag, prev) {
            (Some(mode), Some((px, py))) => Some((mode, x - px, y - py)),
            _ => None,
        }
    }

    pub fn pressed(&mut self, button: MouseButton) {
        self.drag = match button {
            MouseButton::Left if self.shift => Some(DragMode::Pan),
            MouseButton::Left => Some(DragMode::Rotate),
            MouseButton::Right | MouseButton::Middle => Some(DragMode::Pan),
            _ => self.drag,
        };
    }

    pub fn released(&mut self, _button: MouseButton) {
        self.drag = None;
    }
}

/// Wheel notches, positive when scrolling away from the user (zoom in).
#[inline]
pub fn wheel_steps(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_WHEEL_STEP,
    }
}

/// Keyboard stand-in for the cube count slider: arrows move by 1 (10 with
/// Shift), PageUp/PageDown always by 10.
#[inline]
pub fn count_step_for_key(key: NamedKey, shift: bool) -> Option<i64> {
    let arrow_step = if shift { 10 } else { 1 };
    match key {
        NamedKey::ArrowUp | NamedKey::ArrowRight => Some(arrow_step),
        NamedKey::ArrowDown | NamedKey::ArrowLeft => Some(-arrow_step),
        NamedKey::PageUp => Some(10),
        NamedKey::PageDown => Some(-10),
        _ => None,
    }
}
