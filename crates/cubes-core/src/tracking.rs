//! Latest pointer and viewport samples.
//!
//! Both are plain overwrite-on-update values: only the most recent sample
//! matters and events between frames are simply replaced.

/// Pointer position relative to the viewport centre, each axis in [-1, 1], y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const CENTER: PointerState = PointerState { x: 0.0, y: 0.0 };

    /// Normalize pixel coordinates measured from the viewport's top-left corner.
    pub fn from_pixels(px: f32, py: f32, viewport: &ViewportState) -> Self {
        if viewport.is_empty() {
            return Self::CENTER;
        }
        let x = (px / viewport.width as f32) * 2.0 - 1.0;
        let y = -(py / viewport.height as f32) * 2.0 + 1.0;
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }
}

/// Drawable size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
}

impl ViewportState {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0 {
            self.width as f32 / self.height as f32
        } else {
            1.0
        }
    }

    /// Returns true when the stored size actually changed. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || (width == self.width && height == self.height) {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }
}
