//! Frame scheduling primitives shared by the web and native frontends.

use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

/// Single-threaded cancellation flag shared between a loop and its owner.
///
/// Clones observe the same flag. Once cancelled it stays cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// What the scheduler should do after a frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Frame counter with a once-per-interval fps log line.
pub struct FrameStats {
    frames: u64,
    window_frames: u32,
    window_start: Instant,
    interval_sec: f32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl FrameStats {
    pub fn new(interval_sec: f32) -> Self {
        Self {
            frames: 0,
            window_frames: 0,
            window_start: Instant::now(),
            interval_sec,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Count one frame; returns the measured fps when an interval has elapsed.
    pub fn record(&mut self) -> Option<f32> {
        self.frames += 1;
        self.window_frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed < self.interval_sec {
            return None;
        }
        let fps = self.window_frames as f32 / elapsed.max(1e-3);
        self.window_frames = 0;
        self.window_start = Instant::now();
        log::debug!("[frame] {:.1} fps over {} frames", fps, self.frames);
        Some(fps)
    }
}
