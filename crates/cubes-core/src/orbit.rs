//! Damped orbit/zoom/pan camera controller.
//!
//! Input handlers only accumulate deltas; [`OrbitController::update`] applies a
//! `damping` fraction of them to the camera once per frame and decays the rest,
//! so motion eases out after the pointer is released.

use crate::camera::Camera;
use crate::constants::{ORBIT_DAMPING, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPS, ORBIT_ZOOM_BASE};
use crate::tracking::ViewportState;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct SphericalDelta {
    theta: f32,
    phi: f32,
}

#[derive(Clone, Debug)]
pub struct OrbitController {
    pub target: Vec3,
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    delta: SphericalDelta,
    pan_offset: Vec3,
    scale: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(ORBIT_DAMPING)
    }
}

impl OrbitController {
    pub fn new(damping: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            damping: damping.clamp(f32::EPSILON, 1.0),
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: f32::INFINITY,
            delta: SphericalDelta::default(),
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Drop pending motion and point back at the origin.
    pub fn reset(&mut self) {
        self.target = Vec3::ZERO;
        self.delta = SphericalDelta::default();
        self.pan_offset = Vec3::ZERO;
        self.scale = 1.0;
    }

    /// Pointer drag in pixels; a drag across the full viewport height is one turn.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport: &ViewportState) {
        let h = viewport.height.max(1) as f32;
        self.delta.theta -= TAU * dx_px * self.rotate_speed / h;
        self.delta.phi -= TAU * dy_px * self.rotate_speed / h;
    }

    /// Wheel steps; positive moves the camera closer.
    pub fn zoom(&mut self, steps: f32) {
        if steps.is_finite() {
            self.scale *= ORBIT_ZOOM_BASE.powf(steps * self.zoom_speed);
        }
    }

    /// Screen-space drag in pixels, converted to world units at the target's depth.
    pub fn pan(&mut self, dx_px: f32, dy_px: f32, camera: &Camera, viewport: &ViewportState) {
        let h = viewport.height.max(1) as f32;
        let target_distance = (camera.eye - self.target).length() * (camera.fovy_radians * 0.5).tan();
        let forward = (camera.target - camera.eye).normalize_or_zero();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward);
        let left_amount = 2.0 * dx_px * target_distance / h * self.pan_speed;
        let up_amount = 2.0 * dy_px * target_distance / h * self.pan_speed;
        self.pan_offset += -right * left_amount + up * up_amount;
    }

    /// Whether any pending motion remains to be applied.
    pub fn is_settled(&self) -> bool {
        self.delta.theta.abs() < 1e-6
            && self.delta.phi.abs() < 1e-6
            && self.pan_offset.length_squared() < 1e-12
            && (self.scale - 1.0).abs() < 1e-6
    }

    /// Apply one damped step to `camera`; returns true if the eye moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let before = camera.eye;
        let offset = camera.eye - self.target;
        let mut radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        theta += self.delta.theta * self.damping;
        phi += self.delta.phi * self.damping;
        phi = phi.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);

        self.target += self.pan_offset * self.damping;

        radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        let offset = Vec3::new(
            radius * sin_phi * sin_theta,
            radius * cos_phi,
            radius * sin_phi * cos_theta,
        );
        camera.eye = self.target + offset;
        camera.target = self.target;

        let keep = 1.0 - self.damping;
        self.delta.theta *= keep;
        self.delta.phi *= keep;
        self.pan_offset *= keep;
        self.scale = 1.0;

        (camera.eye - before).length_squared() > 1e-12
    }
}
