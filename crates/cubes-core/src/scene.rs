//! The scene container: background, lights and the live cube batch.

use crate::constants::*;
use crate::cube::Cube;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

/// Light coming from `position` toward the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing from the scene toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lights {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Vec3::ONE,
                intensity: AMBIENT_INTENSITY,
            },
            directional: DirectionalLight {
                color: Vec3::ONE,
                intensity: DIRECTIONAL_INTENSITY,
                position: DIRECTIONAL_POSITION,
            },
        }
    }
}

/// A cube paired with the renderer-owned mesh (geometry + material) drawing it.
#[derive(Debug)]
pub struct SceneObject<M> {
    pub cube: Cube,
    pub mesh: M,
}

#[derive(Debug)]
pub struct Scene<M> {
    /// Linear RGB clear color.
    pub background: Vec3,
    pub lights: Lights,
    objects: Vec<SceneObject<M>>,
}

impl<M> Default for Scene<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Scene<M> {
    pub fn new() -> Self {
        Self {
            background: hex_to_linear(BACKGROUND_SRGB),
            lights: Lights::default(),
            objects: Vec::new(),
        }
    }

    pub fn add(&mut self, object: SceneObject<M>) {
        self.objects.push(object);
    }

    /// Detach the whole batch so its meshes can be disposed.
    pub fn take_objects(&mut self) -> Vec<SceneObject<M>> {
        std::mem::take(&mut self.objects)
    }

    pub fn objects(&self) -> &[SceneObject<M>] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [SceneObject<M>] {
        &mut self.objects
    }

    pub fn cubes(&self) -> impl Iterator<Item = &Cube> {
        self.objects.iter().map(|o| &o.cube)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` in sRGB to linear RGB.
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
}
