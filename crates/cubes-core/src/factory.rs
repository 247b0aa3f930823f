use crate::constants::*;
use crate::cube::Cube;
use crate::mesh::MeshDesc;
use crate::render::Renderer;
use crate::scene::{Scene, SceneObject};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// Point on a sphere of radius `r` from azimuth `theta` and polar angle `phi`.
#[inline]
pub fn spherical_to_cartesian(r: f32, theta: f32, phi: f32) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(r * sin_phi * cos_theta, r * sin_phi * sin_theta, r * cos_phi)
}

/// Produces randomized cube batches.
pub struct CubeFactory {
    rng: StdRng,
}

impl CubeFactory {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn sample_cube(&mut self, index: usize) -> Cube {
        let rng = &mut self.rng;
        let dimensions = Vec3::new(
            rng.gen::<f32>() * CUBE_SIZE_SPAN + CUBE_SIZE_MIN,
            rng.gen::<f32>() * CUBE_SIZE_SPAN + CUBE_SIZE_MIN,
            rng.gen::<f32>() * CUBE_SIZE_SPAN + CUBE_SIZE_MIN,
        );
        let color = Vec3::new(rng.gen(), rng.gen(), rng.gen());
        let theta = rng.gen::<f32>() * TAU;
        let phi = rng.gen::<f32>() * PI;
        let position = spherical_to_cartesian(SPAWN_RADIUS, theta, phi);
        let rotation = Vec3::new(
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
        );
        Cube {
            index,
            dimensions,
            color,
            position,
            rotation,
        }
    }

    /// Replace the scene's batch with `count` fresh cubes.
    ///
    /// Every mesh of the previous batch is disposed before the first new one
    /// is created, so at no point do two batches hold renderer resources.
    pub fn regenerate<R: Renderer>(
        &mut self,
        scene: &mut Scene<R::Mesh>,
        renderer: &mut R,
        count: usize,
    ) {
        let released = release_batch(scene, renderer);
        for index in 0..count {
            let cube = self.sample_cube(index);
            let mesh = renderer.create_mesh(&MeshDesc::for_cube(&cube));
            scene.add(SceneObject { cube, mesh });
        }
        log::debug!("[factory] released {} cubes, generated {}", released, count);
    }
}

/// Dispose every mesh of the live batch; returns how many were released.
pub fn release_batch<R: Renderer>(scene: &mut Scene<R::Mesh>, renderer: &mut R) -> usize {
    let old = scene.take_objects();
    let n = old.len();
    for object in old {
        renderer.dispose_mesh(object.mesh);
    }
    n
}
