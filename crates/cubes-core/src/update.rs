//! The per-frame state transition applied to every live cube.

use crate::constants::*;
use crate::cube::Cube;
use crate::scene::SceneObject;
use crate::tracking::PointerState;
use glam::{Vec2, Vec3};

/// Per-axis rotation added to cube `index` every frame (x, y); z never spins.
#[inline]
pub fn rotation_increment(index: usize) -> Vec2 {
    Vec2::new(
        ROT_X_BASE + (index % ROT_X_MODULUS) as f32 * ROT_X_STEP,
        ROT_Y_BASE + (index % ROT_Y_MODULUS) as f32 * ROT_Y_STEP,
    )
}

/// Where the pointer pulls cubes to, in world units (x, y only).
#[inline]
pub fn attraction_target(pointer: PointerState) -> Vec2 {
    Vec2::new(pointer.x, pointer.y) * POINTER_WORLD_SCALE
}

/// Close `ATTRACTION_SPEED` of the x/y gap to the pointer target; z is untouched.
#[inline]
pub fn attract(position: Vec3, pointer: PointerState) -> Vec3 {
    let target = attraction_target(pointer);
    Vec3::new(
        position.x + (target.x - position.x) * ATTRACTION_SPEED,
        position.y + (target.y - position.y) * ATTRACTION_SPEED,
        position.z,
    )
}

/// Project `position` back onto the sphere of radius `max` when it lies outside.
#[inline]
pub fn clamp_radius(position: Vec3, max: f32) -> Vec3 {
    let distance = position.length();
    if distance > max {
        position * (max / distance)
    } else {
        position
    }
}

/// Rotation, then attraction, then containment. The clamp must follow attraction.
#[inline]
pub fn step_cube(cube: &mut Cube, pointer: PointerState) {
    let spin = rotation_increment(cube.index);
    cube.rotation.x += spin.x;
    cube.rotation.y += spin.y;
    cube.position = clamp_radius(attract(cube.position, pointer), BOUND_RADIUS);
}

pub fn apply_frame<M>(objects: &mut [SceneObject<M>], pointer: PointerState) {
    for object in objects.iter_mut() {
        step_cube(&mut object.cube, pointer);
    }
}
