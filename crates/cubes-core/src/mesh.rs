//! CPU-side box geometry and the per-cube material description handed to the renderer.

use crate::constants::{SHININESS, SPECULAR};
use crate::cube::Cube;
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Everything the renderer needs to build one cube's geometry and material.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshDesc {
    pub dimensions: Vec3,
    pub color: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl MeshDesc {
    pub fn for_cube(cube: &Cube) -> Self {
        Self {
            dimensions: cube.dimensions,
            color: cube.color,
            specular: SPECULAR,
            shininess: SHININESS,
        }
    }
}

pub struct BoxGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

// (normal, u axis, v axis) per face; u x v == normal so winding is counter-clockwise.
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Axis-aligned box centred on the origin with flat per-face normals.
pub fn box_geometry(dimensions: Vec3) -> BoxGeometry {
    let half = dimensions * 0.5;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, u, v) in FACES {
        let n = Vec3::from(normal);
        let u = Vec3::from(u);
        let v = Vec3::from(v);
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (n + u * su + v * sv) * half;
            vertices.push(Vertex {
                position: p.to_array(),
                normal,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    BoxGeometry { vertices, indices }
}
