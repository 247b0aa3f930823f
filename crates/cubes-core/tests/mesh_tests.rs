// Box geometry built for every cube mesh.

use cubes_core::*;
use glam::Vec3;

#[test]
fn box_has_four_vertices_per_face() {
    let geo = box_geometry(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(geo.vertices.len(), 24);
    assert_eq!(geo.indices.len(), 36);
    assert!(geo.indices.iter().all(|&i| (i as usize) < geo.vertices.len()));
}

#[test]
fn box_extents_match_half_dimensions() {
    let dims = Vec3::new(0.6, 1.4, 2.2);
    let geo = box_geometry(dims);
    let mut max = Vec3::splat(f32::MIN);
    let mut min = Vec3::splat(f32::MAX);
    for v in &geo.vertices {
        let p = Vec3::from(v.position);
        max = max.max(p);
        min = min.min(p);
    }
    assert!((max - dims * 0.5).length() < 1e-6);
    assert!((min + dims * 0.5).length() < 1e-6);
}

#[test]
fn triangles_wind_counter_clockwise_around_face_normals() {
    let geo = box_geometry(Vec3::ONE);
    for tri in geo.indices.chunks(3) {
        let a = Vec3::from(geo.vertices[tri[0] as usize].position);
        let b = Vec3::from(geo.vertices[tri[1] as usize].position);
        let c = Vec3::from(geo.vertices[tri[2] as usize].position);
        let n = Vec3::from(geo.vertices[tri[0] as usize].normal);
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}

#[test]
fn mesh_desc_carries_cube_material() {
    let cube = Cube {
        index: 3,
        dimensions: Vec3::new(1.0, 1.5, 2.0),
        color: Vec3::new(0.1, 0.2, 0.3),
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };
    let desc = MeshDesc::for_cube(&cube);
    assert_eq!(desc.dimensions, cube.dimensions);
    assert_eq!(desc.color, cube.color);
    assert_eq!(desc.shininess, SHININESS);
    assert_eq!(desc.specular, Vec3::ONE);
}

#[test]
fn background_is_linearized() {
    let bg = hex_to_linear(BACKGROUND_SRGB);
    // 0x11 / 255 in sRGB is roughly 0.0056 linear
    assert!((bg.x - 0.005_605).abs() < 1e-4);
    assert!(bg.z > bg.y && bg.y > bg.x);
}
