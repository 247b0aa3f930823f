// Frame update rule: rotation, pointer attraction and radial clamp.

use cubes_core::*;
use glam::{Vec2, Vec3};

fn cube_at(index: usize, position: Vec3) -> Cube {
    Cube {
        index,
        dimensions: Vec3::ONE,
        color: Vec3::splat(0.5),
        position,
        rotation: Vec3::ZERO,
    }
}

#[test]
fn rotation_increments_follow_index_pattern() {
    let expected = [
        (0.005, 0.010),
        (0.006, 0.011),
        (0.007, 0.012),
        (0.008, 0.010),
        (0.009, 0.011),
        (0.005, 0.012),
    ];
    for (i, (x, y)) in expected.iter().enumerate() {
        let inc = rotation_increment(i);
        assert!((inc.x - x).abs() < 1e-7, "x increment for index {i}");
        assert!((inc.y - y).abs() < 1e-7, "y increment for index {i}");
    }
}

#[test]
fn rotation_is_strictly_positive_regardless_of_pointer() {
    let pointers = [
        PointerState::CENTER,
        PointerState { x: 1.0, y: -1.0 },
        PointerState { x: -1.0, y: 1.0 },
    ];
    for pointer in pointers {
        for i in 0..60 {
            let mut cube = cube_at(i, Vec3::new(3.0, -2.0, 7.0));
            let before = cube.rotation;
            step_cube(&mut cube, pointer);
            assert!(cube.rotation.x > before.x);
            assert!(cube.rotation.y > before.y);
            assert_eq!(cube.rotation.z, before.z);
        }
    }
}

#[test]
fn attraction_moves_one_percent_toward_scaled_pointer() {
    let pointer = PointerState { x: 0.4, y: -0.6 };
    let pos = Vec3::new(2.0, 1.0, -3.0);
    let next = attract(pos, pointer);
    let target = Vec2::new(2.0, -3.0);
    assert!((next.x - (2.0 + (target.x - 2.0) * 0.01)).abs() < 1e-6);
    assert!((next.y - (1.0 + (target.y - 1.0) * 0.01)).abs() < 1e-6);
    assert_eq!(next.z, pos.z);
}

#[test]
fn attraction_strictly_reduces_distance_to_target() {
    let pointers = [
        PointerState { x: 0.9, y: 0.2 },
        PointerState { x: -0.3, y: -1.0 },
        PointerState::CENTER,
    ];
    let positions = [
        Vec3::new(4.0, 4.0, 4.0),
        Vec3::new(-8.0, 1.0, 2.0),
        Vec3::new(0.5, -9.0, 0.0),
    ];
    for pointer in pointers {
        let target = Vec2::new(pointer.x * 5.0, pointer.y * 5.0);
        for pos in positions {
            let before = (pos.truncate() - target).length();
            let after = (attract(pos, pointer).truncate() - target).length();
            assert!(after < before, "{after} !< {before}");
        }
    }
}

#[test]
fn attraction_at_target_stays_put() {
    let pointer = PointerState { x: 0.2, y: 0.4 };
    let pos = Vec3::new(1.0, 2.0, 5.0);
    assert_eq!(attract(pos, pointer), pos);
}

#[test]
fn clamp_snaps_to_boundary_sphere() {
    let outside = Vec3::new(12.0, 12.0, 12.0);
    let clamped = clamp_radius(outside, BOUND_RADIUS);
    assert!((clamped.length() - BOUND_RADIUS).abs() < 1e-4);
    assert!((clamped.normalize() - outside.normalize()).length() < 1e-6);

    let inside = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(clamp_radius(inside, BOUND_RADIUS), inside);
}

#[test]
fn step_clamps_after_attraction() {
    let mut cube = cube_at(0, Vec3::new(0.0, 0.0, 20.0));
    step_cube(&mut cube, PointerState { x: 1.0, y: 1.0 });
    assert!((cube.position.length() - BOUND_RADIUS).abs() < 1e-4);
    assert!(cube.position.x > 0.0 && cube.position.y > 0.0);
}

#[test]
fn positions_stay_bounded_over_many_frames() {
    let mut factory = CubeFactory::new(Some(11));
    let mut objects: Vec<SceneObject<()>> = (0..200)
        .map(|i| SceneObject {
            cube: factory.sample_cube(i),
            mesh: (),
        })
        .collect();
    let corners = [
        PointerState { x: 1.0, y: 1.0 },
        PointerState { x: -1.0, y: 1.0 },
        PointerState { x: -1.0, y: -1.0 },
        PointerState { x: 1.0, y: -1.0 },
    ];
    for frame in 0..2000 {
        apply_frame(&mut objects, corners[(frame / 250) % corners.len()]);
        for o in &objects {
            assert!(o.cube.position.length() <= BOUND_RADIUS + 1e-3);
        }
    }
}

#[test]
fn centred_pointer_shrinks_xy_by_one_percent() {
    let mut factory = CubeFactory::new(Some(50));
    let mut objects: Vec<SceneObject<()>> = (0..50)
        .map(|i| SceneObject {
            cube: factory.sample_cube(i),
            mesh: (),
        })
        .collect();
    let before: Vec<Vec3> = objects.iter().map(|o| o.cube.position).collect();
    apply_frame(&mut objects, PointerState::CENTER);
    for (o, b) in objects.iter().zip(before) {
        assert!((o.cube.position.x - b.x * 0.99).abs() < 1e-5);
        assert!((o.cube.position.y - b.y * 0.99).abs() < 1e-5);
        assert_eq!(o.cube.position.z, b.z);
    }
}
