// Cube factory: batch size, spherical placement and disposal of the previous batch.

mod common;

use common::RecordingRenderer;
use cubes_core::*;
use std::f32::consts::PI;

#[test]
fn regenerate_produces_exact_count_on_spawn_sphere() {
    for count in [10usize, 50, 137, 200] {
        let mut factory = CubeFactory::new(Some(count as u64));
        let mut scene = Scene::new();
        let mut renderer = RecordingRenderer::default();
        factory.regenerate(&mut scene, &mut renderer, count);
        assert_eq!(scene.len(), count);
        assert_eq!(renderer.live.len(), count);
        for cube in scene.cubes() {
            let r = cube.position.length();
            assert!((r - SPAWN_RADIUS).abs() < 1e-4, "radius {r} for count {count}");
        }
    }
}

#[test]
fn sampled_cubes_respect_ranges() {
    let mut factory = CubeFactory::new(Some(7));
    for i in 0..500 {
        let cube = factory.sample_cube(i);
        assert_eq!(cube.index, i);
        for d in cube.dimensions.to_array() {
            assert!((0.5..=2.5).contains(&d), "dimension {d}");
        }
        for c in cube.color.to_array() {
            assert!((0.0..1.0).contains(&c), "color channel {c}");
        }
        for a in cube.rotation.to_array() {
            assert!((0.0..=PI).contains(&a), "rotation {a}");
        }
    }
}

#[test]
fn indices_are_batch_positions() {
    let mut factory = CubeFactory::new(Some(1));
    let mut scene = Scene::new();
    let mut renderer = RecordingRenderer::default();
    factory.regenerate(&mut scene, &mut renderer, 25);
    let indices: Vec<usize> = scene.cubes().map(|c| c.index).collect();
    assert_eq!(indices, (0..25).collect::<Vec<_>>());
}

#[test]
fn regenerate_replaces_instead_of_appending() {
    let mut factory = CubeFactory::new(Some(3));
    let mut scene = Scene::new();
    let mut renderer = RecordingRenderer::default();
    factory.regenerate(&mut scene, &mut renderer, 40);
    let old_meshes: Vec<u64> = scene.objects().iter().map(|o| o.mesh).collect();

    factory.regenerate(&mut scene, &mut renderer, 15);
    assert_eq!(scene.len(), 15);
    assert_eq!(renderer.live.len(), 15);
    assert_eq!(renderer.disposed, 40);
    for id in old_meshes {
        assert!(!renderer.live.contains(&id));
        assert!(scene.objects().iter().all(|o| o.mesh != id));
    }
}

#[test]
fn zero_count_yields_empty_batch() {
    let mut factory = CubeFactory::new(Some(9));
    let mut scene = Scene::new();
    let mut renderer = RecordingRenderer::default();
    factory.regenerate(&mut scene, &mut renderer, 12);
    factory.regenerate(&mut scene, &mut renderer, 0);
    assert!(scene.is_empty());
    assert!(renderer.live.is_empty());
}

#[test]
fn same_seed_same_batch() {
    let mut a = CubeFactory::new(Some(42));
    let mut b = CubeFactory::new(Some(42));
    for i in 0..10 {
        assert_eq!(a.sample_cube(i), b.sample_cube(i));
    }
}

#[test]
fn spherical_conversion_hits_poles_and_equator() {
    let north = spherical_to_cartesian(10.0, 0.0, 0.0);
    assert!((north - glam::Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
    let equator = spherical_to_cartesian(10.0, PI / 2.0, PI / 2.0);
    assert!((equator - glam::Vec3::new(0.0, 10.0, 0.0)).length() < 1e-4);
}

#[test]
fn old_batch_is_released_before_new_meshes_are_created() {
    let mut factory = CubeFactory::new(Some(5));
    let mut scene = Scene::new();
    let mut renderer = RecordingRenderer::default();
    factory.regenerate(&mut scene, &mut renderer, 40);
    assert_eq!(renderer.max_live, 40);

    factory.regenerate(&mut scene, &mut renderer, 15);
    assert_eq!(renderer.max_live, 40);

    factory.regenerate(&mut scene, &mut renderer, 60);
    assert_eq!(renderer.max_live, 60);
    assert_eq!(renderer.live.len(), 60);
}
