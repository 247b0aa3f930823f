// Pointer normalization and viewport bookkeeping.

use cubes_core::{PointerState, ViewportState};

#[test]
fn pointer_normalizes_corners_and_centre() {
    let vp = ViewportState::new(800, 600);
    let centre = PointerState::from_pixels(400.0, 300.0, &vp);
    assert!(centre.x.abs() < 1e-6 && centre.y.abs() < 1e-6);

    let top_left = PointerState::from_pixels(0.0, 0.0, &vp);
    assert_eq!(top_left, PointerState { x: -1.0, y: 1.0 });

    let bottom_right = PointerState::from_pixels(800.0, 600.0, &vp);
    assert_eq!(bottom_right, PointerState { x: 1.0, y: -1.0 });
}

#[test]
fn pointer_outside_viewport_is_clamped() {
    let vp = ViewportState::new(100, 100);
    let p = PointerState::from_pixels(-50.0, 250.0, &vp);
    assert_eq!(p, PointerState { x: -1.0, y: -1.0 });
}

#[test]
fn empty_viewport_reads_as_centre() {
    let vp = ViewportState::new(0, 600);
    assert_eq!(PointerState::from_pixels(10.0, 10.0, &vp), PointerState::CENTER);
}

#[test]
fn resize_reports_changes_and_ignores_zero() {
    let mut vp = ViewportState::new(800, 600);
    assert!(!vp.resize(800, 600));
    assert!(!vp.resize(0, 300));
    assert_eq!(vp, ViewportState::new(800, 600));
    assert!(vp.resize(1920, 1080));
    assert!((vp.aspect() - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn aspect_falls_back_when_height_is_zero() {
    assert_eq!(ViewportState::new(640, 0).aspect(), 1.0);
}
