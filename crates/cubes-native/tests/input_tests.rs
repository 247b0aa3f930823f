// Host-side tests for the native input mapping.
// The crate is a binary, so the pure input module is included directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;
use winit::dpi::PhysicalPosition;
use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::NamedKey;

#[test]
fn cursor_moves_without_button_are_not_drags() {
    let mut t = PointerTracker::default();
    assert!(t.moved(10.0, 10.0).is_none());
    assert!(t.moved(20.0, 15.0).is_none());
}

#[test]
fn left_drag_rotates_and_reports_delta() {
    let mut t = PointerTracker::default();
    t.moved(10.0, 10.0);
    t.pressed(MouseButton::Left);
    let (mode, dx, dy) = t.moved(14.0, 7.0).unwrap();
    assert_eq!(mode, DragMode::Rotate);
    assert_eq!((dx, dy), (4.0, -3.0));

    t.released(MouseButton::Left);
    assert!(t.moved(20.0, 20.0).is_none());
}

#[test]
fn first_move_after_press_has_no_delta() {
    let mut t = PointerTracker::default();
    t.pressed(MouseButton::Left);
    assert!(t.moved(5.0, 5.0).is_none());
    assert!(t.moved(6.0, 5.0).is_some());
}

#[test]
fn right_button_and_shift_left_pan() {
    let mut t = PointerTracker::default();
    t.pressed(MouseButton::Right);
    assert_eq!(t.drag, Some(DragMode::Pan));
    t.released(MouseButton::Right);

    t.shift = true;
    t.pressed(MouseButton::Left);
    assert_eq!(t.drag, Some(DragMode::Pan));
}

#[test]
fn wheel_lines_and_pixels_map_to_steps() {
    assert_eq!(wheel_steps(MouseScrollDelta::LineDelta(0.0, 2.0)), 2.0);
    let px = wheel_steps(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -250.0)));
    assert!((px + 2.5).abs() < 1e-6);
}

#[test]
fn arrow_keys_step_count_and_shift_multiplies() {
    assert_eq!(count_step_for_key(NamedKey::ArrowUp, false), Some(1));
    assert_eq!(count_step_for_key(NamedKey::ArrowRight, false), Some(1));
    assert_eq!(count_step_for_key(NamedKey::ArrowDown, false), Some(-1));
    assert_eq!(count_step_for_key(NamedKey::ArrowLeft, true), Some(-10));
    assert_eq!(count_step_for_key(NamedKey::PageUp, false), Some(10));
    assert_eq!(count_step_for_key(NamedKey::Enter, false), None);
}

#[test]
fn shift_does_not_scale_page_keys() {
    assert_eq!(count_step_for_key(NamedKey::PageUp, true), Some(10));
    assert_eq!(count_step_for_key(NamedKey::PageDown, true), Some(-10));
    assert_eq!(count_step_for_key(NamedKey::ArrowUp, true), Some(10));
}
