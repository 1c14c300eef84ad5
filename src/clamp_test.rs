#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::geometry::bounds;
use crate::layout::Category;

fn make_item(x: f64, y: f64, width: f64, depth: f64, rotation: f64) -> FurnitureItem {
    FurnitureItem {
        id: Uuid::new_v4(),
        name: "Sofa".into(),
        category: Category::Sofa,
        x,
        y,
        width,
        depth,
        rotation,
        color: "#556B2F".into(),
        locked: false,
        light_range: None,
    }
}

fn room(width: f64, length: f64) -> Room {
    Room { width, length }
}

// =============================================================
// Basic clamping
// =============================================================

#[test]
fn inside_position_is_unchanged() {
    let item = make_item(0.0, 0.0, 1.0, 1.0, 0.0);
    let p = clamp_position(&item, Point::new(1.3, 0.7), &room(3.0, 3.0));
    assert_eq!(p, Point::new(1.3, 0.7));
}

#[test]
fn negative_position_clamps_to_zero() {
    let item = make_item(0.0, 0.0, 1.0, 1.0, 0.0);
    let p = clamp_position(&item, Point::new(-0.5, -0.5), &room(3.0, 3.0));
    assert_eq!(p, Point::new(0.0, 0.0));
}

#[test]
fn far_edge_clamps_to_room_minus_size() {
    let item = make_item(0.0, 0.0, 1.0, 0.5, 0.0);
    let p = clamp_position(&item, Point::new(10.0, 10.0), &room(3.0, 2.0));
    assert_eq!(p, Point::new(2.0, 1.5));
}

#[test]
fn axes_clamp_independently() {
    let item = make_item(0.0, 0.0, 1.0, 1.0, 0.0);
    let p = clamp_position(&item, Point::new(-1.0, 1.25), &room(3.0, 3.0));
    assert_eq!(p, Point::new(0.0, 1.25));
}

#[test]
fn oversize_footprint_pins_to_minimum_corner() {
    let item = make_item(0.0, 0.0, 5.0, 1.0, 0.0);
    let p = clamp_position(&item, Point::new(2.0, 0.5), &room(3.0, 3.0));
    assert_eq!(p, Point::new(0.0, 0.5));
}

// =============================================================
// Rotation awareness
// =============================================================

#[test]
fn rotated_item_clamps_effective_box() {
    // 2 x 1 rotated 90: effective 1 x 2, origin offset (+0.5, -0.5).
    let item = make_item(0.0, 0.0, 2.0, 1.0, 90.0);
    let p = clamp_position(&item, Point::new(-2.0, -2.0), &room(4.0, 4.0));
    assert_eq!(p, Point::new(-0.5, 0.5));
    let placed = item.moved_to(p);
    let b = bounds(&placed);
    assert_eq!(b.left, 0.0);
    assert_eq!(b.top, 0.0);
}

#[test]
fn rotated_item_far_edge() {
    let item = make_item(0.0, 0.0, 2.0, 1.0, 90.0);
    let p = clamp_position(&item, Point::new(10.0, 10.0), &room(4.0, 4.0));
    let b = bounds(&item.moved_to(p));
    assert_eq!(b.right, 4.0);
    assert_eq!(b.bottom, 4.0);
}

#[test]
fn rotation_lets_long_item_fit_narrow_room() {
    // 3 x 1 item in a 2 x 4 room only fits when turned.
    let item = make_item(0.0, 0.0, 3.0, 1.0, 90.0);
    let r = room(2.0, 4.0);
    let placed = clamp_item(&item, &r);
    assert!(bounds(&placed).fits_within(&r));
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn clamp_is_idempotent() {
    let r = room(4.5, 5.0);
    let candidates = [(-3.0, 2.0), (1.2, 7.7), (4.4, -0.1), (2.0, 2.0), (9.9, 9.9)];
    for rotation in [0.0, 90.0, 180.0, 270.0] {
        let item = make_item(0.0, 0.0, 1.7, 0.9, rotation);
        for (x, y) in candidates {
            let once = clamp_position(&item, Point::new(x, y), &r);
            let twice = clamp_position(&item, once, &r);
            assert_eq!(once, twice, "rotation {rotation} candidate ({x}, {y})");
        }
    }
}

#[test]
fn clamp_result_always_fits_when_footprint_fits() {
    let r = room(3.0, 2.5);
    let item = make_item(0.0, 0.0, 1.25, 0.75, 90.0);
    for (x, y) in [(-5.0, -5.0), (5.0, 5.0), (1.0, -1.0), (-1.0, 1.0)] {
        let p = clamp_position(&item, Point::new(x, y), &r);
        assert!(bounds(&item.moved_to(p)).fits_within(&r));
    }
}

#[test]
fn clamp_item_moves_to_clamped_position() {
    let item = make_item(-1.0, 4.0, 1.0, 1.0, 0.0);
    let clamped = clamp_item(&item, &room(3.0, 3.0));
    assert_eq!(clamped.position(), Point::new(0.0, 2.0));
    assert_eq!(clamped.width, 1.0);
}
