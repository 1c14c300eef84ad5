#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::layout::Category;

fn make_item(x: f64, y: f64, width: f64, depth: f64, rotation: f64) -> FurnitureItem {
    FurnitureItem {
        id: Uuid::new_v4(),
        name: "Desk".into(),
        category: Category::Table,
        x,
        y,
        width,
        depth,
        rotation,
        color: "#8B5A2B".into(),
        locked: false,
        light_range: None,
    }
}

fn footprint_of(rotation: f64) -> Footprint {
    effective_footprint(&make_item(0.0, 0.0, 2.0, 1.0, rotation))
}

// =============================================================
// Axis
// =============================================================

#[test]
fn axis_of_picks_component() {
    let p = Point::new(1.0, 2.0);
    assert_eq!(Axis::X.of(p), 1.0);
    assert_eq!(Axis::Y.of(p), 2.0);
}

#[test]
fn axis_with_replaces_only_its_component() {
    let p = Point::new(1.0, 2.0);
    assert_eq!(Axis::X.with(p, 5.0), Point::new(5.0, 2.0));
    assert_eq!(Axis::Y.with(p, 5.0), Point::new(1.0, 5.0));
}

// =============================================================
// Effective footprint
// =============================================================

#[test]
fn footprint_unrotated_is_stored_size() {
    assert_eq!(footprint_of(0.0), Footprint { width: 2.0, depth: 1.0 });
}

#[test]
fn footprint_half_turn_is_stored_size() {
    assert_eq!(footprint_of(180.0), Footprint { width: 2.0, depth: 1.0 });
    assert_eq!(footprint_of(-180.0), Footprint { width: 2.0, depth: 1.0 });
    assert_eq!(footprint_of(540.0), Footprint { width: 2.0, depth: 1.0 });
}

#[test]
fn footprint_quarter_turns_swap() {
    let zero = footprint_of(0.0);
    let ninety = footprint_of(90.0);
    let two_seventy = footprint_of(270.0);
    assert_eq!(ninety, two_seventy);
    assert_eq!(ninety, Footprint { width: zero.depth, depth: zero.width });
}

#[test]
fn footprint_negative_quarter_turn_swaps() {
    assert_eq!(footprint_of(-90.0), Footprint { width: 1.0, depth: 2.0 });
}

#[test]
fn footprint_off_quarter_angle_still_swaps() {
    // Only multiples of 180 keep the stored orientation.
    assert_eq!(footprint_of(45.0), Footprint { width: 1.0, depth: 2.0 });
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_unrotated_match_stored_box() {
    let item = make_item(1.0, 2.0, 2.0, 1.0, 0.0);
    let b = bounds(&item);
    assert_eq!(b, Bounds { left: 1.0, top: 2.0, right: 3.0, bottom: 3.0 });
}

#[test]
fn bounds_rotated_pivot_on_center() {
    // 2 x 1 at (1, 2): center (2, 2.5). Rotated extent 1 x 2.
    let item = make_item(1.0, 2.0, 2.0, 1.0, 90.0);
    let b = bounds(&item);
    assert_eq!(b, Bounds { left: 1.5, top: 1.5, right: 2.5, bottom: 3.5 });
    assert_eq!(b.center(), Point::new(2.0, 2.5));
}

#[test]
fn bounds_at_uses_given_origin() {
    let item = make_item(1.0, 2.0, 2.0, 1.0, 0.0);
    let b = bounds_at(&item, Point::new(0.0, 0.0));
    assert_eq!(b.left, 0.0);
    assert_eq!(b.bottom, 1.0);
}

#[test]
fn bounds_contains_edges() {
    let b = Bounds { left: 0.0, top: 0.0, right: 1.0, bottom: 1.0 };
    assert!(b.contains(Point::new(0.0, 0.0)));
    assert!(b.contains(Point::new(1.0, 1.0)));
    assert!(!b.contains(Point::new(1.01, 0.5)));
}

#[test]
fn bounds_fits_within_room() {
    let room = Room { width: 3.0, length: 2.0 };
    assert!(Bounds { left: 0.0, top: 0.0, right: 3.0, bottom: 2.0 }.fits_within(&room));
    assert!(!Bounds { left: -0.1, top: 0.0, right: 1.0, bottom: 1.0 }.fits_within(&room));
    assert!(!Bounds { left: 2.5, top: 0.0, right: 3.5, bottom: 1.0 }.fits_within(&room));
}

#[test]
fn bounds_fits_within_tolerates_rounding() {
    let room = Room { width: 3.0, length: 2.0 };
    let b = Bounds { left: 0.0, top: 0.0, right: 3.0 + 1e-12, bottom: 2.0 };
    assert!(b.fits_within(&room));
}

// =============================================================
// Key points
// =============================================================

#[test]
fn key_points_unrotated() {
    let item = make_item(1.0, 2.0, 2.0, 1.0, 0.0);
    assert_eq!(key_points(&item, Axis::X), [1.0, 2.0, 3.0]);
    assert_eq!(key_points(&item, Axis::Y), [2.0, 2.5, 3.0]);
}

#[test]
fn key_points_rotated_use_effective_footprint() {
    let item = make_item(1.0, 2.0, 2.0, 1.0, 90.0);
    assert_eq!(key_points(&item, Axis::X), [1.5, 2.0, 2.5]);
    assert_eq!(key_points(&item, Axis::Y), [1.5, 2.5, 3.5]);
}

#[test]
fn key_points_at_candidate_origin() {
    let item = make_item(1.0, 2.0, 1.0, 1.0, 0.0);
    assert_eq!(key_points_at(&item, Point::new(4.0, 0.0), Axis::X), [4.0, 4.5, 5.0]);
}

#[test]
fn near_edge_offset_zero_when_unrotated() {
    let item = make_item(0.3, 0.7, 1.3, 0.4, 0.0);
    assert_eq!(near_edge_offset(&item, Axis::X), 0.0);
    assert_eq!(near_edge_offset(&item, Axis::Y), 0.0);
}
