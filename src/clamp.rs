//! Boundary clamp: keep an item's effective footprint inside the room.
//!
//! Clamping is total. A footprint that fits the room is pushed back inside;
//! one wider or longer than the room is pinned to the minimum corner on that
//! axis. The stored origin is adjusted so that the *effective* (rotated) box
//! is what lands inside, which is why the offset from `geometry` is applied
//! on the way in and removed on the way out.

#[cfg(test)]
#[path = "clamp_test.rs"]
mod clamp_test;

use crate::camera::Point;
use crate::geometry::{Axis, effective_footprint, near_edge_offset};
use crate::layout::{FurnitureItem, Room};

/// Clamp a candidate stored origin for `item` so its effective footprint lies
/// within `room`.
#[must_use]
pub fn clamp_position(item: &FurnitureItem, candidate: Point, room: &Room) -> Point {
    let footprint = effective_footprint(item);
    Point::new(
        clamp_axis(candidate.x, near_edge_offset(item, Axis::X), footprint.width, room.width),
        clamp_axis(candidate.y, near_edge_offset(item, Axis::Y), footprint.depth, room.length),
    )
}

/// Clamp `item` at its own stored position.
#[must_use]
pub fn clamp_item(item: &FurnitureItem, room: &Room) -> FurnitureItem {
    item.moved_to(clamp_position(item, item.position(), room))
}

fn clamp_axis(origin: f64, offset: f64, extent: f64, span: f64) -> f64 {
    let min_near = 0.0;
    let max_near = (span - extent).max(min_near);
    let near = origin + offset;
    if near < min_near {
        min_near - offset
    } else if near > max_near {
        max_near - offset
    } else {
        origin
    }
}
