//! Rotation-aware footprint geometry.
//!
//! Only quarter-turn symmetry is modeled: an item whose rotation is a multiple
//! of 180° occupies `width × depth`, anything else occupies `depth × width`.
//! The rotated box is centered on the center of the stored (un-rotated) box,
//! which is the pivot the renderer rotates around.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::layout::{FurnitureItem, Room};

/// Tolerance for containment checks, absorbing grid-snap rounding.
const BOUNDS_EPSILON: f64 = 1e-9;

/// A room axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal; along the room's width.
    X,
    /// Vertical; along the room's length.
    Y,
}

impl Axis {
    /// The component of `p` along this axis.
    #[must_use]
    pub fn of(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// `p` with its component along this axis replaced by `value`.
    #[must_use]
    pub fn with(self, p: Point, value: f64) -> Point {
        match self {
            Self::X => Point::new(value, p.y),
            Self::Y => Point::new(p.x, value),
        }
    }
}

/// Width and depth of an item's axis-aligned extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub depth: f64,
}

impl Footprint {
    /// Extent along `axis`.
    #[must_use]
    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.depth,
        }
    }
}

/// Axis-aligned box in room coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Whether `p` lies inside or on the edge of the box.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Whether the box lies inside `[0, width] × [0, length]`.
    #[must_use]
    pub fn fits_within(&self, room: &Room) -> bool {
        self.left >= -BOUNDS_EPSILON
            && self.top >= -BOUNDS_EPSILON
            && self.right <= room.width + BOUNDS_EPSILON
            && self.bottom <= room.length + BOUNDS_EPSILON
    }
}

/// The item's extent after accounting for 90°-class rotation.
#[must_use]
pub fn effective_footprint(item: &FurnitureItem) -> Footprint {
    if item.rotation % 180.0 == 0.0 {
        Footprint { width: item.width, depth: item.depth }
    } else {
        Footprint { width: item.depth, depth: item.width }
    }
}

/// Distance from the stored origin to the near edge of the effective box
/// along `axis`. Zero for unrotated items.
#[must_use]
pub fn near_edge_offset(item: &FurnitureItem, axis: Axis) -> f64 {
    let stored = match axis {
        Axis::X => item.width,
        Axis::Y => item.depth,
    };
    (stored - effective_footprint(item).along(axis)) / 2.0
}

/// Effective box of `item` if its stored origin were at `origin`.
#[must_use]
pub fn bounds_at(item: &FurnitureItem, origin: Point) -> Bounds {
    let footprint = effective_footprint(item);
    let left = origin.x + near_edge_offset(item, Axis::X);
    let top = origin.y + near_edge_offset(item, Axis::Y);
    Bounds { left, top, right: left + footprint.width, bottom: top + footprint.depth }
}

/// Effective box of `item` at its stored position.
#[must_use]
pub fn bounds(item: &FurnitureItem) -> Bounds {
    bounds_at(item, item.position())
}

/// Near edge, center, and far edge of `item` along `axis`, with the stored
/// origin placed at `origin`.
#[must_use]
pub fn key_points_at(item: &FurnitureItem, origin: Point, axis: Axis) -> [f64; 3] {
    let extent = effective_footprint(item).along(axis);
    let near = axis.of(origin) + near_edge_offset(item, axis);
    [near, near + extent / 2.0, near + extent]
}

/// Near edge, center, and far edge of `item` along `axis` at its stored position.
#[must_use]
pub fn key_points(item: &FurnitureItem, axis: Axis) -> [f64; 3] {
    key_points_at(item, item.position(), axis)
}
