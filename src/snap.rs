//! Snap engine: grid quantization followed by object-to-object alignment.
//!
//! A candidate origin first rounds to the nearest multiple of the grid unit.
//! The object pass then compares the moving item's near edge, center, and far
//! edge against the same three key points of every other item, one axis at a
//! time. For each sibling (in list order) the closest of the nine pairings is
//! taken; the first sibling whose closest pairing is strictly inside the
//! threshold wins that axis and produces a guide. The two axes are resolved
//! independently, so X and Y may align to different siblings.
//!
//! Guides live only as long as the gesture that produced them. The engine
//! replaces them on every pointer move and clears them on release.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::geometry::{Axis, key_points, key_points_at};
use crate::layout::FurnitureItem;

/// A full-span alignment line.
///
/// An `Axis::X` guide is a vertical line at `x = position` running the full
/// room length; an `Axis::Y` guide is a horizontal line at `y = position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub axis: Axis,
    pub position: f64,
}

/// Tuning for a snap pass, in room units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSettings {
    /// Grid spacing. Zero or negative disables the grid pass.
    pub grid: f64,
    /// Object-snap distance. A pairing snaps only when strictly closer.
    pub threshold: f64,
}

/// Corrected origin and the guides that explain the correction.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    pub position: Point,
    pub guides: Vec<Guide>,
}

impl SnapResult {
    /// Whether `axis` was aligned to a sibling.
    #[must_use]
    pub fn snapped(&self, axis: Axis) -> bool {
        self.guides.iter().any(|g| g.axis == axis)
    }
}

/// Round `value` to the nearest multiple of `unit`.
#[must_use]
pub fn snap_to_grid(value: f64, unit: f64) -> f64 {
    if unit > 0.0 { (value / unit).round() * unit } else { value }
}

/// Round both coordinates of `p` to the grid.
#[must_use]
pub fn snap_point_to_grid(p: Point, unit: f64) -> Point {
    Point::new(snap_to_grid(p.x, unit), snap_to_grid(p.y, unit))
}

/// Grid pass, then object pass against `items`. The moving item itself is
/// skipped when it appears in `items`.
#[must_use]
pub fn snap(moving: &FurnitureItem, candidate: Point, items: &[FurnitureItem], settings: SnapSettings) -> SnapResult {
    let gridded = snap_point_to_grid(candidate, settings.grid);
    snap_to_items(moving, gridded, items, settings.threshold)
}

/// Object pass only: align `moving`, placed at `candidate`, to its siblings.
#[must_use]
pub fn snap_to_items(moving: &FurnitureItem, candidate: Point, items: &[FurnitureItem], threshold: f64) -> SnapResult {
    let mut position = candidate;
    let mut guides = Vec::new();

    for axis in [Axis::X, Axis::Y] {
        let moving_points = key_points_at(moving, candidate, axis);
        for sibling in items.iter().filter(|item| item.id != moving.id) {
            let (delta, target) = closest_pairing(&moving_points, &key_points(sibling, axis));
            if delta.abs() < threshold {
                tracing::trace!(?axis, target, sibling = %sibling.id, "snapped to item");
                position = axis.with(position, axis.of(candidate) + delta);
                guides.push(Guide { axis, position: target });
                break;
            }
        }
    }

    SnapResult { position, guides }
}

/// Smallest signed shift that brings a moving key point onto a sibling key
/// point, and the sibling coordinate it lands on. Ties keep the first pairing.
fn closest_pairing(moving: &[f64; 3], sibling: &[f64; 3]) -> (f64, f64) {
    let mut best = (sibling[0] - moving[0], sibling[0]);
    for &m in moving {
        for &s in sibling {
            let delta = s - m;
            if delta.abs() < best.0.abs() {
                best = (delta, s);
            }
        }
    }
    best
}
