#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::geometry::bounds;
use crate::layout::{FurnitureItem, ItemId, Layout};

/// Which part of an item was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub item_id: ItemId,
    pub part: HitPart,
}

/// Room-space position of the resize handle: the un-rotated bottom-right corner.
#[must_use]
pub fn resize_handle(item: &FurnitureItem) -> Point {
    Point::new(item.x + item.width, item.y + item.depth)
}

/// Test which item (if any) is under `room_pt`.
///
/// The selected item's resize handle is checked first, using a screen-space
/// radius so the slop does not change with scale. Bodies are then checked
/// top-most first against their effective (rotated) footprint.
#[must_use]
pub fn hit_test(
    room_pt: Point,
    layout: &Layout,
    camera: &Camera,
    selected_id: Option<ItemId>,
    handle_radius_px: f64,
) -> Option<Hit> {
    if let Some(item) = selected_id.and_then(|id| layout.get(&id)) {
        let handle = resize_handle(item);
        let radius = camera.screen_dist_to_room(handle_radius_px);
        if (room_pt.x - handle.x).hypot(room_pt.y - handle.y) <= radius {
            return Some(Hit { item_id: item.id, part: HitPart::ResizeHandle });
        }
    }

    layout
        .iter()
        .rev()
        .find(|item| bounds(item).contains(room_pt))
        .map(|item| Hit { item_id: item.id, part: HitPart::Body })
}
