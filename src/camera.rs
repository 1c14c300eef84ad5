//! Screen/room coordinate conversion.
//!
//! The plan is drawn at a fixed scale: one room meter is `pixels_per_meter`
//! screen pixels, with the room's top-left corner at `(origin_x, origin_y)` on
//! screen. Pointer positions and snap thresholds arrive in pixels and pass
//! through here before the engine sees them.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::PIXELS_PER_METER;

/// A point in either screen space (pixels) or room space (meters).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed-scale mapping between the plan on screen and the room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Screen x of the room's top-left corner, in pixels.
    pub origin_x: f64,
    /// Screen y of the room's top-left corner, in pixels.
    pub origin_y: f64,
    /// Screen pixels per room meter.
    pub pixels_per_meter: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, pixels_per_meter: PIXELS_PER_METER }
    }
}

impl Camera {
    /// Camera at the given scale with the room anchored at the screen origin.
    #[must_use]
    pub fn with_scale(pixels_per_meter: f64) -> Self {
        Self { pixels_per_meter, ..Self::default() }
    }

    /// Convert a screen-space point (pixels) to room coordinates (meters).
    #[must_use]
    pub fn screen_to_room(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.origin_x) / self.pixels_per_meter,
            y: (screen.y - self.origin_y) / self.pixels_per_meter,
        }
    }

    /// Convert a room-space point to screen coordinates.
    #[must_use]
    pub fn room_to_screen(&self, room: Point) -> Point {
        Point {
            x: room.x * self.pixels_per_meter + self.origin_x,
            y: room.y * self.pixels_per_meter + self.origin_y,
        }
    }

    /// Convert a screen-space distance (pixels) to meters.
    #[must_use]
    pub fn screen_dist_to_room(&self, screen_dist: f64) -> f64 {
        screen_dist / self.pixels_per_meter
    }
}
