//! Wall-distance measurement and its inverse.
//!
//! Distances use the stored (un-rotated) width and depth, not the rotated
//! footprint. Writing a distance back only solves for `x` or `y`; the caller
//! clamps and commits the result.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::layout::{FurnitureItem, Room};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty distance")]
    Empty,
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("distance must be a finite, non-negative number: {0:?}")]
    OutOfRange(String),
}

/// One of the four room walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    /// `y = 0`.
    Top,
    /// `y = room.length`.
    Bottom,
    /// `x = 0`.
    Left,
    /// `x = room.width`.
    Right,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Top, Wall::Bottom, Wall::Left, Wall::Right];
}

/// Gap between an item and each wall, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallDistances {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl WallDistances {
    #[must_use]
    pub fn get(&self, wall: Wall) -> f64 {
        match wall {
            Wall::Top => self.top,
            Wall::Bottom => self.bottom,
            Wall::Left => self.left,
            Wall::Right => self.right,
        }
    }
}

#[must_use]
pub fn wall_distances(item: &FurnitureItem, room: &Room) -> WallDistances {
    WallDistances {
        top: item.y,
        bottom: room.length - (item.y + item.depth),
        left: item.x,
        right: room.width - (item.x + item.width),
    }
}

/// Stored origin that puts `item` exactly `distance` from `wall`. The other
/// coordinate is left as it is.
#[must_use]
pub fn position_for_wall_distance(item: &FurnitureItem, room: &Room, wall: Wall, distance: f64) -> Point {
    match wall {
        Wall::Top => Point::new(item.x, distance),
        Wall::Bottom => Point::new(item.x, room.length - distance - item.depth),
        Wall::Left => Point::new(distance, item.y),
        Wall::Right => Point::new(room.width - distance - item.width, item.y),
    }
}

/// Parse a distance typed into an edit field.
///
/// # Errors
///
/// Rejects empty input, non-numeric text, and negative or non-finite values.
pub fn parse_distance(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_owned()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(InputError::OutOfRange(trimmed.to_owned()));
    }
    Ok(value)
}
