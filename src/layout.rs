//! Data model: the room, furniture items, and immutable layout values.
//!
//! A `Layout` is an ordered list of `FurnitureItem`s. Order is z-order only;
//! when two entries share an id the later one wins on lookup. Layouts are
//! treated as values: every mutation helper returns a new `Layout` and leaves
//! the receiver untouched, so a snapshot held by the history can never be
//! changed through another reference.
//!
//! `ItemPatch` is the sparse-update type used by the collaborator layer for
//! non-geometric edits (name, color, rotation, lock state, light range).
//! `Project` pairs a room with a layout and is the on-disk JSON shape read by
//! the command-line tool.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::geometry;

/// Unique identifier for a furniture item.
pub type ItemId = Uuid;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("room dimensions must be positive, got {width} x {length}")]
    InvalidRoom { width: f64, length: f64 },
    #[error("item {id} has non-positive size {width} x {depth}")]
    InvalidSize { id: ItemId, width: f64, depth: f64 },
    #[error("item {id} has non-positive light range {range}")]
    InvalidLightRange { id: ItemId, range: f64 },
    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),
    #[error("invalid project JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Interior dimensions of the room, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Extent along the x axis.
    pub width: f64,
    /// Extent along the y axis.
    pub length: f64,
}

impl Room {
    /// Build a room, rejecting non-positive (or NaN) dimensions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoom` unless both dimensions are strictly positive.
    pub fn new(width: f64, length: f64) -> Result<Self, LayoutError> {
        let room = Self { width, length };
        room.validate()?;
        Ok(room)
    }

    /// Check the positive-dimension invariant.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoom` unless both dimensions are strictly positive.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if is_positive(self.width) && is_positive(self.length) {
            Ok(())
        } else {
            Err(LayoutError::InvalidRoom { width: self.width, length: self.length })
        }
    }
}

/// What kind of furniture an item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bed,
    Table,
    Chair,
    Sofa,
    Wardrobe,
    Door,
    Window,
    /// Light source; the only category that uses `light_range`.
    Light,
    Custom,
}

/// A piece of furniture placed in the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Furniture kind.
    pub category: Category,
    /// Left edge of the un-rotated box, in meters.
    pub x: f64,
    /// Top edge of the un-rotated box, in meters.
    pub y: f64,
    /// Extent along x before rotation.
    pub width: f64,
    /// Extent along y before rotation.
    pub depth: f64,
    /// Clockwise rotation in degrees around the box center. Not normalized.
    pub rotation: f64,
    /// Display color; opaque to the engine.
    pub color: String,
    /// Locked items cannot be moved, resized, or rotated.
    #[serde(default)]
    pub locked: bool,
    /// Illuminated radius in meters, for lights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_range: Option<f64>,
}

impl FurnitureItem {
    /// Stored (pre-rotation) top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Copy of this item with its top-left corner moved to `pos`.
    #[must_use]
    pub fn moved_to(&self, pos: Point) -> Self {
        Self { x: pos.x, y: pos.y, ..self.clone() }
    }

    /// Copy of this item with a new stored size.
    #[must_use]
    pub fn resized_to(&self, width: f64, depth: f64) -> Self {
        Self { width, depth, ..self.clone() }
    }

    /// Check the per-item invariants that do not depend on the room.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` for a non-positive width or depth, and
    /// `InvalidLightRange` for a light range that is present but not positive.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !is_positive(self.width) || !is_positive(self.depth) {
            return Err(LayoutError::InvalidSize { id: self.id, width: self.width, depth: self.depth });
        }
        if let Some(range) = self.light_range {
            if !is_positive(range) {
                return Err(LayoutError::InvalidLightRange { id: self.id, range });
            }
        }
        Ok(())
    }
}

/// Sparse, non-positional update for an item. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Absolute rotation in degrees. Ignored while the item is locked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_range: Option<f64>,
}

impl ItemPatch {
    /// Apply this patch to a copy of `item`.
    ///
    /// The lock gate is evaluated against the item as it was before the patch,
    /// so a single patch cannot unlock and rotate at once.
    #[must_use]
    pub fn apply(&self, item: &FurnitureItem) -> FurnitureItem {
        let mut next = item.clone();
        if let Some(ref name) = self.name {
            next.name.clone_from(name);
        }
        if let Some(ref color) = self.color {
            next.color.clone_from(color);
        }
        if let Some(rotation) = self.rotation {
            if !item.locked {
                next.rotation = rotation;
            }
        }
        if let Some(locked) = self.locked {
            next.locked = locked;
        }
        if let Some(range) = self.light_range {
            if range > 0.0 {
                next.light_range = Some(range);
            }
        }
        next
    }
}

/// Ordered, immutable collection of furniture items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    items: Vec<FurnitureItem>,
}

impl Layout {
    #[must_use]
    pub fn new(items: Vec<FurnitureItem>) -> Self {
        Self { items }
    }

    /// All items in z-order (bottom first).
    #[must_use]
    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FurnitureItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id. The last entry wins when ids repeat.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&FurnitureItem> {
        self.items.iter().rev().find(|item| item.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// New layout with `item` replacing the entry that shares its id, keeping
    /// its z-order slot. Appends when no entry matches.
    #[must_use]
    pub fn with_item(&self, item: FurnitureItem) -> Self {
        let mut items = self.items.clone();
        match items.iter().rposition(|existing| existing.id == item.id) {
            Some(idx) => items[idx] = item,
            None => items.push(item),
        }
        Self { items }
    }

    /// New layout with `item` on top of the z-order.
    #[must_use]
    pub fn with_added(&self, item: FurnitureItem) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// New layout with every entry for `id` removed.
    #[must_use]
    pub fn without(&self, id: &ItemId) -> Self {
        Self { items: self.items.iter().filter(|item| item.id != *id).cloned().collect() }
    }

    /// Check item invariants and id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the first item error found, or `DuplicateId`.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            item.validate()?;
            if !seen.insert(item.id) {
                return Err(LayoutError::DuplicateId(item.id));
            }
        }
        Ok(())
    }

    /// Ids of items whose effective footprint leaves the room interior.
    #[must_use]
    pub fn out_of_bounds(&self, room: &Room) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| !geometry::bounds(item).fits_within(room))
            .map(|item| item.id)
            .collect()
    }
}

impl FromIterator<FurnitureItem> for Layout {
    fn from_iter<I: IntoIterator<Item = FurnitureItem>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a FurnitureItem;
    type IntoIter = std::slice::Iter<'a, FurnitureItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Strictly positive and not NaN.
fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// A room together with its furniture, as exchanged with the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub room: Room,
    #[serde(default)]
    pub items: Layout,
}

impl Project {
    /// Parse and validate a project from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON and any validation error from
    /// [`Project::validate`].
    pub fn from_json(text: &str) -> Result<Self, LayoutError> {
        let project: Self = serde_json::from_str(text)?;
        project.validate()?;
        Ok(project)
    }

    /// Check room and item invariants. Bounds are not checked here; see
    /// [`Layout::out_of_bounds`].
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.room.validate()?;
        self.items.validate()
    }
}
