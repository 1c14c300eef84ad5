//! Furniture presets used to seed new items.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::layout::{Category, FurnitureItem};

/// A template for a new furniture item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurniturePreset {
    pub name: Cow<'static, str>,
    pub category: Category,
    pub width: f64,
    pub depth: f64,
    pub color: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_range: Option<f64>,
}

const fn preset(
    name: &'static str,
    category: Category,
    width: f64,
    depth: f64,
    color: &'static str,
    light_range: Option<f64>,
) -> FurniturePreset {
    FurniturePreset { name: Cow::Borrowed(name), category, width, depth, color: Cow::Borrowed(color), light_range }
}

/// Built-in presets, sizes in meters.
pub const DEFAULT_CATALOG: &[FurniturePreset] = &[
    preset("Double Bed", Category::Bed, 1.6, 2.0, "#C9A27E", None),
    preset("Single Bed", Category::Bed, 0.9, 2.0, "#C9A27E", None),
    preset("Dining Table", Category::Table, 1.6, 0.9, "#8B5A2B", None),
    preset("Desk", Category::Table, 1.2, 0.6, "#8B5A2B", None),
    preset("Chair", Category::Chair, 0.5, 0.5, "#A0522D", None),
    preset("Armchair", Category::Chair, 0.8, 0.8, "#A0522D", None),
    preset("Sofa", Category::Sofa, 2.0, 0.9, "#556B2F", None),
    preset("Wardrobe", Category::Wardrobe, 1.2, 0.6, "#6B4226", None),
    preset("Door", Category::Door, 0.9, 0.1, "#D2B48C", None),
    preset("Window", Category::Window, 1.2, 0.1, "#87CEEB", None),
    preset("Ceiling Light", Category::Light, 0.3, 0.3, "#FFD700", Some(2.0)),
    preset("Floor Lamp", Category::Light, 0.4, 0.4, "#FFD700", Some(1.5)),
];

/// Find a built-in preset by case-insensitive name.
#[must_use]
pub fn find_preset(name: &str) -> Option<&'static FurniturePreset> {
    DEFAULT_CATALOG.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl FurnitureItem {
    /// New unlocked, unrotated item with a fresh id, top-left corner at `at`.
    ///
    /// `light_range` is carried over only for lights.
    #[must_use]
    pub fn from_preset(preset: &FurniturePreset, at: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: preset.name.to_string(),
            category: preset.category,
            x: at.x,
            y: at.y,
            width: preset.width,
            depth: preset.depth,
            rotation: 0.0,
            color: preset.color.to_string(),
            locked: false,
            light_range: if preset.category == Category::Light { preset.light_range } else { None },
        }
    }
}
