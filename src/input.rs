//! Input model: modifier keys, mouse buttons, and the gesture state machine.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up.
//! Each active variant carries the detached staged copy of the item being
//! edited plus whatever it needs to rebuild that copy on every move and to
//! decide on release whether anything actually changed.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::layout::{FurnitureItem, ItemId};
use crate::snap::Guide;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, named as the host reports it (e.g. `"ArrowLeft"`, `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self(name.to_owned())
    }

    /// Unit direction for an arrow key, or `None` for anything else.
    #[must_use]
    pub fn arrow_direction(&self) -> Option<(f64, f64)> {
        match self.0.as_str() {
            "ArrowLeft" => Some((-1.0, 0.0)),
            "ArrowRight" => Some((1.0, 0.0)),
            "ArrowUp" => Some((0.0, -1.0)),
            "ArrowDown" => Some((0.0, 1.0)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected item, if any.
    pub selected_id: Option<ItemId>,
    /// Alignment guides for the active gesture. Empty when idle.
    pub guides: Vec<Guide>,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving an item across the plan.
    DraggingItem {
        /// Id of the item being dragged.
        id: ItemId,
        /// Room-space pointer position at gesture start.
        start_room: Point,
        /// Item origin at gesture start; compared against on release.
        orig: Point,
        /// Working copy holding the latest snapped and clamped position.
        staged: FurnitureItem,
    },
    /// The user is dragging the bottom-right resize handle.
    ResizingItem {
        /// Id of the item being resized.
        id: ItemId,
        /// Width at gesture start.
        orig_width: f64,
        /// Depth at gesture start.
        orig_depth: f64,
        /// Working copy holding the latest floored and grid-snapped size.
        staged: FurnitureItem,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The staged working copy, if a gesture is active.
    #[must_use]
    pub fn staged(&self) -> Option<&FurnitureItem> {
        match self {
            Self::Idle => None,
            Self::DraggingItem { staged, .. } | Self::ResizingItem { staged, .. } => Some(staged),
        }
    }
}
