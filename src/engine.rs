//! Interaction engine: drag, resize, keyboard nudges, and edits over a history.
//!
//! `EngineCore` owns the committed history and the active gesture. Each
//! history entry is a [`Snapshot`] of the room and its layout, so undo and
//! redo restore both together. Pointer and key handlers return `Action`s for
//! the host to process; the engine never performs I/O. Committed state only
//! changes through `commit_snapshot`, and `ItemsChanged` and
//! `DimensionsChanged` are emitted exactly when the layout or room differs
//! from the previous entry. While a gesture is active the staged copy lives
//! in `InputState` and the committed layout is left untouched.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;

use crate::camera::{Camera, Point};
use crate::catalog::FurniturePreset;
use crate::clamp::{clamp_item, clamp_position};
use crate::config::EngineConfig;
use crate::history::{History, HistoryPosition, Snapshot};
use crate::hit::{Hit, HitPart, hit_test};
use crate::input::{Button, InputState, Key, Modifiers, UiState};
use crate::layout::{FurnitureItem, ItemId, ItemPatch, Layout, Room};
use crate::measure::{Wall, WallDistances, parse_distance, position_for_wall_distance, wall_distances};
use crate::snap::{Guide, SnapSettings, snap, snap_to_grid};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new layout was committed.
    ItemsChanged(Layout),
    /// The room dimensions changed.
    DimensionsChanged(Room),
    /// The selection changed.
    SelectionChanged(Option<ItemId>),
    /// Staged state or guides changed; redraw.
    RenderNeeded,
}

/// Core engine state. Independent of any rendering surface.
pub struct EngineCore {
    history: History<Snapshot>,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub config: EngineConfig,
}

impl EngineCore {
    /// Open a project. The history is seeded with `layout`.
    #[must_use]
    pub fn new(room: Room, layout: Layout, config: EngineConfig) -> Self {
        Self {
            history: History::new(Snapshot { room, layout }),
            camera: Camera::with_scale(config.pixels_per_meter),
            ui: UiState::default(),
            input: InputState::default(),
            config,
        }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary || !self.input.is_idle() {
            return Vec::new();
        }
        let room_pt = self.camera.screen_to_room(screen_pt);
        let hit = hit_test(room_pt, self.layout(), &self.camera, self.ui.selected_id, self.config.handle_radius_px);

        let Some(Hit { item_id, part }) = hit else {
            return self.select(None).into_iter().collect();
        };
        let Some(item) = self.layout().get(&item_id).cloned() else {
            return Vec::new();
        };

        let mut actions: Vec<Action> = self.select(Some(item_id)).into_iter().collect();
        if item.locked {
            debug!(id = %item_id, "locked item selected; gesture ignored");
            return actions;
        }

        self.input = match part {
            HitPart::ResizeHandle => {
                InputState::ResizingItem { id: item_id, orig_width: item.width, orig_depth: item.depth, staged: item }
            }
            HitPart::Body => InputState::DraggingItem { id: item_id, start_room: room_pt, orig: item.position(), staged: item },
        };
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        if self.input.is_idle() {
            return Vec::new();
        }
        let room_pt = self.camera.screen_to_room(screen_pt);
        self.update_staged(room_pt);
        vec![Action::RenderNeeded]
    }

    /// End the gesture. The staged copy from the last move is committed if it
    /// differs from the gesture-start value; a click without movement commits
    /// nothing.
    pub fn on_pointer_up(&mut self, _screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary || self.input.is_idle() {
            return Vec::new();
        }
        self.ui.guides.clear();

        let changed = match std::mem::take(&mut self.input) {
            InputState::Idle => None,
            InputState::DraggingItem { orig, staged, .. } => (staged.position() != orig).then_some(staged),
            InputState::ResizingItem { orig_width, orig_depth, staged, .. } => {
                ((staged.width, staged.depth) != (orig_width, orig_depth)).then_some(staged)
            }
        };

        match changed {
            Some(staged) => {
                let next = self.layout().with_item(staged);
                self.commit(next)
            }
            None => vec![Action::RenderNeeded],
        }
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if !self.input.is_idle() {
            debug!(key = %key.0, "key ignored during gesture");
            return Vec::new();
        }
        if key.is_escape() {
            return self.select(None).into_iter().collect();
        }
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        if let Some((dx, dy)) = key.arrow_direction() {
            let step = if modifiers.shift { self.config.nudge_step_large } else { self.config.nudge_step };
            return self.nudge(&id, dx * step, dy * step);
        }
        if key.is_delete() {
            return self.remove_item(&id);
        }
        Vec::new()
    }

    // --- Edits ---

    /// Write an exact wall distance typed by the user.
    ///
    /// Invalid text and locked items are ignored. The new position is clamped
    /// and committed only if it differs from the current one.
    pub fn set_wall_distance(&mut self, id: &ItemId, wall: Wall, raw: &str) -> Vec<Action> {
        let distance = match parse_distance(raw) {
            Ok(distance) => distance,
            Err(e) => {
                debug!(%id, ?wall, error = %e, "wall distance input ignored");
                return Vec::new();
            }
        };
        let Some(item) = self.layout().get(id).cloned() else {
            return Vec::new();
        };
        if item.locked {
            debug!(%id, "wall distance edit rejected; item locked");
            return Vec::new();
        }
        let target = position_for_wall_distance(&item, &self.room(), wall, distance);
        self.move_item(&item, target)
    }

    /// Add an item on top of the z-order, clamped into the room.
    pub fn add_item(&mut self, item: FurnitureItem) -> Vec<Action> {
        if let Err(e) = item.validate() {
            debug!(id = %item.id, error = %e, "invalid item not added");
            return Vec::new();
        }
        if self.layout().contains(&item.id) {
            debug!(id = %item.id, "duplicate item id not added");
            return Vec::new();
        }
        let item = clamp_item(&item, &self.room());
        let next = self.layout().with_added(item);
        self.commit(next)
    }

    /// Seed a new item from a catalog preset with its top-left corner at `at`.
    pub fn add_preset(&mut self, preset: &FurniturePreset, at: Point) -> Vec<Action> {
        self.add_item(FurnitureItem::from_preset(preset, at))
    }

    /// Remove an item. Allowed for locked items.
    pub fn remove_item(&mut self, id: &ItemId) -> Vec<Action> {
        if !self.layout().contains(id) {
            return Vec::new();
        }
        let next = self.layout().without(id);
        let mut actions = self.commit(next);
        if self.ui.selected_id == Some(*id) {
            actions.extend(self.select(None));
        }
        actions
    }

    /// Apply a sparse non-positional edit. A rotation change re-clamps the
    /// position against the new effective footprint. Locked items keep their
    /// geometry and are never re-clamped.
    pub fn update_item(&mut self, id: &ItemId, patch: &ItemPatch) -> Vec<Action> {
        let Some(item) = self.layout().get(id).cloned() else {
            return Vec::new();
        };
        let mut next = patch.apply(&item);
        if patch.rotation.is_some() && !item.locked {
            next = clamp_item(&next, &self.room());
        }
        if next == item {
            return Vec::new();
        }
        let layout = self.layout().with_item(next);
        self.commit(layout)
    }

    /// Change the room size. Non-positive dimensions and the current size are
    /// ignored. The new room and the layout clamped into it are committed as
    /// one undoable step.
    pub fn set_room(&mut self, width: f64, length: f64) -> Vec<Action> {
        let room = match Room::new(width, length) {
            Ok(room) => room,
            Err(e) => {
                debug!(error = %e, "room change ignored");
                return Vec::new();
            }
        };
        if room == self.room() {
            return Vec::new();
        }
        let layout: Layout = self.layout().iter().map(|item| clamp_item(item, &room)).collect();
        self.commit_snapshot(Snapshot { room, layout })
    }

    // --- History commands ---

    pub fn undo(&mut self) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        let before = self.history.current().clone();
        if !self.history.undo() {
            return Vec::new();
        }
        self.after_history_move(&before)
    }

    pub fn redo(&mut self) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        let before = self.history.current().clone();
        if !self.history.redo() {
            return Vec::new();
        }
        self.after_history_move(&before)
    }

    // --- Queries ---

    /// The committed layout at the history cursor.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.history.current().layout
    }

    /// The room at the history cursor.
    #[must_use]
    pub fn room(&self) -> Room {
        self.history.current().room
    }

    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.ui.selected_id
    }

    /// Alignment guides for the active gesture.
    #[must_use]
    pub fn guides(&self) -> &[Guide] {
        &self.ui.guides
    }

    /// The working copy of the item under an active gesture.
    #[must_use]
    pub fn staged_item(&self) -> Option<&FurnitureItem> {
        self.input.staged()
    }

    /// What the renderer should draw: the committed layout with the staged
    /// copy substituted for its committed entry.
    #[must_use]
    pub fn display_items(&self) -> Layout {
        match self.input.staged() {
            Some(staged) => self.layout().with_item(staged.clone()),
            None => self.layout().clone(),
        }
    }

    /// Wall distances for an item, reflecting the staged copy mid-gesture.
    #[must_use]
    pub fn measurements(&self, id: &ItemId) -> Option<WallDistances> {
        let item = self.input.staged().filter(|staged| staged.id == *id).or_else(|| self.layout().get(id))?;
        Some(wall_distances(item, &self.room()))
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn history_position(&self) -> HistoryPosition {
        self.history.position()
    }

    // --- Internals ---

    /// Write `layout` into the history under the current room.
    fn commit(&mut self, layout: Layout) -> Vec<Action> {
        let room = self.room();
        self.commit_snapshot(Snapshot { room, layout })
    }

    /// Write `next` into the history and report what changed.
    fn commit_snapshot(&mut self, next: Snapshot) -> Vec<Action> {
        let mut actions = change_actions(self.history.current(), &next);
        self.history.commit(next);
        actions.push(Action::RenderNeeded);
        actions
    }

    fn select(&mut self, id: Option<ItemId>) -> Option<Action> {
        if self.ui.selected_id == id {
            return None;
        }
        self.ui.selected_id = id;
        Some(Action::SelectionChanged(id))
    }

    /// Recompute the staged copy for the pointer at `room_pt`.
    fn update_staged(&mut self, room_pt: Point) {
        let grid = self.config.grid_unit;
        match &mut self.input {
            InputState::Idle => {}
            InputState::DraggingItem { start_room, orig, staged, .. } => {
                let candidate = Point::new(orig.x + room_pt.x - start_room.x, orig.y + room_pt.y - start_room.y);
                let settings =
                    SnapSettings { grid, threshold: self.camera.screen_dist_to_room(self.config.snap_threshold_px) };
                let committed = self.history.current();
                let result = snap(staged, candidate, committed.layout.items(), settings);
                let pos = clamp_position(staged, result.position, &committed.room);
                staged.x = pos.x;
                staged.y = pos.y;
                // A guide stands only if the clamp left its axis on the snap line.
                self.ui.guides = result
                    .guides
                    .into_iter()
                    .filter(|g| g.axis.with(result.position, g.axis.of(pos)) == result.position)
                    .collect();
            }
            InputState::ResizingItem { staged, .. } => {
                let min = self.config.min_size;
                staged.width = snap_to_grid((room_pt.x - staged.x).max(min), grid).max(min);
                staged.depth = snap_to_grid((room_pt.y - staged.y).max(min), grid).max(min);
            }
        }
    }

    /// Clamp `target` for `item` and commit the move if it changes anything.
    fn move_item(&mut self, item: &FurnitureItem, target: Point) -> Vec<Action> {
        let pos = clamp_position(item, target, &self.room());
        if pos == item.position() {
            return Vec::new();
        }
        let next = self.layout().with_item(item.moved_to(pos));
        self.commit(next)
    }

    fn nudge(&mut self, id: &ItemId, dx: f64, dy: f64) -> Vec<Action> {
        let Some(item) = self.layout().get(id).cloned() else {
            return Vec::new();
        };
        if item.locked {
            debug!(%id, "nudge rejected; item locked");
            return Vec::new();
        }
        let target = Point::new(item.x + dx, item.y + dy);
        self.move_item(&item, target)
    }

    fn after_history_move(&mut self, before: &Snapshot) -> Vec<Action> {
        let mut actions = change_actions(before, self.history.current());
        if let Some(id) = self.ui.selected_id {
            if !self.layout().contains(&id) {
                actions.extend(self.select(None));
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }
}

/// `DimensionsChanged` then `ItemsChanged`, for whichever half of the
/// snapshot differs.
fn change_actions(prev: &Snapshot, next: &Snapshot) -> Vec<Action> {
    let mut actions = Vec::new();
    if prev.room != next.room {
        actions.push(Action::DimensionsChanged(next.room));
    }
    if prev.layout != next.layout {
        actions.push(Action::ItemsChanged(next.layout.clone()));
    }
    actions
}
