//! Linear undo/redo history of full plan snapshots.
//!
//! DESIGN
//! ======
//! The history is the only owner of committed state. It holds an ordered
//! list of snapshots and a cursor. Committing drops everything after the
//! cursor and appends; undo and redo only move the cursor and never touch a
//! snapshot. The list is never empty: it is seeded with the state the
//! project was opened with.
//!
//! The engine stores a [`Snapshot`] (room plus layout) per entry so that
//! undoing a room change restores the room and the items it clamped together.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::layout::{Layout, Room};

/// A committed plan: the room and the furniture inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub room: Room,
    pub layout: Layout,
}

/// Where the cursor sits, for enabling undo/redo affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPosition {
    /// Zero-based index of the current snapshot.
    pub index: usize,
    /// Number of snapshots held.
    pub len: usize,
}

#[derive(Debug, Clone)]
pub struct History<T> {
    snapshots: Vec<T>,
    cursor: usize,
}

impl<T> History<T> {
    /// Start a history with one seed snapshot.
    #[must_use]
    pub fn new(seed: T) -> Self {
        Self { snapshots: vec![seed], cursor: 0 }
    }

    /// Record `snapshot` as the new current entry, discarding any redo tail.
    pub fn commit(&mut self, snapshot: T) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
        tracing::debug!(cursor = self.cursor, len = self.snapshots.len(), "history commit");
    }

    /// Step back one snapshot. Returns `false` at the start.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        tracing::debug!(cursor = self.cursor, "history undo");
        true
    }

    /// Step forward one snapshot. Returns `false` at the end.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        tracing::debug!(cursor = self.cursor, "history redo");
        true
    }

    /// The snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    #[must_use]
    pub fn position(&self) -> HistoryPosition {
        HistoryPosition { index: self.cursor, len: self.snapshots.len() }
    }

    /// All snapshots, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[T] {
        &self.snapshots
    }
}
