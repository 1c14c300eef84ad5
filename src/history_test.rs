use uuid::Uuid;

use super::*;
use crate::layout::{Category, FurnitureItem};

fn make_item(name: &str, x: f64) -> FurnitureItem {
    FurnitureItem {
        id: Uuid::new_v4(),
        name: name.into(),
        category: Category::Custom,
        x,
        y: 0.0,
        width: 1.0,
        depth: 1.0,
        rotation: 0.0,
        color: "#999999".into(),
        locked: false,
        light_range: None,
    }
}

fn snapshot(name: &str) -> Layout {
    Layout::new(vec![make_item(name, 0.0)])
}

fn name_of(layout: &Layout) -> &str {
    layout.items().first().map_or("", |item| item.name.as_str())
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_history_holds_seed() {
    let h = History::new(snapshot("s0"));
    assert_eq!(name_of(h.current()), "s0");
    assert_eq!(h.position(), HistoryPosition { index: 0, len: 1 });
    assert!(!h.can_undo());
    assert!(!h.can_redo());
}

// =============================================================
// Commit
// =============================================================

#[test]
fn commit_appends_and_advances() {
    let mut h = History::new(snapshot("s0"));
    h.commit(snapshot("s1"));
    h.commit(snapshot("s2"));
    assert_eq!(name_of(h.current()), "s2");
    assert_eq!(h.position(), HistoryPosition { index: 2, len: 3 });
    assert!(h.can_undo());
    assert!(!h.can_redo());
}

#[test]
fn commit_after_undo_truncates_redo_tail() {
    let mut h = History::new(snapshot("s0"));
    h.commit(snapshot("s1"));
    h.commit(snapshot("s2"));
    assert!(h.undo());
    assert!(h.undo());
    h.commit(snapshot("s3"));

    let names: Vec<&str> = h.snapshots().iter().map(name_of).collect();
    assert_eq!(names, ["s0", "s3"]);
    assert_eq!(h.position(), HistoryPosition { index: 1, len: 2 });
    assert!(!h.can_redo());
}

// =============================================================
// Undo / redo
// =============================================================

#[test]
fn undo_and_redo_move_cursor_only() {
    let mut h = History::new(snapshot("s0"));
    h.commit(snapshot("s1"));
    assert!(h.undo());
    assert_eq!(name_of(h.current()), "s0");
    assert_eq!(h.snapshots().len(), 2);
    assert!(h.redo());
    assert_eq!(name_of(h.current()), "s1");
    assert_eq!(h.snapshots().len(), 2);
}

#[test]
fn undo_at_start_is_noop() {
    let mut h = History::new(snapshot("s0"));
    assert!(!h.undo());
    assert_eq!(h.position().index, 0);
}

#[test]
fn redo_at_end_is_noop() {
    let mut h = History::new(snapshot("s0"));
    h.commit(snapshot("s1"));
    assert!(!h.redo());
    assert_eq!(h.position().index, 1);
}

#[test]
fn repeated_undo_stops_at_seed() {
    let mut h = History::new(snapshot("s0"));
    h.commit(snapshot("s1"));
    for _ in 0..5 {
        h.undo();
    }
    assert_eq!(name_of(h.current()), "s0");
    for _ in 0..5 {
        h.redo();
    }
    assert_eq!(name_of(h.current()), "s1");
}

#[test]
fn snapshots_are_not_mutated_by_later_commits() {
    let mut h = History::new(snapshot("s0"));
    let before = h.current().clone();
    let moved = before.with_item(before.items()[0].moved_to(crate::camera::Point::new(2.0, 2.0)));
    h.commit(moved);
    h.undo();
    assert_eq!(h.current(), &before);
}
