//! Layout reconciliation: turn two layout values into create/update/delete events.
//!
//! Renderers and persistence layers that keep their own per-item state call
//! [`diff`] with the previously observed layout and the new one, then apply the
//! returned changes. Ids are compared with last-wins lookup, so each id yields
//! at most one change.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::layout::{FurnitureItem, ItemId, Layout};

/// One item-level difference between two layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LayoutChange {
    Created(FurnitureItem),
    Updated(FurnitureItem),
    Deleted { id: ItemId },
}

/// Changes that turn `prev` into `next`.
///
/// Creates and updates come first in `next`'s z-order, followed by deletes in
/// `prev`'s order.
#[must_use]
pub fn diff(prev: &Layout, next: &Layout) -> Vec<LayoutChange> {
    let mut changes = Vec::new();
    let mut seen = HashSet::new();

    for item in next.iter().rev() {
        if !seen.insert(item.id) {
            continue;
        }
        match prev.get(&item.id) {
            None => changes.push(LayoutChange::Created(item.clone())),
            Some(old) if old != item => changes.push(LayoutChange::Updated(item.clone())),
            Some(_) => {}
        }
    }
    changes.reverse();

    let mut removed = HashSet::new();
    for item in prev {
        if !next.contains(&item.id) && removed.insert(item.id) {
            changes.push(LayoutChange::Deleted { id: item.id });
        }
    }
    changes
}
