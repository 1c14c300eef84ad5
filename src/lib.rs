//! Spatial interaction engine for laying out furniture in a rectangular room.
//!
//! The crate turns pointer and keyboard input into layout edits: items are
//! dragged with grid and object snapping, resized from a corner handle,
//! nudged with the arrow keys, and positioned exactly by typing wall
//! distances. Every committed edit lands in a linear undo/redo history of
//! immutable layout snapshots. Rendering, persistence, and preset sourcing
//! belong to the host, which consumes the [`engine::Action`]s the engine
//! returns and reads back staged state and guides for drawing.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`]: gestures, nudges, edits, undo/redo |
//! | [`layout`] | Room, furniture items, immutable layouts, and project JSON |
//! | [`catalog`] | Built-in furniture presets |
//! | [`geometry`] | Rotation-aware footprints, bounds, and key points |
//! | [`clamp`] | Keeping an item's footprint inside the room |
//! | [`snap`] | Grid quantization and object-to-object alignment with guides |
//! | [`hit`] | Hit-testing item bodies and the resize handle |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`measure`] | Wall distances and parsing typed distances |
//! | [`history`] | Linear snapshot history |
//! | [`reconcile`] | Create/update/delete diff between two layouts |
//! | [`camera`] | Screen/room coordinate conversion |
//! | [`config`] | Environment-driven engine tuning |
//! | [`consts`] | Default numeric constants (grid unit, snap threshold, scale, etc.) |

pub mod camera;
pub mod catalog;
pub mod clamp;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod input;
pub mod layout;
pub mod measure;
pub mod reconcile;
pub mod snap;
