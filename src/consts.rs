//! Shared numeric constants for the room planner.
//!
//! Lengths are in meters unless the name ends in `_PX`, in which case the value
//! is a screen-space distance in CSS pixels.

// ── Scale ───────────────────────────────────────────────────────

/// Screen pixels drawn for one meter of room space.
pub const PIXELS_PER_METER: f64 = 100.0;

// ── Snapping ────────────────────────────────────────────────────

/// Spacing of the coarse grid that positions and sizes quantize to.
pub const GRID_UNIT_M: f64 = 0.05;

/// Object-snap distance in screen pixels, converted to meters through the camera.
pub const SNAP_THRESHOLD_PX: f64 = 10.0;

// ── Sizing ──────────────────────────────────────────────────────

/// Smallest width or depth a resize gesture may produce.
pub const MIN_ITEM_SIZE_M: f64 = 0.1;

// ── Keyboard ────────────────────────────────────────────────────

/// Arrow-key nudge distance.
pub const NUDGE_STEP_M: f64 = 0.1;

/// Arrow-key nudge distance while Shift is held.
pub const NUDGE_STEP_LARGE_M: f64 = 0.5;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for the resize handle.
pub const HANDLE_RADIUS_PX: f64 = 8.0;
