//! Engine tuning parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    GRID_UNIT_M, HANDLE_RADIUS_PX, MIN_ITEM_SIZE_M, NUDGE_STEP_LARGE_M, NUDGE_STEP_M, PIXELS_PER_METER,
    SNAP_THRESHOLD_PX,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a number: {value:?}")]
    NotANumber { key: &'static str, value: String },
    #[error("{key} must be positive, got {value}")]
    NotPositive { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Grid spacing for positions and sizes, in meters.
    pub grid_unit: f64,
    /// Object-snap distance, in screen pixels.
    pub snap_threshold_px: f64,
    /// Fixed plan scale.
    pub pixels_per_meter: f64,
    /// Resize floor for width and depth, in meters.
    pub min_size: f64,
    pub nudge_step: f64,
    /// Nudge distance with Shift held.
    pub nudge_step_large: f64,
    /// Resize-handle hit slop, in screen pixels.
    pub handle_radius_px: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_unit: GRID_UNIT_M,
            snap_threshold_px: SNAP_THRESHOLD_PX,
            pixels_per_meter: PIXELS_PER_METER,
            min_size: MIN_ITEM_SIZE_M,
            nudge_step: NUDGE_STEP_M,
            nudge_step_large: NUDGE_STEP_LARGE_M,
            handle_radius_px: HANDLE_RADIUS_PX,
        }
    }
}

impl EngineConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `ROOMPLAN_GRID_UNIT_M`: default 0.05
    /// - `ROOMPLAN_SNAP_THRESHOLD_PX`: default 10
    /// - `ROOMPLAN_PIXELS_PER_METER`: default 100
    /// - `ROOMPLAN_MIN_SIZE_M`: default 0.1
    /// - `ROOMPLAN_NUDGE_STEP_M`: default 0.1
    /// - `ROOMPLAN_NUDGE_STEP_LARGE_M`: default 0.5
    /// - `ROOMPLAN_HANDLE_RADIUS_PX`: default 8
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but is not a positive number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error when a key is present but is not a positive number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            grid_unit: parse_positive(&lookup, "ROOMPLAN_GRID_UNIT_M", defaults.grid_unit)?,
            snap_threshold_px: parse_positive(&lookup, "ROOMPLAN_SNAP_THRESHOLD_PX", defaults.snap_threshold_px)?,
            pixels_per_meter: parse_positive(&lookup, "ROOMPLAN_PIXELS_PER_METER", defaults.pixels_per_meter)?,
            min_size: parse_positive(&lookup, "ROOMPLAN_MIN_SIZE_M", defaults.min_size)?,
            nudge_step: parse_positive(&lookup, "ROOMPLAN_NUDGE_STEP_M", defaults.nudge_step)?,
            nudge_step_large: parse_positive(&lookup, "ROOMPLAN_NUDGE_STEP_LARGE_M", defaults.nudge_step_large)?,
            handle_radius_px: parse_positive(&lookup, "ROOMPLAN_HANDLE_RADIUS_PX", defaults.handle_radius_px)?,
        })
    }
}

fn parse_positive<F>(lookup: &F, key: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotANumber { key, value: raw.clone() })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NotPositive { key, value: raw });
    }
    Ok(value)
}
