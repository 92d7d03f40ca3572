//! Engine configuration: scale, canvas extent, snapping, and resize policy.
//!
//! Every field has a default matching the stock 2D designer. `from_env`
//! overrides individual fields from `FURNISPACE_*` variables; an unset
//! variable keeps the default, a malformed one is an error.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::catalog::{Catalog, CatalogError};
use crate::consts::{
    CANVAS_HEIGHT, CANVAS_WIDTH, FLOOR_COLOR, FURNITURE_COLOR, PX_PER_FOOT, SNAP_TOLERANCE_DEG, STEP_FEET, WALL_COLOR,
    WALL_THICKNESS_PX,
};

pub const ENV_PX_PER_FOOT: &str = "FURNISPACE_PX_PER_FOOT";
pub const ENV_STEP_FEET: &str = "FURNISPACE_STEP_FEET";
pub const ENV_CANVAS_WIDTH: &str = "FURNISPACE_CANVAS_WIDTH";
pub const ENV_CANVAS_HEIGHT: &str = "FURNISPACE_CANVAS_HEIGHT";
pub const ENV_SNAP_TOLERANCE_DEG: &str = "FURNISPACE_SNAP_TOLERANCE_DEG";
pub const ENV_RESIZE_POLICY: &str = "FURNISPACE_RESIZE_POLICY";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}: expected a positive number, got '{value}'")]
    InvalidNumber { var: String, value: String },
    #[error("{var}: unknown resize policy '{value}' (expected 'unchecked', 'clamp' or 'reject')")]
    InvalidResizePolicy { var: String, value: String },
    #[error("furniture catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// What happens when a resize makes a furniture item overhang the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePolicy {
    /// Apply the new size as given; the item may end up outside the room.
    #[default]
    Unchecked,
    /// Apply the new size, then pull the item back inside the room bounds.
    Clamp,
    /// Ignore a resize whose result would not fit inside the room bounds.
    Reject,
}

impl ResizePolicy {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "unchecked" => Some(Self::Unchecked),
            "clamp" => Some(Self::Clamp),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Canvas pixels per foot.
    pub px_per_foot: f64,
    /// Directional furniture step, in feet.
    pub step_feet: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub wall_thickness_px: f64,
    /// Snap window in degrees around each axis direction.
    pub snap_tolerance_deg: f64,
    pub resize_policy: ResizePolicy,
    pub wall_color: String,
    pub furniture_color: String,
    pub floor_color: String,
    pub catalog: Catalog,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            px_per_foot: PX_PER_FOOT,
            step_feet: STEP_FEET,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            wall_thickness_px: WALL_THICKNESS_PX,
            snap_tolerance_deg: SNAP_TOLERANCE_DEG,
            resize_policy: ResizePolicy::default(),
            wall_color: WALL_COLOR.to_string(),
            furniture_color: FURNITURE_COLOR.to_string(),
            floor_color: FLOOR_COLOR.to_string(),
            catalog: Catalog::default(),
        }
    }
}

impl EngineConfig {
    /// Build config from process environment variables.
    ///
    /// Optional:
    /// - `FURNISPACE_PX_PER_FOOT`: default 15
    /// - `FURNISPACE_STEP_FEET`: default 0.4
    /// - `FURNISPACE_CANVAS_WIDTH` / `FURNISPACE_CANVAS_HEIGHT`: default 800 x 400
    /// - `FURNISPACE_SNAP_TOLERANCE_DEG`: default 15
    /// - `FURNISPACE_RESIZE_POLICY`: `unchecked` (default), `clamp` or `reject`
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        cfg.catalog = Catalog::stock()?;
        cfg.px_per_foot = parse_positive(&lookup, ENV_PX_PER_FOOT, cfg.px_per_foot)?;
        cfg.step_feet = parse_positive(&lookup, ENV_STEP_FEET, cfg.step_feet)?;
        cfg.canvas_width = parse_positive(&lookup, ENV_CANVAS_WIDTH, cfg.canvas_width)?;
        cfg.canvas_height = parse_positive(&lookup, ENV_CANVAS_HEIGHT, cfg.canvas_height)?;
        cfg.snap_tolerance_deg = parse_positive(&lookup, ENV_SNAP_TOLERANCE_DEG, cfg.snap_tolerance_deg)?;
        if let Some(raw) = lookup(ENV_RESIZE_POLICY) {
            cfg.resize_policy = ResizePolicy::parse(&raw)
                .ok_or_else(|| ConfigError::InvalidResizePolicy { var: ENV_RESIZE_POLICY.into(), value: raw })?;
        }
        Ok(cfg)
    }

    /// Convert a length in feet to canvas pixels.
    #[must_use]
    pub fn feet_to_px(&self, feet: f64) -> f64 {
        feet * self.px_per_foot
    }

    /// Convert a length in canvas pixels to feet.
    #[must_use]
    pub fn px_to_feet(&self, px: f64) -> f64 {
        px / self.px_per_foot
    }
}

fn parse_positive<F>(lookup: &F, var: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidNumber { var: var.into(), value: raw }),
    }
}
