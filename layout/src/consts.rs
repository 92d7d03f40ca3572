//! Shared numeric constants and color defaults for the layout crate.

// ── Scale ───────────────────────────────────────────────────────

/// Canvas pixels per real-world foot.
pub const PX_PER_FOOT: f64 = 15.0;

/// Distance moved by one directional furniture step, in feet.
pub const STEP_FEET: f64 = 0.4;

/// Stroke width of a wall on screen, in pixels.
pub const WALL_THICKNESS_PX: f64 = 4.0;

// ── Canvas ──────────────────────────────────────────────────────

/// Default canvas width in CSS pixels.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Default canvas height in CSS pixels.
pub const CANVAS_HEIGHT: f64 = 400.0;

// ── Room ────────────────────────────────────────────────────────

/// Default room width in feet.
pub const DEFAULT_ROOM_WIDTH_FT: f64 = 10.0;

/// Default room length in feet.
pub const DEFAULT_ROOM_LENGTH_FT: f64 = 12.0;

// ── Snapping ────────────────────────────────────────────────────

/// Angular window, in degrees, within which a wall snaps to an axis.
pub const SNAP_TOLERANCE_DEG: f64 = 15.0;

// ── Viewport ────────────────────────────────────────────────────

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.1;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels around a wall segment.
pub const HIT_SLOP_PX: f64 = 6.0;

// ── Colors ──────────────────────────────────────────────────────

pub const WALL_COLOR: &str = "#808080";
pub const FURNITURE_COLOR: &str = "#8b4513";
pub const FLOOR_COLOR: &str = "#d1d5db";
