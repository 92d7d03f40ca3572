//! Wall angle snapping.
//!
//! A freehand segment is forced onto the nearest axis direction when its
//! angle falls within the tolerance window. The snapped endpoint keeps the
//! raw pointer's distance from the start, not its direction.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use serde::Serialize;

use crate::camera::Point;

/// Axis direction a segment was snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapAxis {
    /// 0°: pointing right.
    East,
    /// 180°: pointing left.
    West,
    /// 90°: pointing down in canvas space (y grows downward).
    South,
    /// -90°: pointing up in canvas space.
    North,
}

impl SnapAxis {
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Self::East => 0.0,
            Self::West => 180.0,
            Self::South => 90.0,
            Self::North => -90.0,
        }
    }
}

/// Result of snapping one candidate segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapped {
    /// Endpoint after snapping; equal to the raw endpoint when no snap applied.
    pub end: Point,
    /// Axis the segment was forced onto, if any.
    pub axis: Option<SnapAxis>,
}

/// Pick the snap axis for a raw angle in degrees, if any.
///
/// Precedence: horizontal, then 90°, then -90°. `rightward` breaks the tie
/// between 0° and 180° for the horizontal case.
#[must_use]
pub fn snap_axis(angle_deg: f64, rightward: bool, tolerance_deg: f64) -> Option<SnapAxis> {
    if angle_deg.abs() < tolerance_deg || angle_deg.abs() > 180.0 - tolerance_deg {
        Some(if rightward { SnapAxis::East } else { SnapAxis::West })
    } else if (angle_deg - 90.0).abs() < tolerance_deg {
        Some(SnapAxis::South)
    } else if (angle_deg + 90.0).abs() < tolerance_deg {
        Some(SnapAxis::North)
    } else {
        None
    }
}

/// Snap the segment `start -> raw_end`.
#[must_use]
pub fn snap_segment(start: Point, raw_end: Point, tolerance_deg: f64) -> Snapped {
    let dx = raw_end.x - start.x;
    let dy = raw_end.y - start.y;
    let angle = dy.atan2(dx).to_degrees();
    let length = dx.hypot(dy);

    let Some(axis) = snap_axis(angle, raw_end.x >= start.x, tolerance_deg) else {
        return Snapped { end: raw_end, axis: None };
    };

    let rad = axis.degrees().to_radians();
    Snapped {
        end: Point::new(start.x + length * rad.cos(), start.y + length * rad.sin()),
        axis: Some(axis),
    }
}
