#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// A point in either screen or model space, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point { x: (self.x + other.x) / 2.0, y: (self.y + other.y) / 2.0 }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Zoom/pan transform between the canvas (screen) and the layout (model).
///
/// The pan offset is stored in model units and applied before the zoom:
/// `screen = (model + pan) * zoom`. `zoom` stays within
/// [`ZOOM_MIN`, `ZOOM_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a canvas-local screen point to model coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: screen.x / self.zoom - self.pan_x,
            y: screen.y / self.zoom - self.pan_y,
        }
    }

    /// Convert a model point to canvas-local screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: (world.x + self.pan_x) * self.zoom,
            y: (world.y + self.pan_y) * self.zoom,
        }
    }

    /// Convert a screen-space distance (pixels) to model-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Step the zoom up by [`ZOOM_STEP`], saturating at [`ZOOM_MAX`].
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// Step the zoom down by [`ZOOM_STEP`], saturating at [`ZOOM_MIN`].
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Set the zoom, rounded to tenths and clamped to the allowed range.
    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let rounded = (zoom * 10.0).round() / 10.0;
        self.zoom = rounded.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Pan by a screen-space pointer delta. The delta is divided by the zoom
    /// so the content follows the pointer at any scale.
    pub fn pan_by_screen(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx / self.zoom;
        self.pan_y += dy / self.zoom;
    }
}
