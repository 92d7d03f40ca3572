//! Plain-data scene handed to the renderer.
//!
//! The engine never draws. After each event the host asks for a [`Scene`]
//! and paints it however it likes. Wall and furniture lists are shared
//! handles to the engine's copy-on-write lists, so taking a scene is cheap
//! and a held scene is unaffected by later edits.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::sync::Arc;

use serde::Serialize;

use crate::camera::{Camera, Point};
use crate::doc::{Bounds, FurnitureId, FurnitureItem, Wall, WallId};
use crate::snap::{SnapAxis, snap_segment};

/// Format a pixel length as feet with one decimal, e.g. `12.0'`.
#[must_use]
pub fn label_feet(px: f64, px_per_foot: f64) -> String {
    format!("{:.1}'", px / px_per_foot)
}

/// Closed outline of the room: the first wall's start followed by every
/// wall's end. Empty when there are no walls.
#[must_use]
pub fn room_outline(walls: &[Wall]) -> Vec<Point> {
    let Some(first) = walls.first() else {
        return Vec::new();
    };
    std::iter::once(first.start()).chain(walls.iter().map(Wall::end)).collect()
}

/// Live preview of the wall being added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallPreview {
    pub start: Point,
    /// Snapped endpoint.
    pub end: Point,
    pub axis: Option<SnapAxis>,
    pub length_feet: f64,
    pub label: String,
}

impl WallPreview {
    /// Preview of `start -> pointer` after snapping.
    #[must_use]
    pub fn new(start: Point, pointer: Point, tolerance_deg: f64, px_per_foot: f64) -> Self {
        let snapped = snap_segment(start, pointer, tolerance_deg);
        let length = start.distance(snapped.end);
        Self {
            start,
            end: snapped.end,
            axis: snapped.axis,
            length_feet: length / px_per_foot,
            label: label_feet(length, px_per_foot),
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub walls: Arc<Vec<Wall>>,
    pub furniture: Arc<Vec<FurnitureItem>>,
    pub floor_color: String,
    pub selected_wall: Option<WallId>,
    pub selected_furniture: Option<FurnitureId>,
    pub preview: Option<WallPreview>,
    pub outline: Vec<Point>,
    pub bounds: Bounds,
    pub camera: Camera,
    pub wall_thickness: f64,
    pub px_per_foot: f64,
}

impl Scene {
    /// Length label drawn at a wall's midpoint.
    #[must_use]
    pub fn wall_label(&self, wall: &Wall) -> String {
        label_feet(wall.length(), self.px_per_foot)
    }

    /// Footprint of `item` in canvas pixels as `(x, y, width, length)`.
    #[must_use]
    pub fn item_rect(&self, item: &FurnitureItem) -> (f64, f64, f64, f64) {
        (item.x, item.y, item.width_px(self.px_per_foot), item.length_px(self.px_per_foot))
    }

    #[must_use]
    pub fn is_wall_selected(&self, id: WallId) -> bool {
        self.selected_wall == Some(id)
    }

    #[must_use]
    pub fn is_item_selected(&self, id: FurnitureId) -> bool {
        self.selected_furniture == Some(id)
    }
}
