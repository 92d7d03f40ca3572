//! Document model: walls, furniture items, room bounds, and the layout store.
//!
//! This module defines what is on the canvas (`Wall`, `FurnitureItem`), the
//! derived containment box (`Bounds`), and the store that owns one editing
//! session's lists (`LayoutDoc`).
//!
//! Both lists are held behind `Arc` and mutated through `Arc::make_mut`. A
//! renderer that cloned a list before an edit keeps its copy unchanged; the
//! edit lands in a fresh list. When nobody else holds the list, the edit is
//! applied in place.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::catalog::FurnitureKind;

/// Unique identifier for a wall.
pub type WallId = Uuid;

/// Unique identifier for a furniture item.
pub type FurnitureId = Uuid;

/// Generate a fresh, time-ordered identifier.
#[must_use]
pub fn new_id() -> Uuid {
    Uuid::now_v7()
}

// =============================================================================
// WALL
// =============================================================================

/// A straight wall segment in canvas pixels.
///
/// Endpoints are private so that `length` always equals the distance between
/// them. Decoding recomputes the length instead of trusting stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WallRecord")]
pub struct Wall {
    id: WallId,
    start: Point,
    end: Point,
    length: f64,
    color: String,
}

/// Wire shape of a wall. `length` is accepted and discarded.
#[derive(Deserialize)]
struct WallRecord {
    id: WallId,
    start: Point,
    end: Point,
    #[serde(default)]
    color: Option<String>,
}

impl From<WallRecord> for Wall {
    fn from(rec: WallRecord) -> Self {
        let color = rec.color.unwrap_or_else(|| crate::consts::WALL_COLOR.to_string());
        Self::with_id(rec.id, rec.start, rec.end, color)
    }
}

impl Wall {
    /// Create a wall with a fresh id.
    #[must_use]
    pub fn new(start: Point, end: Point, color: impl Into<String>) -> Self {
        Self::with_id(new_id(), start, end, color)
    }

    #[must_use]
    pub fn with_id(id: WallId, start: Point, end: Point, color: impl Into<String>) -> Self {
        Self { id, start, end, length: start.distance(end), color: color.into() }
    }

    #[must_use]
    pub fn id(&self) -> WallId {
        self.id
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Length in canvas pixels.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Move both endpoints, recomputing the length.
    pub fn set_endpoints(&mut self, start: Point, end: Point) {
        self.start = start;
        self.end = end;
        self.length = start.distance(end);
    }

    /// Shortest distance from `p` to this segment.
    #[must_use]
    pub fn distance_to(&self, p: Point) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return self.start.distance(p);
        }
        let t = (((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len_sq).clamp(0.0, 1.0);
        Point::new(self.start.x + t * dx, self.start.y + t * dy).distance(p)
    }
}

// =============================================================================
// FURNITURE
// =============================================================================

/// A placed furniture item.
///
/// Position is the top-left corner in canvas pixels; `width` and `length`
/// are in feet and scaled at use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub id: FurnitureId,
    #[serde(rename = "type")]
    pub kind: FurnitureKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
    pub color: String,
    /// Rotation in degrees, carried through for the 3D view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl FurnitureItem {
    #[must_use]
    pub fn width_px(&self, px_per_foot: f64) -> f64 {
        self.width * px_per_foot
    }

    #[must_use]
    pub fn length_px(&self, px_per_foot: f64) -> f64 {
        self.length * px_per_foot
    }

    /// Whether `p` (model space) lies inside the item's footprint.
    #[must_use]
    pub fn contains(&self, p: Point, px_per_foot: f64) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width_px(px_per_foot)
            && p.y >= self.y
            && p.y <= self.y + self.length_px(px_per_foot)
    }
}

// =============================================================================
// BOUNDS
// =============================================================================

/// Axis-aligned box in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Smallest box enclosing every wall endpoint, or `None` with no walls.
    #[must_use]
    pub fn of_walls(walls: &[Wall]) -> Option<Self> {
        let first = walls.first()?;
        let seed = Self { min_x: first.start.x, min_y: first.start.y, max_x: first.start.x, max_y: first.start.y };
        Some(walls.iter().fold(seed, |b, w| Self {
            min_x: b.min_x.min(w.start.x).min(w.end.x),
            min_y: b.min_y.min(w.start.y).min(w.end.y),
            max_x: b.max_x.max(w.start.x).max(w.end.x),
            max_y: b.max_y.max(w.start.y).max(w.end.y),
        }))
    }

    /// Clamp a rectangle's top-left corner so the rectangle stays inside.
    ///
    /// The lower bound wins when the rectangle is larger than the box.
    #[must_use]
    pub fn clamp_rect(&self, x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
        (self.min_x.max(x.min(self.max_x - width)), self.min_y.max(y.min(self.max_y - height)))
    }

    /// Whether the rectangle lies entirely inside.
    #[must_use]
    pub fn contains_rect(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x >= self.min_x && y >= self.min_y && x + width <= self.max_x && y + height <= self.max_y
    }
}

// =============================================================================
// ROOM
// =============================================================================

/// Room size in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f64,
    pub length: f64,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self { width: crate::consts::DEFAULT_ROOM_WIDTH_FT, length: crate::consts::DEFAULT_ROOM_LENGTH_FT }
    }
}

/// The four walls of a `width_px` x `length_px` rectangle centred on the
/// canvas, clockwise from the top-left corner.
#[must_use]
pub fn rectangle_walls(width_px: f64, length_px: f64, canvas_width: f64, canvas_height: f64, color: &str) -> Vec<Wall> {
    let x0 = (canvas_width - width_px) / 2.0;
    let y0 = (canvas_height - length_px) / 2.0;
    let x1 = x0 + width_px;
    let y1 = y0 + length_px;
    let corners = [Point::new(x0, y0), Point::new(x1, y0), Point::new(x1, y1), Point::new(x0, y1)];
    corners
        .iter()
        .zip(corners.iter().cycle().skip(1))
        .map(|(&start, &end)| Wall::new(start, end, color))
        .collect()
}

// =============================================================================
// STORE
// =============================================================================

/// In-memory store of one layout's walls and furniture.
#[derive(Debug, Clone, Default)]
pub struct LayoutDoc {
    walls: Arc<Vec<Wall>>,
    furniture: Arc<Vec<FurnitureItem>>,
}

impl LayoutDoc {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the current wall list.
    #[must_use]
    pub fn walls(&self) -> &Arc<Vec<Wall>> {
        &self.walls
    }

    /// Shared handle to the current furniture list.
    #[must_use]
    pub fn furniture(&self) -> &Arc<Vec<FurnitureItem>> {
        &self.furniture
    }

    #[must_use]
    pub fn wall(&self, id: &WallId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == *id)
    }

    #[must_use]
    pub fn item(&self, id: &FurnitureId) -> Option<&FurnitureItem> {
        self.furniture.iter().find(|f| f.id == *id)
    }

    /// Replace the whole wall list.
    pub fn set_walls(&mut self, walls: Vec<Wall>) {
        self.walls = Arc::new(walls);
    }

    /// Replace the whole furniture list.
    pub fn set_furniture(&mut self, furniture: Vec<FurnitureItem>) {
        self.furniture = Arc::new(furniture);
    }

    pub fn push_wall(&mut self, wall: Wall) {
        Arc::make_mut(&mut self.walls).push(wall);
    }

    /// Remove a wall by id, returning it if it was present.
    pub fn remove_wall(&mut self, id: &WallId) -> Option<Wall> {
        let idx = self.walls.iter().position(|w| w.id == *id)?;
        Some(Arc::make_mut(&mut self.walls).remove(idx))
    }

    /// Apply `f` to the wall with `id`. Returns the updated wall, or `None`
    /// if it doesn't exist.
    pub fn update_wall<F>(&mut self, id: &WallId, f: F) -> Option<&Wall>
    where
        F: FnOnce(&mut Wall),
    {
        if !self.walls.iter().any(|w| w.id == *id) {
            return None;
        }
        let wall = Arc::make_mut(&mut self.walls).iter_mut().find(|w| w.id == *id)?;
        f(&mut *wall);
        Some(wall)
    }

    pub fn push_item(&mut self, item: FurnitureItem) {
        Arc::make_mut(&mut self.furniture).push(item);
    }

    /// Remove a furniture item by id, returning it if it was present.
    pub fn remove_item(&mut self, id: &FurnitureId) -> Option<FurnitureItem> {
        let idx = self.furniture.iter().position(|f| f.id == *id)?;
        Some(Arc::make_mut(&mut self.furniture).remove(idx))
    }

    /// Apply `f` to the item with `id`. Returns the updated item, or `None`
    /// if it doesn't exist.
    pub fn update_item<F>(&mut self, id: &FurnitureId, f: F) -> Option<&FurnitureItem>
    where
        F: FnOnce(&mut FurnitureItem),
    {
        if !self.furniture.iter().any(|it| it.id == *id) {
            return None;
        }
        let item = Arc::make_mut(&mut self.furniture).iter_mut().find(|it| it.id == *id)?;
        f(&mut *item);
        Some(item)
    }

    /// Room bounds: the box around every wall endpoint, or the canvas extent
    /// when there are no walls.
    #[must_use]
    pub fn bounds(&self, canvas_width: f64, canvas_height: f64) -> Bounds {
        Bounds::of_walls(&self.walls).unwrap_or(Bounds { min_x: 0.0, min_y: 0.0, max_x: canvas_width, max_y: canvas_height })
    }
}
