#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::consts::HIT_SLOP_PX;
use crate::doc::{FurnitureId, LayoutDoc, WallId};

/// What a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Wall(WallId),
    Furniture(FurnitureId),
}

/// Topmost wall within reach of `world_pt`.
///
/// Reach is half the wall thickness or the screen-space slop converted to
/// model units, whichever is larger. Later walls are drawn over earlier ones
/// and win ties.
#[must_use]
pub fn hit_wall(world_pt: Point, doc: &LayoutDoc, camera: &Camera, wall_thickness_px: f64) -> Option<WallId> {
    let reach = (wall_thickness_px / 2.0).max(camera.screen_dist_to_world(HIT_SLOP_PX));
    doc.walls()
        .iter()
        .rev()
        .find(|w| w.distance_to(world_pt) <= reach)
        .map(|w| w.id())
}

/// Topmost furniture item whose footprint contains `world_pt`.
#[must_use]
pub fn hit_furniture(world_pt: Point, doc: &LayoutDoc, px_per_foot: f64) -> Option<FurnitureId> {
    doc.furniture()
        .iter()
        .rev()
        .find(|it| it.contains(world_pt, px_per_foot))
        .map(|it| it.id)
}

/// Test what is under `world_pt`. Furniture is drawn above walls and is
/// checked first.
#[must_use]
pub fn hit_test(world_pt: Point, doc: &LayoutDoc, camera: &Camera, px_per_foot: f64, wall_thickness_px: f64) -> Option<Hit> {
    hit_furniture(world_pt, doc, px_per_foot)
        .map(Hit::Furniture)
        .or_else(|| hit_wall(world_pt, doc, camera, wall_thickness_px).map(Hit::Wall))
}
