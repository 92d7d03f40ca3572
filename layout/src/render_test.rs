#![allow(clippy::float_cmp)]

use super::*;
use crate::catalog::FurnitureKind;
use crate::doc::{new_id, rectangle_walls};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn empty_scene() -> Scene {
    Scene {
        walls: Arc::new(Vec::new()),
        furniture: Arc::new(Vec::new()),
        floor_color: "#d1d5db".into(),
        selected_wall: None,
        selected_furniture: None,
        preview: None,
        outline: Vec::new(),
        bounds: Bounds { min_x: 0.0, min_y: 0.0, max_x: 800.0, max_y: 400.0 },
        camera: Camera::default(),
        wall_thickness: 4.0,
        px_per_foot: 15.0,
    }
}

// =============================================================
// label_feet
// =============================================================

#[test]
fn label_feet_one_decimal() {
    assert_eq!(label_feet(180.0, 15.0), "12.0'");
    assert_eq!(label_feet(150.0, 15.0), "10.0'");
    assert_eq!(label_feet(22.5, 15.0), "1.5'");
}

#[test]
fn label_feet_rounds() {
    assert_eq!(label_feet(100.0, 15.0), "6.7'");
}

// =============================================================
// room_outline
// =============================================================

#[test]
fn outline_of_no_walls_is_empty() {
    assert!(room_outline(&[]).is_empty());
}

#[test]
fn outline_of_rectangle_closes() {
    let walls = rectangle_walls(150.0, 180.0, 800.0, 400.0, "#808080");
    let outline = room_outline(&walls);
    assert_eq!(outline.len(), 5);
    assert_eq!(outline[0], walls[0].start());
    assert_eq!(outline[4], outline[0]);
    assert_eq!(outline[2], walls[1].end());
}

// =============================================================
// WallPreview
// =============================================================

#[test]
fn preview_snaps_and_labels() {
    let p = WallPreview::new(pt(0.0, 0.0), pt(150.0, 2.0), 15.0, 15.0);
    assert_eq!(p.axis, Some(SnapAxis::East));
    assert!(approx_eq(p.end.y, 0.0));
    assert!((p.length_feet - 10.0).abs() < 0.01);
    assert_eq!(p.label, "10.0'");
}

#[test]
fn preview_unsnapped_keeps_pointer() {
    let p = WallPreview::new(pt(0.0, 0.0), pt(30.0, 30.0), 15.0, 15.0);
    assert_eq!(p.axis, None);
    assert_eq!(p.end, pt(30.0, 30.0));
}

// =============================================================
// Scene helpers
// =============================================================

#[test]
fn wall_label_uses_scene_scale() {
    let wall = Wall::new(pt(0.0, 0.0), pt(0.0, 180.0), "#808080");
    assert_eq!(empty_scene().wall_label(&wall), "12.0'");
}

#[test]
fn item_rect_scales_feet() {
    let item = FurnitureItem {
        id: new_id(),
        kind: FurnitureKind::Table,
        x: 10.0,
        y: 20.0,
        width: 6.0,
        length: 4.0,
        color: "#8b4513".into(),
        rotation: None,
    };
    assert_eq!(empty_scene().item_rect(&item), (10.0, 20.0, 90.0, 60.0));
}

#[test]
fn selection_flags() {
    let id = new_id();
    let scene = Scene { selected_wall: Some(id), ..empty_scene() };
    assert!(scene.is_wall_selected(id));
    assert!(!scene.is_wall_selected(new_id()));
    assert!(!scene.is_item_selected(id));
}

#[test]
fn scene_serializes_camel_case() {
    let v = serde_json::to_value(empty_scene()).unwrap();
    assert!(v.get("floorColor").is_some());
    assert!(v.get("wallThickness").is_some());
    assert_eq!(v["camera"]["zoom"], serde_json::json!(1.0));
}
