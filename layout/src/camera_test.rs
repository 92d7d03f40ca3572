#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance_is_euclidean() {
    let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
    assert!(approx_eq(d, 5.0));
}

#[test]
fn point_distance_is_symmetric() {
    let a = Point::new(-2.0, 7.5);
    let b = Point::new(11.0, -3.0);
    assert!(approx_eq(a.distance(b), b.distance(a)));
}

#[test]
fn point_midpoint() {
    let m = Point::new(10.0, 20.0).midpoint(Point::new(30.0, 60.0));
    assert!(point_approx_eq(m, Point::new(20.0, 40.0)));
}

#[test]
fn point_is_finite_rejects_nan() {
    assert!(Point::new(1.0, 2.0).is_finite());
    assert!(!Point::new(f64::NAN, 2.0).is_finite());
    assert!(!Point::new(1.0, f64::INFINITY).is_finite());
}

#[test]
fn point_serde_shape() {
    let json = serde_json::to_value(Point::new(1.5, 2.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 1.5, "y": 2.0 }));
}

// --- Camera defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

// --- screen_to_world ---

#[test]
fn screen_to_world_identity() {
    let cam = Camera::default();
    let world = cam.screen_to_world(Point::new(50.0, 75.0));
    assert!(point_approx_eq(world, Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(40.0, 80.0));
    assert!(point_approx_eq(world, Point::new(20.0, 40.0)));
}

#[test]
fn screen_to_world_pan_is_in_model_units() {
    // (100 / 2) - 10 = 40, (50 / 2) - 5 = 20
    let cam = Camera { pan_x: 10.0, pan_y: 5.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(100.0, 50.0));
    assert!(point_approx_eq(world, Point::new(40.0, 20.0)));
}

// --- world_to_screen ---

#[test]
fn world_to_screen_applies_pan_before_zoom() {
    // (5 + 20) * 2 = 50, (5 + 10) * 2 = 30
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 2.0 };
    let screen = cam.world_to_screen(Point::new(5.0, 5.0));
    assert!(point_approx_eq(screen, Point::new(50.0, 30.0)));
}

#[test]
fn screen_world_roundtrip() {
    let cam = Camera { pan_x: -33.0, pan_y: 12.5, zoom: 1.3 };
    let p = Point::new(123.0, 456.0);
    let back = cam.screen_to_world(cam.world_to_screen(p));
    assert!((back.x - p.x).abs() < 1e-9);
    assert!((back.y - p.y).abs() < 1e-9);
}

#[test]
fn screen_dist_to_world_divides_by_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 2.0 };
    assert!(approx_eq(cam.screen_dist_to_world(8.0), 4.0));
}

// --- zoom ---

#[test]
fn zoom_in_steps_by_tenth() {
    let mut cam = Camera::default();
    cam.zoom_in();
    assert_eq!(cam.zoom, 1.1);
}

#[test]
fn zoom_in_saturates_at_max() {
    let mut cam = Camera::default();
    for _ in 0..30 {
        cam.zoom_in();
    }
    assert_eq!(cam.zoom, ZOOM_MAX);
}

#[test]
fn zoom_out_saturates_at_min() {
    let mut cam = Camera::default();
    for _ in 0..30 {
        cam.zoom_out();
    }
    assert_eq!(cam.zoom, ZOOM_MIN);
}

#[test]
fn zoom_steps_do_not_drift() {
    let mut cam = Camera::default();
    for _ in 0..7 {
        cam.zoom_in();
    }
    for _ in 0..7 {
        cam.zoom_out();
    }
    assert_eq!(cam.zoom, 1.0);
}

#[test]
fn set_zoom_ignores_nan() {
    let mut cam = Camera::default();
    cam.set_zoom(f64::NAN);
    assert_eq!(cam.zoom, 1.0);
}

#[test]
fn set_zoom_clamps() {
    let mut cam = Camera::default();
    cam.set_zoom(9.0);
    assert_eq!(cam.zoom, ZOOM_MAX);
    cam.set_zoom(0.01);
    assert_eq!(cam.zoom, ZOOM_MIN);
}

// --- pan ---

#[test]
fn pan_by_screen_divides_by_zoom() {
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 2.0 };
    cam.pan_by_screen(10.0, -6.0);
    assert!(approx_eq(cam.pan_x, 5.0));
    assert!(approx_eq(cam.pan_y, -3.0));
}

#[test]
fn pan_accumulates() {
    let mut cam = Camera::default();
    cam.pan_by_screen(4.0, 4.0);
    cam.pan_by_screen(1.0, -2.0);
    assert!(approx_eq(cam.pan_x, 5.0));
    assert!(approx_eq(cam.pan_y, 2.0));
}
