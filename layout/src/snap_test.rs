#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::SNAP_TOLERANCE_DEG;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Raw endpoint at `angle_deg` and distance `len` from the origin.
fn polar(len: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(len * rad.cos(), len * rad.sin())
}

fn snap_from_origin(end: Point) -> Snapped {
    snap_segment(Point::new(0.0, 0.0), end, SNAP_TOLERANCE_DEG)
}

// =============================================================
// snap_axis
// =============================================================

#[test]
fn axis_near_zero_is_east() {
    assert_eq!(snap_axis(10.0, true, SNAP_TOLERANCE_DEG), Some(SnapAxis::East));
    assert_eq!(snap_axis(-14.9, true, SNAP_TOLERANCE_DEG), Some(SnapAxis::East));
}

#[test]
fn axis_near_180_is_west() {
    assert_eq!(snap_axis(170.0, false, SNAP_TOLERANCE_DEG), Some(SnapAxis::West));
    assert_eq!(snap_axis(-170.0, false, SNAP_TOLERANCE_DEG), Some(SnapAxis::West));
}

#[test]
fn axis_near_90_is_south() {
    assert_eq!(snap_axis(80.0, true, SNAP_TOLERANCE_DEG), Some(SnapAxis::South));
    assert_eq!(snap_axis(104.0, false, SNAP_TOLERANCE_DEG), Some(SnapAxis::South));
}

#[test]
fn axis_near_minus_90_is_north() {
    assert_eq!(snap_axis(-100.0, false, SNAP_TOLERANCE_DEG), Some(SnapAxis::North));
    assert_eq!(snap_axis(-76.0, true, SNAP_TOLERANCE_DEG), Some(SnapAxis::North));
}

#[test]
fn axis_diagonal_is_unsnapped() {
    assert_eq!(snap_axis(45.0, true, SNAP_TOLERANCE_DEG), None);
    assert_eq!(snap_axis(-135.0, false, SNAP_TOLERANCE_DEG), None);
}

#[test]
fn axis_boundary_is_exclusive() {
    assert_eq!(snap_axis(15.0, true, SNAP_TOLERANCE_DEG), None);
    assert_eq!(snap_axis(75.0, true, SNAP_TOLERANCE_DEG), None);
    assert_eq!(snap_axis(165.0, false, SNAP_TOLERANCE_DEG), None);
}

#[test]
fn axis_respects_custom_tolerance() {
    assert_eq!(snap_axis(10.0, true, 5.0), None);
    assert_eq!(snap_axis(4.0, true, 5.0), Some(SnapAxis::East));
}

#[test]
fn axis_degrees() {
    assert_eq!(SnapAxis::East.degrees(), 0.0);
    assert_eq!(SnapAxis::West.degrees(), 180.0);
    assert_eq!(SnapAxis::South.degrees(), 90.0);
    assert_eq!(SnapAxis::North.degrees(), -90.0);
}

// =============================================================
// snap_segment
// =============================================================

#[test]
fn ten_degrees_snaps_to_zero_keeping_length() {
    let raw = polar(100.0, 10.0);
    let s = snap_from_origin(raw);
    assert_eq!(s.axis, Some(SnapAxis::East));
    assert!(approx_eq(s.end.x, 100.0));
    assert!(approx_eq(s.end.y, 0.0));
}

#[test]
fn eighty_degrees_snaps_to_ninety() {
    let s = snap_from_origin(polar(50.0, 80.0));
    assert_eq!(s.axis, Some(SnapAxis::South));
    assert!(approx_eq(s.end.x, 0.0));
    assert!(approx_eq(s.end.y, 50.0));
}

#[test]
fn minus_hundred_degrees_snaps_to_minus_ninety() {
    let s = snap_from_origin(polar(40.0, -100.0));
    assert_eq!(s.axis, Some(SnapAxis::North));
    assert!(approx_eq(s.end.x, 0.0));
    assert!(approx_eq(s.end.y, -40.0));
}

#[test]
fn forty_five_degrees_is_left_as_is() {
    let raw = polar(30.0, 45.0);
    let s = snap_from_origin(raw);
    assert_eq!(s.axis, None);
    assert_eq!(s.end, raw);
}

#[test]
fn leftward_near_horizontal_snaps_to_180() {
    let s = snap_from_origin(polar(60.0, 172.0));
    assert_eq!(s.axis, Some(SnapAxis::West));
    assert!(approx_eq(s.end.x, -60.0));
    assert!(s.end.y.abs() < 1e-9);
}

#[test]
fn snapped_length_matches_raw_length() {
    let start = Point::new(37.0, 81.0);
    for angle in [-170.0, -95.0, -80.0, -5.0, 3.0, 86.0, 101.0, 178.0] {
        let raw = Point::new(start.x + 77.0 * f64::cos(f64::to_radians(angle)), start.y + 77.0 * f64::sin(f64::to_radians(angle)));
        let s = snap_segment(start, raw, SNAP_TOLERANCE_DEG);
        assert!(s.axis.is_some(), "angle {angle} should snap");
        assert!((start.distance(s.end) - 77.0).abs() < 1e-9);
    }
}

#[test]
fn scenario_nearly_flat_wall_snaps_horizontal() {
    let s = snap_from_origin(Point::new(150.0, 2.0));
    assert_eq!(s.axis, Some(SnapAxis::East));
    assert!(approx_eq(s.end.y, 0.0));
    assert!((s.end.x - 150.0).abs() < 0.02);
}

#[test]
fn zero_length_segment_stays_at_start() {
    let start = Point::new(5.0, 5.0);
    let s = snap_segment(start, start, SNAP_TOLERANCE_DEG);
    assert!(approx_eq(s.end.x, 5.0));
    assert!(approx_eq(s.end.y, 5.0));
}
