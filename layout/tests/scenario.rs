//! End-to-end editing session against a file-backed store.

use layout::camera::Point;
use layout::catalog::FurnitureKind;
use layout::config::EngineConfig;
use layout::engine::{Action, Engine};
use layout::input::{Key, Mode};
use layout::library;
use layout::snapshot::DesignSnapshot;
use layout::store::{FileStore, KEY_DESIGN_2D, KEY_DESIGN_3D, KeyValueStore};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn ten_by_twelve_room_with_snapped_wall() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let mut engine = Engine::new(EngineConfig::default(), store);

    engine.set_room_dimensions(10.0, 12.0);
    let b = engine.core.bounds();
    assert_eq!((b.width(), b.height()), (150.0, 180.0));

    engine.on_click(pt(0.0, 0.0));
    let actions = engine.on_click(pt(150.0, 2.0));
    let Some(Action::WallAdded(wall)) = actions.first() else {
        panic!("expected a wall, got {actions:?}");
    };
    assert!((wall.length() - 150.0).abs() < 0.1);
    assert!(wall.end().y.abs() < 1e-9);
    assert!(wall.end().x > 149.9);

    // The new wall stretches the bounds to the canvas origin.
    let b = engine.core.bounds();
    assert_eq!((b.min_x, b.min_y), (0.0, 0.0));

    let raw = engine.store().get(KEY_DESIGN_2D).unwrap().unwrap();
    let stored: DesignSnapshot = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.walls.len(), 5);
    assert_eq!(stored.room_width, 10.0);
}

#[test]
fn furniture_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = Engine::new(EngineConfig::default(), FileStore::open(dir.path()).unwrap());

    engine.set_mode(Mode::Furniture);
    engine.add_furniture(FurnitureKind::Table);
    engine.on_pointer_down(pt(400.0, 200.0));
    engine.on_pointer_up(pt(400.0, 200.0));
    assert!(engine.core.selected_furniture().is_some());

    for _ in 0..40 {
        engine.on_key_down(&Key("ArrowLeft".into()));
    }
    engine.recolor_selected("#224466");
    let table = engine.core.doc.furniture()[0].clone();
    assert!((table.x - 325.0).abs() < 1e-9);

    let reopened = Engine::open(EngineConfig::default(), FileStore::open(dir.path()).unwrap());
    assert_eq!(reopened.core.doc.furniture()[0], table);
    assert_eq!(reopened.core.doc.walls().len(), 4);
}

#[test]
fn save_handoff_and_library_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = Engine::new(EngineConfig::default(), FileStore::open(dir.path()).unwrap());
    engine.add_furniture(FurnitureKind::Sofa);

    let saved = engine.save_design("data:image/jpeg;base64,AAAA").unwrap();
    engine.switch_to_3d().unwrap();
    assert!(engine.store().get(KEY_DESIGN_3D).unwrap().is_some());

    let mut store = engine.into_store();
    let designs = library::list(&store).unwrap();
    assert_eq!(designs.len(), 1);
    assert_eq!(designs[0].id, saved.id);

    assert!(library::delete(&mut store, &saved.id).unwrap());
    assert!(library::list(&store).unwrap().is_empty());
}
