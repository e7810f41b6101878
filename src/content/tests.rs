//! Content domain: tests for data parsing and validation.

use ron::Options;

use super::data::{DataFile, GeometryDef, LevelDef, SolidKind, TuningDef};
use super::validation::{validate_level, validate_tuning};

fn parse<T: for<'de> serde::Deserialize<'de>>(src: &str) -> T {
    Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(src)
        .expect("test RON should parse")
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_tuning_defaults_fill_missing_fields() {
    let tuning: TuningDef = parse("(movement: (max_speed: 5.0))");
    assert_eq!(tuning.movement.max_speed, 5.0);
    // Everything unspecified stays at the built-in defaults.
    assert_eq!(tuning.movement.accel, 0.2);
    assert_eq!(tuning.movement.turn_delay_ticks, 10);
    assert_eq!(tuning.camera.viewport_width, 1080.0);
    assert_eq!(tuning.animation.walk_frames, 3);
    assert!(tuning.start_level.is_none());
}

#[test]
fn test_tuning_start_level_is_implicit_some() {
    let tuning: TuningDef = parse(r#"(start_level: "underground-1")"#);
    assert_eq!(tuning.start_level.as_deref(), Some("underground-1"));
}

#[test]
fn test_level_parses_every_geometry_kind() {
    let flat: LevelDef = parse(
        r#"(id: "a", width: 8000.0, height: 600.0, spawn_x: 100.0,
            geometry: Flat(surface_y: 0.0))"#,
    );
    assert!(matches!(flat.geometry, GeometryDef::Flat { surface_y } if surface_y == 0.0));
    assert!(flat.coins.is_empty());

    let rects: LevelDef = parse(
        r#"(id: "b", width: 2000.0, height: 400.0, spawn_x: 50.0,
            geometry: Rects([(kind: Ground, x: 0.0, y: 0.0, w: 2000.0, h: 40.0)]),
            coins: [(x: 300.0, y: 120.0, w: 32.0, h: 32.0)])"#,
    );
    match &rects.geometry {
        GeometryDef::Rects(solids) => {
            assert_eq!(solids.len(), 1);
            assert_eq!(solids[0].kind, SolidKind::Ground);
        }
        other => panic!("expected rects, got {:?}", other),
    }
    assert_eq!(rects.coins.len(), 1);

    let tiles: LevelDef = parse(
        r#####"(id: "c", width: 400.0, height: 100.0, spawn_x: 60.0,
            geometry: Tiles(tile_size: 50.0, rows: ["....", "####"]))"#####,
    );
    assert!(matches!(tiles.geometry, GeometryDef::Tiles { .. }));
}

#[test]
fn test_data_file_wrapper() {
    let file: DataFile<LevelDef> = parse(
        r#"(schema_version: 1, items: [
            (id: "a", width: 8000.0, height: 600.0, spawn_x: 100.0,
             geometry: Flat(surface_y: 0.0)),
        ])"#,
    );
    assert_eq!(file.schema_version, 1);
    assert_eq!(file.items.len(), 1);
}

// -----------------------------------------------------------------------------
// Tuning validation
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&TuningDef::default()).is_empty());
}

#[test]
fn test_validation_rejects_bad_constants() {
    let mut tuning = TuningDef::default();
    tuning.movement.tick_hz = 0.0;
    tuning.movement.jump_impulse = -3.0;
    tuning.animation.walk_frames = 0;
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 3);
    // Errors carry enough context to name the offending field.
    assert!(errors.iter().any(|e| e.field == "tick_hz"));
    assert!(errors.iter().any(|e| e.field == "walk_frames"));
}

#[test]
fn test_validation_rejects_slide_factor_at_or_above_decel() {
    let mut tuning = TuningDef::default();
    tuning.movement.slide_factor = tuning.movement.decel;
    assert!(!validate_tuning(&tuning).is_empty());

    tuning.movement.slide_factor = tuning.movement.decel - 0.01;
    assert!(validate_tuning(&tuning).is_empty());
}

#[test]
fn test_validation_rejects_threshold_outside_viewport() {
    let mut tuning = TuningDef::default();
    tuning.camera.follow_threshold = tuning.camera.viewport_width + 1.0;
    assert!(validate_tuning(&tuning).iter().any(|e| e.field == "follow_threshold"));
}

// -----------------------------------------------------------------------------
// Level validation
// -----------------------------------------------------------------------------

fn flat_level() -> LevelDef {
    LevelDef {
        id: "test".to_string(),
        width: 8000.0,
        height: 600.0,
        spawn_x: 100.0,
        geometry: GeometryDef::Flat { surface_y: 0.0 },
        coins: Vec::new(),
    }
}

#[test]
fn test_valid_level_passes() {
    assert!(validate_level(&flat_level(), 1080.0).is_empty());
}

#[test]
fn test_level_narrower_than_viewport_fails() {
    let mut level = flat_level();
    level.width = 800.0;
    assert!(validate_level(&level, 1080.0).iter().any(|e| e.field == "width"));
}

#[test]
fn test_spawn_outside_level_fails() {
    let mut level = flat_level();
    level.spawn_x = level.width + 1.0;
    assert!(validate_level(&level, 1080.0).iter().any(|e| e.field == "spawn_x"));
}

#[test]
fn test_ragged_tile_rows_fail() {
    let mut level = flat_level();
    level.geometry = GeometryDef::Tiles {
        tile_size: 50.0,
        rows: vec!["....".to_string(), "##".to_string()],
    };
    assert!(
        validate_level(&level, 1080.0)
            .iter()
            .any(|e| e.field == "geometry.rows")
    );
}

#[test]
fn test_empty_rect_list_fails() {
    let mut level = flat_level();
    level.geometry = GeometryDef::Rects(Vec::new());
    assert!(!validate_level(&level, 1080.0).is_empty());
}
