//! Tests for the JSON map transfer format

use tile_engine::formats::{export_map, from_json, import_map, to_json};
use tile_engine::{EditState, Position, TileMap, TileRef, UndoState};

fn create_test_map() -> TileMap {
    let mut map = TileMap::new(4, 3, 32).unwrap();
    map.add_layer("ground", "Ground");
    map.add_layer("objects", "Objects");
    map
}

fn tile(id: &str) -> TileRef {
    TileRef::new(id, 0, 0, 32, 32)
}

fn provider(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| (*s).to_string()).collect()
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_lists_non_empty_cells_row_major() {
    let mut map = create_test_map();
    map.set_tile("ground", 2, 0, Some(tile("grass")));
    map.set_tile("ground", 0, 1, Some(tile("grass")));

    let file = export_map(&map);
    assert_eq!(file.width, 4);
    assert_eq!(file.height, 3);
    assert_eq!(file.tile_size, 32);
    assert_eq!(file.layers.len(), 2);

    let ground = &file.layers["ground"];
    assert_eq!(ground.name, "Ground");
    assert!(ground.visible);
    let coords: Vec<(i32, i32)> = ground.tiles.iter().map(|t| (t.x, t.y)).collect();
    assert_eq!(coords, vec![(2, 0), (0, 1)]);

    assert!(file.layers["objects"].tiles.is_empty());
}

#[test]
fn test_export_keeps_layer_visibility() {
    let mut map = create_test_map();
    map.set_layer_visible("objects", false).unwrap();
    let file = export_map(&map);
    assert!(!file.layers["objects"].visible);
}

#[test]
fn test_json_contains_camel_case_keys() {
    let mut map = create_test_map();
    map.set_tile("ground", 0, 0, Some(TileRef::new("grass", 32, 0, 32, 32)));

    let json = to_json(&map).unwrap();
    assert!(json.contains("\"tileSize\""));
    assert!(json.contains("\"sourceId\""));
    assert!(json.contains("\"sWidth\""));
    assert!(json.contains("\"sHeight\""));
}

// ============================================================================
// Import
// ============================================================================

#[test]
fn test_round_trip_preserves_content() {
    let mut map = create_test_map();
    map.set_tile("ground", 1, 1, Some(tile("grass")));
    map.set_tile("objects", 3, 2, Some(TileRef::new("tree", 0, 32, 32, 64)));
    map.set_layer_visible("objects", false).unwrap();

    let json = to_json(&map).unwrap();
    let restored = from_json(&json, &provider(&["grass", "tree"])).unwrap();

    assert_eq!(restored.width(), 4);
    assert_eq!(restored.tile_size(), 32);
    assert_eq!(restored.get_tile("ground", 1, 1), Some(tile("grass")));
    assert_eq!(
        restored.get_tile("objects", 3, 2),
        Some(TileRef::new("tree", 0, 32, 32, 64))
    );
    assert!(!restored.layer("objects").unwrap().visible);
}

#[test]
fn test_import_skips_unresolved_sources() {
    let mut map = create_test_map();
    map.set_tile("ground", 0, 0, Some(tile("grass")));
    map.set_tile("ground", 1, 0, Some(tile("lava")));
    map.set_tile("ground", 2, 0, Some(tile("grass")));

    let file = export_map(&map);
    // "lava" is unknown to the provider; the other two tiles import.
    let restored = import_map(&file, &provider(&["grass"])).unwrap();

    assert_eq!(restored.layer("ground").unwrap().tile_count(), 2);
    assert_eq!(restored.get_tile("ground", 1, 0), None);
    assert_eq!(restored.get_tile("ground", 0, 0), Some(tile("grass")));
}

#[test]
fn test_import_skips_out_of_bounds_entries() {
    let mut file = export_map(&create_test_map());
    file.layers.get_mut("ground").unwrap().tiles.push(tile_engine::formats::TileEntry {
        x: 10,
        y: 0,
        source_id: "grass".to_string(),
        sx: 0,
        sy: 0,
        s_width: 32,
        s_height: 32,
    });

    let restored = import_map(&file, &provider(&["grass"])).unwrap();
    assert_eq!(restored.layer("ground").unwrap().tile_count(), 0);
}

#[test]
fn test_import_rejects_invalid_size() {
    let json = r#"{"width": 0, "height": 3, "tileSize": 32, "layers": {}}"#;
    assert!(from_json(json, &provider(&[])).is_err());
}

#[test]
fn test_import_defaults_missing_visibility() {
    let json = r#"{
        "width": 2, "height": 2, "tileSize": 16,
        "layers": { "ground": { "name": "Ground", "tiles": [] } }
    }"#;
    let map = from_json(json, &provider(&[])).unwrap();
    assert!(map.layer("ground").unwrap().visible);
}

#[test]
fn test_import_leaves_no_queued_updates() {
    let mut map = create_test_map();
    map.set_tile("ground", 0, 0, Some(tile("grass")));
    let file = export_map(&map);

    let mut restored = import_map(&file, &provider(&["grass"])).unwrap();
    assert!(restored.take_cell_updates().is_empty());
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(from_json("{ not json", &provider(&[])).is_err());
}

// ============================================================================
// Session replacement
// ============================================================================

#[test]
fn test_replace_map_clears_history_and_selection() {
    let mut state = EditState::new(8, 8, 16).unwrap();
    state.set_brush(Some(tile("grass")));
    state.paint_tile(Position::new(0, 0));
    state.begin_selection(Position::new(0, 0));
    assert!(state.can_undo());

    let json = to_json(state.map()).unwrap();
    let imported = from_json(&json, &provider(&["grass"])).unwrap();
    state.replace_map(imported);

    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(!state.selection().active);
    assert!(state.cursor().is_none());
    assert_eq!(state.map().get_tile("ground", 0, 0), Some(tile("grass")));
    assert_eq!(state.current_layer(), "ground");
}
