use tilemerge_engine::engine::GridEngine;
use tilemerge_engine::grid::Grid;
use tilemerge_engine::spawn::{ScriptedTiles, SeededTiles};

#[test]
fn spawn_on_full_grid_is_noop() {
    let grid = Grid::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ])
    .unwrap();
    let mut engine = GridEngine::with_grid(grid);
    let mut tiles = ScriptedTiles::new(vec![0.3, 0.3]);
    assert_eq!(engine.spawn_tile(&mut tiles), None);
    assert_eq!(*engine.grid(), grid);
    assert_eq!(tiles.consumed(), 0, "no draws taken from a full grid");
}

#[test]
fn scripted_draws_place_corner_tiles() {
    let mut engine = GridEngine::new();
    let mut tiles = ScriptedTiles::new(vec![0.0, 0.0, 0.95, 0.95]);
    assert_eq!(engine.spawn_tile(&mut tiles), Some((0, 0, 2)));
    assert_eq!(engine.spawn_tile(&mut tiles), Some((3, 3, 4)));
    assert_eq!(engine.grid().empty_cells().len(), 14);
}

#[test]
fn spawn_skips_occupied_cells() {
    let grid = Grid::from_rows([[2, 2, 2, 2], [2, 2, 2, 0], [2; 4], [2; 4]]).unwrap();
    let mut engine = GridEngine::with_grid(grid);
    let mut tiles = ScriptedTiles::new(vec![0.99, 0.0]);
    assert_eq!(engine.spawn_tile(&mut tiles), Some((1, 3, 2)));
    assert!(engine.is_full());
}

#[test]
fn seeded_spawns_are_reproducible() {
    let fill = |seed| {
        let mut engine = GridEngine::new();
        let mut tiles = SeededTiles::new_with_seed(seed);
        for _ in 0..16 {
            engine.spawn_tile(&mut tiles);
        }
        *engine.grid()
    };
    let a = fill(2024);
    assert_eq!(a, fill(2024));
    assert!(a.is_full());
    assert!(a.rows().iter().flatten().all(|&v| v == 2 || v == 4));
}

#[test]
fn seeded_spawns_are_mostly_twos() {
    let mut tiles = SeededTiles::new_with_seed(5);
    let mut fours = 0;
    for _ in 0..2000 {
        let mut engine = GridEngine::new();
        if let Some((_, _, 4)) = engine.spawn_tile(&mut tiles) {
            fours += 1;
        }
    }
    // expected 200
    assert!((100..300).contains(&fours), "fours = {}", fours);
}
