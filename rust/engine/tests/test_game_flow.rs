use tilemerge_engine::engine::GridEngine;
use tilemerge_engine::game::{AfterTerminal, GameController, GameStatus, Snapshot};
use tilemerge_engine::grid::{Direction, Grid};
use tilemerge_engine::spawn::{ScriptedTiles, SeededTiles};

fn controller_at(
    rows: [[u32; 4]; 4],
    policy: AfterTerminal,
) -> GameController<ScriptedTiles, Vec<Snapshot>> {
    let engine = GridEngine::with_grid(Grid::from_rows(rows).expect("valid grid"));
    GameController::with_engine(engine, ScriptedTiles::new(vec![0.0]), Vec::new(), policy)
}

#[test]
fn start_places_two_tiles_and_redraws_once() {
    let mut game = GameController::new(SeededTiles::new_with_seed(1), Vec::<Snapshot>::new());
    game.start();
    assert_eq!(game.engine().grid().empty_cells().len(), 14);
    assert_eq!(game.engine().score(), 0);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.sink().len(), 1);
    assert_eq!(game.sink()[0], game.snapshot());
}

#[test]
fn corner_tiles_scenario() {
    let mut game = GameController::new(
        ScriptedTiles::new(vec![0.0, 0.0, 0.95, 0.95]),
        Vec::<Snapshot>::new(),
    );
    game.start();
    assert_eq!(game.engine().grid().get(0, 0), 2);
    assert_eq!(game.engine().grid().get(3, 3), 4);

    // row 0 is already packed, but the 4 in the bottom-right corner still slides
    assert!(game.apply_direction(Direction::Left));
    assert_eq!(game.engine().grid().row(0)[0], 2);
    assert_eq!(game.engine().grid().get(3, 0), 4);
    assert_eq!(game.engine().score(), 0);
}

#[test]
fn unchanged_move_spawns_nothing_and_skips_redraw() {
    // second spawn lands on (1, 0): index 3 of the 15 remaining cells
    let mut game = GameController::new(
        ScriptedTiles::new(vec![0.0, 0.0, 0.21, 0.95]),
        Vec::<Snapshot>::new(),
    );
    game.start();
    assert_eq!(game.engine().grid().column(0), [2, 4, 0, 0]);

    assert!(!game.apply_direction(Direction::Left));
    assert!(!game.apply_direction(Direction::Up));
    assert_eq!(game.engine().grid().empty_cells().len(), 14);
    assert_eq!(game.engine().score(), 0);
    assert_eq!(game.sink().len(), 1, "only the start redraw");
    assert_eq!(game.tiles().consumed(), 4);
}

#[test]
fn changed_move_spawns_one_tile() {
    let mut game = controller_at(
        [[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]],
        AfterTerminal::Continue,
    );
    assert!(game.apply_direction(Direction::Left));
    let grid = game.engine().grid();
    assert_eq!(grid.empty_cells().len(), 14);
    // the spawn takes the first empty cell after the slide
    assert_eq!(grid.row(0), [2, 2, 0, 0]);
    assert_eq!(game.sink().len(), 1);
}

#[test]
fn reaching_2048_wins_on_the_same_move() {
    let mut game = controller_at(
        [[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]],
        AfterTerminal::Continue,
    );
    assert!(game.apply_direction(Direction::Left));
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.engine().score(), 2048);
    let last = game.sink().last().expect("redraw after winning move");
    assert_eq!(last.status, GameStatus::Won);
}

#[test]
fn win_takes_precedence_over_full_grid() {
    let mut game = controller_at(
        [
            [1024, 1024, 2, 4],
            [2, 4, 8, 16],
            [4, 8, 16, 32],
            [8, 16, 32, 64],
        ],
        AfterTerminal::Continue,
    );
    game.apply_direction(Direction::Left);
    assert!(game.engine().is_full());
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn filling_last_cell_loses_even_with_merges_left() {
    let mut game = controller_at(
        [[2, 4, 2, 4], [2, 8, 4, 2], [4, 2, 8, 4], [8, 4, 16, 0]],
        AfterTerminal::Continue,
    );
    assert!(game.apply_direction(Direction::Right));
    assert!(game.engine().is_full());
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.engine().score(), 0);
}

#[test]
fn continue_policy_keeps_moving_but_status_is_sticky() {
    let mut game = controller_at(
        [[2, 4, 2, 4], [2, 8, 4, 2], [4, 2, 8, 4], [8, 4, 16, 0]],
        AfterTerminal::Continue,
    );
    game.apply_direction(Direction::Right);
    assert_eq!(game.status(), GameStatus::Lost);

    // column 0 still holds a mergeable pair
    assert!(game.apply_direction(Direction::Up));
    assert_eq!(game.engine().score(), 4);
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn freeze_policy_ignores_input_after_win() {
    let mut game = controller_at(
        [[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]],
        AfterTerminal::Freeze,
    );
    game.apply_direction(Direction::Left);
    assert_eq!(game.status(), GameStatus::Won);
    let frozen = game.snapshot();
    let redraws = game.sink().len();

    assert!(!game.apply_direction(Direction::Right));
    assert_eq!(game.snapshot(), frozen);
    assert_eq!(game.sink().len(), redraws);

    game.start();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.apply_direction(Direction::Right) || game.apply_direction(Direction::Left));
}

#[test]
fn score_never_decreases_over_a_seeded_game() {
    let mut game = GameController::new(SeededTiles::new_with_seed(11), ());
    game.start();
    let mut last = 0;
    let dirs = [Direction::Left, Direction::Down, Direction::Right, Direction::Up];
    for i in 0..500 {
        game.apply_direction(dirs[i % 4]);
        let score = game.engine().score();
        assert!(score >= last);
        last = score;
        if game.status().is_terminal() {
            break;
        }
    }
}

#[test]
fn snapshot_serializes_for_presentation() {
    let game = controller_at([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], AfterTerminal::Continue);
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["score"], 0);
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["grid"]["cells"][0][0], 2);
}
