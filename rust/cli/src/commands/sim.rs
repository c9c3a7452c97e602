//! Automated play with a seeded random move policy.
//!
//! Game `i` uses seed `seed + i` for both its tile spawns and its move
//! choices (on separate ChaCha20 streams), so any single game can be
//! reproduced on its own.

use crate::config;
use crate::error::CliError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use tilemerge_engine::game::{GameController, GameStatus};
use tilemerge_engine::grid::all_directions;
use tilemerge_engine::spawn::SeededTiles;
use tracing::debug;

const MOVE_STREAM: u64 = 1;

/// Summary of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimResult {
    pub seed: u64,
    pub score: u64,
    pub highest_tile: u32,
    pub status: GameStatus,
    /// Inputs that changed the board
    pub moves: u32,
}

/// Play one game until it ends or `max_moves` inputs have been tried.
pub fn simulate_game(seed: u64, max_moves: u32) -> SimResult {
    let mut mover = ChaCha20Rng::seed_from_u64(seed);
    mover.set_stream(MOVE_STREAM);
    let directions = all_directions();

    let mut game = GameController::new(SeededTiles::new_with_seed(seed), ());
    game.start();
    let mut moves = 0;
    for _ in 0..max_moves {
        let dir = directions[mover.random_range(0..directions.len())];
        if game.apply_direction(dir) {
            moves += 1;
        }
        if game.status().is_terminal() {
            break;
        }
    }
    debug!(seed, moves, score = game.engine().score(), "simulation finished");
    SimResult {
        seed,
        score: game.engine().score(),
        highest_tile: game.engine().grid().highest_tile(),
        status: game.status(),
        moves,
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "unfinished",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    }
}

/// Handle the sim command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration cannot be loaded and
/// `CliError::Io` if writing to `out` fails.
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    max_moves: Option<u32>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let max_moves = max_moves.unwrap_or(cfg.max_moves);
    if max_moves == 0 {
        return Err(CliError::InvalidInput("max-moves must be >= 1".to_string()));
    }

    writeln!(
        out,
        "sim: games={} seed={} max_moves={}",
        games, seed, max_moves
    )?;

    let mut results = Vec::with_capacity(games as usize);
    for i in 0..games {
        let r = simulate_game(seed.wrapping_add(u64::from(i)), max_moves);
        writeln!(
            out,
            "Game {}: seed={} score={} highest={} status={} moves={}",
            i + 1,
            r.seed,
            r.score,
            r.highest_tile,
            status_label(r.status),
            r.moves
        )?;
        results.push(r);
    }

    let count = |s: GameStatus| results.iter().filter(|r| r.status == s).count();
    let best = results.iter().map(|r| r.score).max().unwrap_or(0);
    let mean = results.iter().map(|r| r.score as f64).sum::<f64>() / results.len() as f64;
    writeln!(
        out,
        "Summary: won={} lost={} unfinished={} best_score={} mean_score={:.1}",
        count(GameStatus::Won),
        count(GameStatus::Lost),
        count(GameStatus::InProgress),
        best,
        mean
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_game_is_deterministic() {
        assert_eq!(simulate_game(5, 500), simulate_game(5, 500));
    }

    #[test]
    fn move_budget_is_respected() {
        let r = simulate_game(8, 3);
        assert!(r.moves <= 3);
        assert_eq!(r.status, GameStatus::InProgress);
    }

    #[test]
    fn long_games_reach_a_terminal_status() {
        // a full board ends the game, and random moves fill it quickly
        let r = simulate_game(21, 10_000);
        assert!(r.status.is_terminal(), "{:?}", r);
        assert!(r.highest_tile >= 4);
    }

    #[test]
    fn zero_games_is_rejected() {
        let mut out = Vec::new();
        let result = handle_sim_command(0, Some(1), Some(10), &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn output_has_one_line_per_game_and_summary() {
        let mut out = Vec::new();
        handle_sim_command(3, Some(100), Some(200), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("sim: games=3 seed=100 max_moves=200"));
        assert!(text.contains("Game 3: seed=102"));
        assert!(text.contains("Summary: "));
    }
}
