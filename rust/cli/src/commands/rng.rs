//! Tile spawn determinism check.
//!
//! The `rng` command places tiles on an empty board with the seeded
//! ChaCha20 tile source and prints where they landed, so two runs with the
//! same seed can be compared by eye or by script.

use crate::error::CliError;
use std::io::Write;
use tilemerge_engine::engine::GridEngine;
use tilemerge_engine::spawn::SeededTiles;

/// Handle the rng command.
///
/// # Arguments
///
/// * `seed` - Optional seed value (uses a random seed if None)
/// * `spawns` - Number of tiles to place (at most 16)
/// * `out` - Output stream for the sample
///
/// # Example
///
/// ```ignore
/// # use std::io;
/// let mut out = io::stdout();
/// handle_rng_command(Some(12345), 5, &mut out).expect("rng command failed");
/// ```
pub fn handle_rng_command(
    seed: Option<u64>,
    spawns: u32,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut tiles = SeededTiles::new_with_seed(s);
    let mut engine = GridEngine::new();
    let mut placed = vec![];
    for _ in 0..spawns {
        if let Some((row, col, value)) = engine.spawn_tile(&mut tiles) {
            placed.push(format!("({},{})={}", row, col, value));
        }
    }
    writeln!(out, "Spawn sample (seed={}): [{}]", s, placed.join(", "))?;
    Ok(())
}
