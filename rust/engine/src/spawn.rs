use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Probability that a spawned tile is a 2 rather than a 4.
pub const TWO_PROBABILITY: f64 = 0.9;

/// Source of uniform draws in `[0, 1)` used to place new tiles.
///
/// A spawn consumes two draws: the first picks the empty cell, the second
/// picks the value. Swapping the source is the only way randomness enters
/// the engine.
pub trait TileSource {
    fn draw(&mut self) -> f64;
}

/// Maps a draw onto an index in `0..len`. `len` must be non-zero.
pub(crate) fn pick_index(draw: f64, len: usize) -> usize {
    ((draw * len as f64) as usize).min(len - 1)
}

/// Maps a draw onto a new tile value.
pub fn pick_value(draw: f64) -> u32 {
    if draw < TWO_PROBABILITY {
        2
    } else {
        4
    }
}

/// Reproducible tile source backed by ChaCha20.
///
/// # Examples
///
/// ```
/// use tilemerge_engine::spawn::{SeededTiles, TileSource};
///
/// let mut a = SeededTiles::new_with_seed(7);
/// let mut b = SeededTiles::new_with_seed(7);
/// assert_eq!(a.draw(), b.draw());
/// ```
#[derive(Debug, Clone)]
pub struct SeededTiles {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededTiles {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TileSource for SeededTiles {
    fn draw(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Tile source replaying a fixed sequence of draws, wrapping around at the end.
/// An empty script always draws `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTiles {
    draws: Vec<f64>,
    position: usize,
}

impl ScriptedTiles {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            position: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl TileSource for ScriptedTiles {
    fn draw(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let d = self.draws[self.position % self.draws.len()];
        self.position += 1;
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_index_covers_range_and_clamps() {
        assert_eq!(pick_index(0.0, 16), 0);
        assert_eq!(pick_index(0.999, 16), 15);
        assert_eq!(pick_index(0.95, 15), 14);
        assert_eq!(pick_index(1.0, 3), 2);
    }

    #[test]
    fn pick_value_splits_at_ninety_percent() {
        assert_eq!(pick_value(0.0), 2);
        assert_eq!(pick_value(0.8999), 2);
        assert_eq!(pick_value(0.9), 4);
        assert_eq!(pick_value(0.99), 4);
    }

    #[test]
    fn scripted_tiles_wrap_around() {
        let mut tiles = ScriptedTiles::new(vec![0.1, 0.2]);
        assert_eq!(tiles.draw(), 0.1);
        assert_eq!(tiles.draw(), 0.2);
        assert_eq!(tiles.draw(), 0.1);
        assert_eq!(tiles.consumed(), 3);
    }

    #[test]
    fn empty_script_draws_zero() {
        let mut tiles = ScriptedTiles::default();
        assert_eq!(tiles.draw(), 0.0);
    }

    #[test]
    fn seeded_draws_stay_in_unit_interval() {
        let mut tiles = SeededTiles::new_with_seed(99);
        for _ in 0..1000 {
            let d = tiles.draw();
            assert!((0.0..1.0).contains(&d));
        }
    }
}
