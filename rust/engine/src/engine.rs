use tracing::trace;

use crate::grid::{Direction, Grid, Line, SIZE};
use crate::spawn::{pick_index, pick_value, TileSource};

/// Result of sliding a single line: the new line and the points its merges earned.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Slide {
    pub line: Line,
    pub gained: u64,
}

/// Slides one line toward index 0, merging equal neighbours.
///
/// Zeros are dropped, then a single left-to-right pass doubles the left tile
/// of each equal pair and clears the right one. A tile produced by a merge
/// is not compared again in the same pass.
///
/// ```
/// use tilemerge_engine::engine::slide_line;
///
/// let slide = slide_line([2, 2, 2, 2]);
/// assert_eq!(slide.line, [4, 4, 0, 0]);
/// assert_eq!(slide.gained, 8);
/// ```
pub fn slide_line(line: Line) -> Slide {
    let mut tiles: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut gained = 0u64;
    let mut i = 0;
    while i + 1 < tiles.len() {
        if tiles[i] == tiles[i + 1] {
            tiles[i] *= 2;
            gained += u64::from(tiles[i]);
            tiles[i + 1] = 0;
            i += 2;
        } else {
            i += 1;
        }
    }
    let mut out = [0; SIZE];
    for (slot, v) in out.iter_mut().zip(tiles.into_iter().filter(|&v| v != 0)) {
        *slot = v;
    }
    Slide { line: out, gained }
}

fn reversed(mut line: Line) -> Line {
    line.reverse();
    line
}

/// Owns the board and the running score, and applies moves and spawns to them.
///
/// # Examples
///
/// ```
/// use tilemerge_engine::engine::GridEngine;
/// use tilemerge_engine::grid::{Direction, Grid};
///
/// let grid = Grid::from_rows([
///     [0, 2, 0, 2],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ])
/// .unwrap();
/// let mut engine = GridEngine::with_grid(grid);
///
/// assert!(engine.move_tiles(Direction::Left));
/// assert_eq!(engine.grid().row(0), [4, 0, 0, 0]);
/// assert_eq!(engine.score(), 4);
///
/// // Already packed against the left edge
/// assert!(!engine.move_tiles(Direction::Left));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridEngine {
    /// Current board
    grid: Grid,
    /// Sum of every merge result since the last reset
    score: u64,
}

impl GridEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing board with a score of zero.
    pub fn with_grid(grid: Grid) -> Self {
        Self { grid, score: 0 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn reset(&mut self) {
        self.grid = Grid::EMPTY;
        self.score = 0;
    }

    /// Places a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns the cell and value placed, or `None` when the board is full.
    pub fn spawn_tile<T: TileSource + ?Sized>(
        &mut self,
        source: &mut T,
    ) -> Option<(usize, usize, u32)> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[pick_index(source.draw(), empty.len())];
        let value = pick_value(source.draw());
        self.grid.set(row, col, value);
        trace!(row, col, value, "spawned tile");
        Some((row, col, value))
    }

    /// Slides `line` and adds the merge points to the score.
    pub fn slide_line(&mut self, line: Line) -> Line {
        let slide = slide_line(line);
        self.score += slide.gained;
        slide.line
    }

    /// Moves every tile in `direction`. Returns `true` if any cell changed.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        let before = self.grid;
        for i in 0..SIZE {
            match direction {
                Direction::Left => {
                    let line = self.slide_line(self.grid.row(i));
                    self.grid.set_row(i, line);
                }
                Direction::Right => {
                    let line = self.slide_line(reversed(self.grid.row(i)));
                    self.grid.set_row(i, reversed(line));
                }
                Direction::Up => {
                    let line = self.slide_line(self.grid.column(i));
                    self.grid.set_column(i, line);
                }
                Direction::Down => {
                    let line = self.slide_line(reversed(self.grid.column(i)));
                    self.grid.set_column(i, reversed(line));
                }
            }
        }
        self.grid != before
    }

    pub fn has_tile(&self, value: u32) -> bool {
        self.grid.contains(value)
    }

    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }
}
