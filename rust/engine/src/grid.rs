use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GameError;

/// Number of rows and columns on the board.
pub const SIZE: usize = 4;

/// One row or column of the board, ordered in the direction of motion.
pub type Line = [u32; SIZE];

/// Largest tile accepted by [`Grid::from_rows`], the highest a 4×4 board can
/// reach in play. Merges starting from such a board stay within `u32`.
pub const MAX_TILE: u32 = 1 << 17;

/// A direction in which every tile on the board slides.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward column 0
    Left,
    /// Toward column 3
    Right,
    /// Toward row 0
    Up,
    /// Toward row 3
    Down,
}

pub fn all_directions() -> [Direction; 4] {
    [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ]
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The 4×4 board. `0` marks an empty cell; every other value is a power of two.
///
/// Cells are addressed as `(row, col)` with `(0, 0)` in the top-left corner.
///
/// # Examples
///
/// ```
/// use tilemerge_engine::grid::Grid;
///
/// let grid = Grid::from_rows([
///     [2, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 4, 0],
///     [0, 0, 0, 0],
/// ])
/// .expect("valid tiles");
/// assert_eq!(grid.get(2, 2), 4);
/// assert_eq!(grid.empty_cells().len(), 14);
///
/// // 3 is not a power of two
/// assert!(Grid::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Grid {
    /// Cell values, row-major
    cells: [[u32; SIZE]; SIZE],
}

impl Grid {
    /// An all-empty board.
    pub const EMPTY: Grid = Grid {
        cells: [[0; SIZE]; SIZE],
    };

    /// Builds a board from explicit rows, rejecting values that are neither
    /// zero nor a power of two between 2 and [`MAX_TILE`].
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Result<Self, GameError> {
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GameError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    pub(crate) fn set_row(&mut self, row: usize, line: Line) {
        self.cells[row] = line;
    }

    /// Column `col` read top-to-bottom.
    pub fn column(&self, col: usize) -> Line {
        let mut line = [0; SIZE];
        for (row, slot) in line.iter_mut().enumerate() {
            *slot = self.cells[row][col];
        }
        line
    }

    /// Writes `line` into column `col` top-to-bottom.
    pub(crate) fn set_column(&mut self, col: usize, line: Line) {
        for (row, &value) in line.iter().enumerate() {
            self.cells[row][col] = value;
        }
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::with_capacity(SIZE * SIZE);
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] == 0 {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().flatten().any(|&v| v == value)
    }

    pub fn is_full(&self) -> bool {
        !self.contains(0)
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

fn is_valid_tile(value: u32) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}
