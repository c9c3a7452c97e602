//! Text rendering of the game read model for terminal display.
//!
//! ```rust
//! use tilemerge_cli::formatters::format_grid;
//! use tilemerge_engine::grid::Grid;
//!
//! let grid = Grid::from_rows([[2, 0, 0, 2048], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let text = format_grid(&grid);
//! assert!(text.contains("2048"));
//! assert_eq!(text.lines().count(), 9);
//! ```

use tilemerge_engine::game::{GameStatus, PresentationSink, Snapshot};
use tilemerge_engine::grid::Grid;

const CELL_WIDTH: usize = 6;

pub const WIN_MESSAGE: &str = "You reached 2048! Keep going or press r to restart.";
pub const LOSE_MESSAGE: &str = "No empty cells left. Game over. Press r to restart.";
pub const START_MESSAGE: &str = "Move with arrows/left/right/up/down, wasd or hjkl. r restarts, q quits.";

/// Format one cell, centered. Empty cells render as a dot.
pub fn format_cell(value: u32) -> String {
    let text = match value {
        0 => ".".to_string(),
        v => v.to_string(),
    };
    format!("{:^width$}", text, width = CELL_WIDTH)
}

/// Format the board with a ruled border, one text line per row plus separators.
pub fn format_grid(grid: &Grid) -> String {
    let rule = format!("+{}", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(4));
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for row in grid.rows() {
        out.push('|');
        for &v in row {
            out.push_str(&format_cell(v));
            out.push('|');
        }
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
    }
    out
}

/// Message to show for a status, if any.
pub fn status_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won => Some(WIN_MESSAGE),
        GameStatus::Lost => Some(LOSE_MESSAGE),
    }
}

/// Full frame: score line, board and the status message when terminal.
pub fn format_frame(view: &Snapshot) -> String {
    let mut out = format!("Score: {}\n", view.score);
    out.push_str(&format_grid(&view.grid));
    if let Some(msg) = status_message(view.status) {
        out.push_str(msg);
        out.push('\n');
    }
    out
}

/// Presentation sink that renders each redraw into a pending text frame.
///
/// The command loop drains the frames and writes them, so write errors
/// surface where they can be propagated.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    frames: Vec<String>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_frames(&mut self) -> Vec<String> {
        std::mem::take(&mut self.frames)
    }
}

impl PresentationSink for FrameBuffer {
    fn redraw(&mut self, view: &Snapshot) {
        self.frames.push(format_frame(view));
    }
}
