use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info};

use crate::engine::GridEngine;
use crate::errors::GameError;
use crate::grid::{Direction, Grid};
use crate::spawn::TileSource;

/// Tile value that wins the game.
pub const WIN_TILE: u32 = 2048;

/// Number of tiles placed by [`GameController::start`].
pub const STARTING_TILES: usize = 2;

/// Where a game session stands.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are being played
    #[default]
    InProgress,
    /// A tile reached [`WIN_TILE`]
    Won,
    /// Every cell is occupied
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// What the controller does with directional input once the game is won or lost.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AfterTerminal {
    /// Keep moving tiles; the status stays terminal
    #[default]
    Continue,
    /// Ignore directional input until the next `start`
    Freeze,
}

impl AfterTerminal {
    pub fn as_str(&self) -> &'static str {
        match self {
            AfterTerminal::Continue => "continue",
            AfterTerminal::Freeze => "freeze",
        }
    }
}

impl FromStr for AfterTerminal {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" => Ok(AfterTerminal::Continue),
            "freeze" => Ok(AfterTerminal::Freeze),
            _ => Err(GameError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Read model handed to the presentation layer after every visible change.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents
    pub grid: Grid,
    /// Running score
    pub score: u64,
    /// Session status after the change
    pub status: GameStatus,
}

/// Receives the read model whenever the controller requests a redraw.
pub trait PresentationSink {
    fn redraw(&mut self, view: &Snapshot);
}

/// Discards every redraw.
impl PresentationSink for () {
    fn redraw(&mut self, _view: &Snapshot) {}
}

/// Collects every redraw in order.
impl PresentationSink for Vec<Snapshot> {
    fn redraw(&mut self, view: &Snapshot) {
        self.push(*view);
    }
}

/// Drives one game session: lifecycle, moves, spawns and win/lose detection.
///
/// The tile source and the presentation sink are supplied by the host, so a
/// scripted source makes every session reproducible.
///
/// # Examples
///
/// ```
/// use tilemerge_engine::game::{GameController, GameStatus, Snapshot};
/// use tilemerge_engine::grid::Direction;
/// use tilemerge_engine::spawn::SeededTiles;
///
/// let mut game = GameController::new(SeededTiles::new_with_seed(42), Vec::<Snapshot>::new());
/// game.start();
/// assert_eq!(game.engine().grid().empty_cells().len(), 14);
/// assert_eq!(game.sink().len(), 1);
///
/// game.apply_direction(Direction::Left);
/// assert_eq!(game.status(), GameStatus::InProgress);
/// ```
#[derive(Debug)]
pub struct GameController<T, S> {
    /// Board and score
    engine: GridEngine,
    /// Current session status
    status: GameStatus,
    /// Randomness for new tiles
    tiles: T,
    /// Presentation layer notified on every redraw
    sink: S,
    /// Handling of input after Won or Lost
    after_terminal: AfterTerminal,
}

impl<T: TileSource, S: PresentationSink> GameController<T, S> {
    pub fn new(tiles: T, sink: S) -> Self {
        Self::with_policy(tiles, sink, AfterTerminal::default())
    }

    pub fn with_policy(tiles: T, sink: S, after_terminal: AfterTerminal) -> Self {
        Self::with_engine(GridEngine::new(), tiles, sink, after_terminal)
    }

    /// Continues play from an existing engine state without calling `start`.
    pub fn with_engine(
        engine: GridEngine,
        tiles: T,
        sink: S,
        after_terminal: AfterTerminal,
    ) -> Self {
        Self {
            engine,
            status: GameStatus::InProgress,
            tiles,
            sink,
            after_terminal,
        }
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn after_terminal(&self) -> AfterTerminal {
        self.after_terminal
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn tiles(&self) -> &T {
        &self.tiles
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: *self.engine.grid(),
            score: self.engine.score(),
            status: self.status,
        }
    }

    /// Clears the board, places the starting tiles and redraws.
    pub fn start(&mut self) {
        self.engine.reset();
        self.status = GameStatus::InProgress;
        for _ in 0..STARTING_TILES {
            self.engine.spawn_tile(&mut self.tiles);
        }
        info!("game started");
        self.redraw();
    }

    /// Applies one directional input. Returns `true` if the board changed.
    ///
    /// A move that changes nothing is ignored entirely: no tile is spawned,
    /// the status is not re-evaluated and no redraw is requested.
    pub fn apply_direction(&mut self, direction: Direction) -> bool {
        if self.status.is_terminal() && self.after_terminal == AfterTerminal::Freeze {
            debug!(%direction, status = ?self.status, "input ignored after game end");
            return false;
        }
        let changed = self.engine.move_tiles(direction);
        debug!(%direction, changed, score = self.engine.score(), "move applied");
        if !changed {
            return false;
        }
        self.engine.spawn_tile(&mut self.tiles);
        self.evaluate_status();
        self.redraw();
        true
    }

    fn evaluate_status(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        let next = if self.engine.has_tile(WIN_TILE) {
            GameStatus::Won
        } else if self.engine.is_full() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        if next != self.status {
            info!(status = ?next, score = self.engine.score(), "game reached terminal status");
            self.status = next;
        }
    }

    fn redraw(&mut self) {
        let view = self.snapshot();
        self.sink.redraw(&view);
    }
}
