//! # tilemerge-engine: Sliding-Tile Merge Puzzle Core
//!
//! A deterministic 4×4 sliding-tile merge engine. Directional moves slide and
//! merge tiles, a new tile appears after every move that changes the board,
//! and the session ends when a 2048 tile appears or the board fills up.
//!
//! ## Core Modules
//!
//! - [`grid`] - Board representation, directions and line access
//! - [`engine`] - The slide/merge algorithm, spawns and score keeping
//! - [`spawn`] - Injectable tile sources (seeded ChaCha20 or scripted draws)
//! - [`game`] - Session lifecycle, win/lose detection and the presentation read model
//! - [`input`] - Key name to direction mapping for hosts
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use tilemerge_engine::game::{GameController, GameStatus};
//! use tilemerge_engine::input::direction_for_key;
//! use tilemerge_engine::spawn::SeededTiles;
//!
//! let mut game = GameController::new(SeededTiles::new_with_seed(7), ());
//! game.start();
//!
//! for key in ["ArrowLeft", "ArrowUp", "Tab", "ArrowRight"] {
//!     // keys without a direction are dropped by the host
//!     if let Some(dir) = direction_for_key(key) {
//!         game.apply_direction(dir);
//!     }
//! }
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Two controllers fed the same seed and the same moves end in the same state:
//!
//! ```rust
//! use tilemerge_engine::game::GameController;
//! use tilemerge_engine::grid::Direction;
//! use tilemerge_engine::spawn::SeededTiles;
//!
//! let play = |seed| {
//!     let mut game = GameController::new(SeededTiles::new_with_seed(seed), ());
//!     game.start();
//!     for dir in [Direction::Down, Direction::Left, Direction::Up] {
//!         game.apply_direction(dir);
//!     }
//!     game.snapshot()
//! };
//! assert_eq!(play(42), play(42));
//! ```

pub mod engine;
pub mod errors;
pub mod game;
pub mod grid;
pub mod input;
pub mod spawn;
