use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid tile value {value} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, value: u32 },
    #[error("Unknown post-terminal policy: {0} (expected continue or freeze)")]
    UnknownPolicy(String),
}
