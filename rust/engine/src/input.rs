//! Mapping from raw key names to board directions.
//!
//! Hosts translate whatever their input layer produces into a key name and
//! call [`direction_for_key`]. Keys with no mapping return `None` and the
//! host drops them; the engine never sees them.

use crate::grid::Direction;

/// Maps a key name to a direction, case-insensitively.
///
/// Accepts browser-style arrow names (`ArrowLeft`), plain words (`left`),
/// WASD and vi-style `hjkl`.
///
/// ```
/// use tilemerge_engine::grid::Direction;
/// use tilemerge_engine::input::direction_for_key;
///
/// assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
/// assert_eq!(direction_for_key("d"), Some(Direction::Right));
/// assert_eq!(direction_for_key("Enter"), None);
/// ```
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key.trim().to_ascii_lowercase().as_str() {
        "arrowleft" | "left" | "a" | "h" => Some(Direction::Left),
        "arrowright" | "right" | "d" | "l" => Some(Direction::Right),
        "arrowup" | "up" | "w" | "k" => Some(Direction::Up),
        "arrowdown" | "down" | "s" | "j" => Some(Direction::Down),
        _ => None,
    }
}
