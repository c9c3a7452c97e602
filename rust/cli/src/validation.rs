//! Parsing of interactive input for the `play` command.

use tilemerge_engine::grid::Direction;
use tilemerge_engine::input::direction_for_key;

/// Outcome of parsing one token typed during `play`.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A directional move
    Move(Direction),
    /// Start a fresh game (r, restart or new)
    Restart,
    /// Leave the session (q or quit)
    Quit,
    /// Anything else, with a message for the player
    Invalid(String),
}

/// Parse a single whitespace-free token, case-insensitively.
///
/// Directions use the engine's key mapping, so arrow names, words, WASD and
/// hjkl are all accepted.
///
/// ```rust
/// # use tilemerge_cli::validation::{parse_play_token, ParseResult};
/// use tilemerge_engine::grid::Direction;
///
/// assert_eq!(parse_play_token("up"), ParseResult::Move(Direction::Up));
/// assert_eq!(parse_play_token("R"), ParseResult::Restart);
/// assert_eq!(parse_play_token("quit"), ParseResult::Quit);
/// assert!(matches!(parse_play_token("jump"), ParseResult::Invalid(_)));
/// ```
pub fn parse_play_token(token: &str) -> ParseResult {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    match token.as_str() {
        "q" | "quit" => return ParseResult::Quit,
        "r" | "restart" | "new" => return ParseResult::Restart,
        _ => {}
    }
    match direction_for_key(&token) {
        Some(dir) => ParseResult::Move(dir),
        None => ParseResult::Invalid(format!(
            "Unrecognized input '{}' (use left/right/up/down, wasd, hjkl, r, q)",
            token
        )),
    }
}

/// Split a line into tokens and parse each one.
pub fn parse_play_line(line: &str) -> Vec<ParseResult> {
    line.split_whitespace().map(parse_play_token).collect()
}
