//! # Play Command
//!
//! Interactive game on a line-oriented terminal.
//!
//! Each input line may hold several tokens (`left up up r q`). Directional
//! tokens are mapped through the engine's key mapping; `r` restarts and `q`
//! or end of input quits. Every redraw requested by the controller is
//! printed as a frame with the score, the board and any win/lose message.

use crate::config;
use crate::error::CliError;
use crate::formatters::{FrameBuffer, START_MESSAGE};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_play_line};
use std::io::{BufRead, Write};
use tilemerge_engine::game::{AfterTerminal, GameController};
use tilemerge_engine::spawn::SeededTiles;

type Session = GameController<SeededTiles, FrameBuffer>;

/// Handle the play command.
///
/// # Arguments
///
/// * `seed` - Tile spawn seed; falls back to configuration, then a random seed
/// * `after_terminal` - Post-game input policy; falls back to configuration
/// * `out` - Output stream for frames and the session summary
/// * `err` - Error stream for warnings about ignored input
/// * `stdin` - Input stream of move tokens
///
/// # Errors
///
/// Returns `CliError::Config` if configuration cannot be loaded and
/// `CliError::Io` if writing to `out` or `err` fails.
pub fn handle_play_command(
    seed: Option<u64>,
    after_terminal: Option<AfterTerminal>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let policy = after_terminal.unwrap_or(cfg.after_terminal);

    writeln!(out, "play: seed={} after_terminal={}", seed, policy.as_str())?;
    writeln!(out, "{}", START_MESSAGE)?;

    let mut game = GameController::with_policy(
        SeededTiles::new_with_seed(seed),
        FrameBuffer::new(),
        policy,
    );
    game.start();
    write_frames(&mut game, out)?;

    let mut games = 1u32;
    let mut moves = 0u32;
    'session: loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        for parsed in parse_play_line(&line) {
            match parsed {
                ParseResult::Move(dir) => {
                    if game.apply_direction(dir) {
                        moves += 1;
                    } else if game.status().is_terminal() && policy == AfterTerminal::Freeze {
                        ui::display_warning(err, "Game is over; press r to restart.")?;
                    }
                }
                ParseResult::Restart => {
                    games += 1;
                    game.start();
                }
                ParseResult::Quit => break 'session,
                ParseResult::Invalid(msg) => ui::display_warning(err, &msg)?,
            }
            write_frames(&mut game, out)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Final score: {}", game.engine().score())?;
    writeln!(out, "Highest tile: {}", game.engine().grid().highest_tile())?;
    writeln!(out, "Session games={} moves={}", games, moves)?;
    Ok(())
}

fn write_frames(game: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
    for frame in game.sink_mut().take_frames() {
        write!(out, "{}", frame)?;
    }
    Ok(())
}
