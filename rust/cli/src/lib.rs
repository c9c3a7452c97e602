//! # tilemerge CLI Library
//!
//! Terminal host for the tilemerge engine: it maps typed keys to moves,
//! renders the board after every redraw and exposes a few tooling commands.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand,
//! writing to the streams it is given and returning an exit code.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["tilemerge", "play", "--seed", "42"];
//! let code = tilemerge_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive game reading moves from stdin
//! - `sim`: Auto-play games with a seeded random policy
//! - `rng`: Print tile spawns for a seed
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
#[macro_use]
mod macros;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, TilemergeCli};
use commands::{
    handle_cfg_command, handle_play_command, handle_rng_command, handle_sim_command,
};

pub use commands::{SimResult, simulate_game};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["tilemerge", "rng", "--seed", "42"];
/// let code = tilemerge_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], but `play` reads its moves from `stdin` instead of the
/// process's standard input.
///
/// ```
/// use std::io::{self, Cursor};
/// let mut moves = Cursor::new("left up q\n");
/// let mut out = Vec::new();
/// let code = tilemerge_cli::run_with_input(
///     ["tilemerge", "play", "--seed", "1"],
///     &mut moves,
///     &mut out,
///     &mut io::stderr(),
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "rng", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TilemergeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                write_or_exit!(out, "{}", e);
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: tilemerge <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: tilemerge --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            seed,
            after_terminal,
        } => handle_play_command(seed, after_terminal, out, err, stdin),
        Commands::Sim {
            games,
            seed,
            max_moves,
        } => handle_sim_command(games, seed, max_moves, out),
        Commands::Rng { seed, spawns } => handle_rng_command(seed, spawns, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
