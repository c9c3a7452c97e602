//! Command handler modules for the tilemerge CLI.
//!
//! Each subcommand lives in its own file and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`, taking its output
//! streams (and stdin, for `play`) as parameters so tests can drive it with
//! in-memory buffers.

mod cfg;
mod play;
mod rng;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::{SimResult, handle_sim_command, simulate_game};
