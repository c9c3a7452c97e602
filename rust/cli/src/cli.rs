//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use tilemerge_engine::game::AfterTerminal;

#[derive(Parser, Debug)]
#[command(
    name = "tilemerge",
    version,
    about = "Sliding-tile merge puzzle in the terminal"
)]
pub struct TilemergeCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively, reading moves from stdin
    Play {
        /// RNG seed for tile spawns (default: config, then random)
        #[arg(long)]
        seed: Option<u64>,
        /// Input handling once the game is won or lost: continue or freeze
        #[arg(long)]
        after_terminal: Option<AfterTerminal>,
    },
    /// Auto-play games with a seeded random move policy
    Sim {
        /// Number of games to play
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        /// RNG seed for spawns and moves (default: config, then random)
        #[arg(long)]
        seed: Option<u64>,
        /// Maximum directional inputs per game (default: config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_moves: Option<u32>,
    },
    /// Print the first tile spawns on an empty board for a seed
    Rng {
        #[arg(long)]
        seed: Option<u64>,
        /// Number of spawns to print
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=16))]
        spawns: u32,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
