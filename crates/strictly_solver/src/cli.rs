//! Command-line interface for strictly_solver.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_backtrack::Mark;

/// Strictly Solver - solve tic-tac-toe positions by backtracking search
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Solve tic-tac-toe positions with minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML state configuration
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a single position and print its value and best line
    Solve {
        /// Grid in row notation, e.g. "XO./.X./..O" (empty board if omitted)
        #[arg(short, long)]
        position: Option<String>,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(short, long, alias = "first", value_enum)]
        to_move: Option<Side>,

        /// Disable alpha-beta pruning
        #[arg(long)]
        no_pruning: bool,
    },

    /// Play a perfect game against itself from the empty board
    Selfplay {
        /// Side that moves first (overrides the config file)
        #[arg(short, long, value_enum)]
        first: Option<Side>,
    },
}

/// A side, as written on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// The X mark
    X,
    /// The O mark
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}
