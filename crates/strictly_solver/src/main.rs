//! Strictly Solver - command-line front end
//!
//! Solves tic-tac-toe positions through the `SearchState` capability set.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Side};
use strictly_backtrack::{Grid, Mark, StateConfig, TicTacToeState};
use strictly_solver::Minimax;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => StateConfig::from_file(path)?,
        None => StateConfig::default(),
    };

    match cli.command {
        Command::Solve {
            position,
            to_move,
            no_pruning,
        } => run_solve(&config, position, to_move, no_pruning),
        Command::Selfplay { first } => run_selfplay(&config, first),
    }
}

/// Picks the side to move for a parsed position.
///
/// Equal mark counts hand the move to the configured first side; otherwise
/// the side with fewer marks moves.
fn infer_to_move(grid: &Grid, config: &StateConfig) -> Mark {
    let x = grid.count(Mark::X);
    let o = grid.count(Mark::O);
    if x == o {
        *config.first_to_move()
    } else if x < o {
        Mark::X
    } else {
        Mark::O
    }
}

/// Solve one position and print the report
#[instrument(skip(config))]
fn run_solve(
    config: &StateConfig,
    position: Option<String>,
    to_move: Option<Side>,
    no_pruning: bool,
) -> Result<()> {
    let grid: Grid = match position.as_deref() {
        Some(text) => text
            .parse()
            .with_context(|| format!("Invalid --position '{}'", text))?,
        None => Grid::new(),
    };
    let to_move = to_move
        .map(Mark::from)
        .unwrap_or_else(|| infer_to_move(&grid, config));

    let mut state =
        TicTacToeState::from_grid(&grid, to_move).with_undo_policy(*config.undo_policy());
    debug!(%to_move, "Solving position");

    let report = Minimax::new()
        .with_pruning(!no_pruning)
        .solve(&mut state)?;

    print!("{}", state);
    println!("To move:   {}", to_move);
    println!("Value:     {}", report.score);
    match report.best {
        Some(best) => println!("Best move: {}", best),
        None => println!("Best move: none (position is terminal)"),
    }
    let line: Vec<String> = report.line.iter().map(ToString::to_string).collect();
    println!("Line:      {}", line.join(" "));
    println!("Nodes:     {} ({} leaves)", report.nodes, report.leaves);
    Ok(())
}

/// Play a perfect game from the empty board, printing every ply
#[instrument(skip(config))]
fn run_selfplay(config: &StateConfig, first: Option<Side>) -> Result<()> {
    let first = first.map(Mark::from).unwrap_or(*config.first_to_move());
    let mut state = TicTacToeState::new(first).with_undo_policy(*config.undo_policy());
    let mut solver = Minimax::new();

    info!(%first, "Starting self-play");
    while !state.is_terminal() {
        let mark = state.current_mark();
        let report = solver.solve(&mut state)?;
        let best = report
            .best
            .context("Solver returned no move for a non-terminal position")?;
        if !state.apply_move(&best) {
            anyhow::bail!("Solver chose illegal move {}", best);
        }
        println!("{} plays {} (value {})", mark, best, report.score);
        print!("{}", state);
    }

    match state.winner() {
        Some(mark) => println!("Winner: {}", mark),
        None => println!("Draw"),
    }
    println!("Score: {}", state.evaluate()?);
    Ok(())
}
