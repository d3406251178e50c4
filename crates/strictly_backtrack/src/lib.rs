//! Strictly Backtrack - reversible game state for tree search
//!
//! This library models a tic-tac-toe position that a generic search
//! procedure can explore by applying and undoing moves in place.
//!
//! # Architecture
//!
//! - **SearchState**: the capability set a search algorithm is written against
//! - **TicTacToeState**: grid, side to move, and undo history
//! - **Rules**: win-line scanning and outcome classification
//! - **Config**: starting side and undo policy, loadable from TOML
//!
//! # Example
//!
//! ```
//! use strictly_backtrack::{Mark, Move, TicTacToeState};
//!
//! let mut state = TicTacToeState::new(Mark::X);
//! let mv = Move::new(1, 1);
//! assert!(state.apply_move(&mv));
//! assert_eq!(state.current_mark(), Mark::O);
//! state.undo_move(&mv)?;
//! assert_eq!(state.legal_moves().len(), 9);
//! # Ok::<(), strictly_backtrack::StateError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod search;
mod tictactoe;

// Crate-level exports - Capability trait
pub use search::SearchState;

// Crate-level exports - Errors
pub use error::{StateError, StateErrorKind};

// Crate-level exports - Configuration
pub use config::{ConfigError, StateConfig, UndoPolicy};

// Crate-level exports - Game types (tic-tac-toe)
pub use tictactoe::{
    Cell, Grid, Mark, Move, Outcome, TicTacToeState, WIN_LINES, WinLine, is_full, outcome,
    winner, winning_line,
};
