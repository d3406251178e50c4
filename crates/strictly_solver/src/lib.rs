//! Strictly Solver - minimax driver for reversible game states
//!
//! The driver is written only against [`strictly_backtrack::SearchState`].
//! It owns no game state; each call to [`Minimax::solve`] borrows one
//! position, explores it by apply/undo, and hands it back unchanged.
//!
//! # Example
//!
//! ```
//! use strictly_backtrack::{Mark, TicTacToeState};
//! use strictly_solver::Minimax;
//!
//! let mut state = TicTacToeState::new(Mark::X);
//! let report = Minimax::new().solve(&mut state)?;
//! assert_eq!(report.score, 0);
//! # Ok::<(), strictly_solver::SolverError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod minimax;

// Crate-level exports - Search
pub use error::SolverError;
pub use minimax::{Minimax, SearchReport};
