//! Search errors.

use derive_more::{Display, Error, From};
use strictly_backtrack::StateError;

/// Failure raised while driving a search.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SolverError {
    /// The state reported an error (bad evaluate or mismatched undo).
    #[display("State error: {}", _0)]
    State(StateError),

    /// The state rejected a move it had just listed as legal.
    #[display("Enumerated move {} was rejected", _0)]
    #[from(ignore)]
    RejectedMove(#[error(not(source))] String),

    /// A non-terminal position offered no moves.
    #[display("Non-terminal position has no legal moves")]
    #[from(ignore)]
    NoMoves,
}
