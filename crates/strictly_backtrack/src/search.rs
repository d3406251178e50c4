//! Capability set consumed by backtracking game-tree search.
//!
//! A search written against [`SearchState`] explores a position by
//! enumerating moves, applying one, recursing, and undoing it before trying
//! the next alternative. Implementations must keep these guarantees:
//!
//! - `legal_moves` is deterministic; the same position yields the same order.
//! - `apply_move` reports illegal input with `false` and leaves the state untouched.
//! - `undo_move` of the last successful `apply_move` restores the exact prior state.
//! - `evaluate` fails with an `InvalidState` error unless `is_terminal` holds.

use crate::StateError;
use std::fmt::Debug;

/// A mutable, reversible game position.
pub trait SearchState {
    /// Move value; compared structurally.
    type Move: Clone + Eq + Debug;

    /// Symbol of the side to move.
    type Mark: Copy + Eq + Debug;

    /// Every legal move, in a fixed order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Whether the game has concluded.
    fn is_terminal(&self) -> bool;

    /// Score of a terminal position from the maximizing side's view.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidState` error when the position is not terminal.
    fn evaluate(&self) -> Result<i32, StateError>;

    /// Plays a move for the side to move. Returns `false` if it is illegal.
    fn apply_move(&mut self, mv: &Self::Move) -> bool;

    /// Reverts a previously applied move.
    ///
    /// # Errors
    ///
    /// Implementations that track history may reject a move that was not
    /// the last one applied.
    fn undo_move(&mut self, mv: &Self::Move) -> Result<(), StateError>;

    /// Mark of the side to move.
    fn current_mark(&self) -> Self::Mark;

    /// Whether the side to move prefers higher `evaluate` scores.
    fn maximizing(&self) -> bool;

    /// Human-readable diagnostic rendering.
    fn render(&self) -> String;
}
