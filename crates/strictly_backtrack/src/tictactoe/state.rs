//! Reversible tic-tac-toe position.

use super::action::Move;
use super::rules::{self, Outcome};
use super::types::{Cell, Grid, Mark};
use crate::{SearchState, StateConfig, StateError, StateErrorKind, UndoPolicy};
use tracing::{debug, instrument, warn};

/// A tic-tac-toe position that can be mutated and reverted in place.
///
/// The state owns its grid, the mark to move, and the stack of moves applied
/// since construction. A successful [`apply_move`](Self::apply_move) writes the
/// current mark and passes the turn; [`undo_move`](Self::undo_move) clears the
/// cell and passes the turn back.
///
/// Terminal status is recomputed from the grid on every call. Nothing stops a
/// caller from applying moves past a win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeState {
    grid: Grid,
    to_move: Mark,
    history: Vec<Move>,
    undo_policy: UndoPolicy,
}

impl TicTacToeState {
    /// Creates an empty position with `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            grid: Grid::new(),
            to_move: first,
            history: Vec::new(),
            undo_policy: UndoPolicy::default(),
        }
    }

    /// Creates an empty position from configuration.
    #[instrument(skip(config), fields(first = %config.first_to_move()))]
    pub fn with_config(config: &StateConfig) -> Self {
        Self::new(*config.first_to_move()).with_undo_policy(*config.undo_policy())
    }

    /// Creates an independent position holding a copy of `grid`.
    ///
    /// The new state has an empty history, so under [`UndoPolicy::Strict`]
    /// none of the copied marks can be undone.
    #[instrument(skip(grid))]
    pub fn from_grid(grid: &Grid, to_move: Mark) -> Self {
        Self {
            grid: *grid,
            to_move,
            history: Vec::new(),
            undo_policy: UndoPolicy::default(),
        }
    }

    /// Replaces the undo policy.
    pub fn with_undo_policy(mut self, undo_policy: UndoPolicy) -> Self {
        self.undo_policy = undo_policy;
        self
    }

    /// Returns the mark of the side to move.
    pub fn current_mark(&self) -> Mark {
        self.to_move
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the raw turn indicator: `true` when `O` is to move.
    pub fn is_o_to_move(&self) -> bool {
        self.to_move.turn_flag()
    }

    /// Moves applied since construction and not yet undone, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the undo policy.
    pub fn undo_policy(&self) -> UndoPolicy {
        self.undo_policy
    }

    /// Formats the grid for diagnostics.
    pub fn render(&self) -> String {
        self.grid.to_string()
    }

    /// Every empty cell in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(9);
        for row in 0..Grid::SIZE {
            for col in 0..Grid::SIZE {
                if self.grid.is_empty(row, col) {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Checks whether a win-line is complete or the grid is full.
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Returns the mark of the first complete win-line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(&self.grid)
    }

    /// Classifies the position, or `None` while the game is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        rules::outcome(&self.grid)
    }

    /// Scores a terminal position: +1 for an `X` line, -1 for an `O` line,
    /// 0 for a draw.
    ///
    /// # Errors
    ///
    /// Returns [`StateErrorKind::InvalidState`] if the game is not over.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Result<i32, StateError> {
        match self.outcome() {
            Some(outcome) => Ok(outcome.score()),
            None => {
                debug!("Evaluate called on non-terminal position");
                Err(StateErrorKind::InvalidState.into())
            }
        }
    }

    /// Places the current mark at `mv` and passes the turn.
    ///
    /// Returns `false` and changes nothing if `mv` is off the grid or its cell
    /// is occupied.
    #[instrument(level = "trace", skip(self), fields(mv = %mv, mark = %self.to_move))]
    pub fn apply_move(&mut self, mv: &Move) -> bool {
        if !mv.in_bounds() {
            debug!("Rejected move: out of range");
            return false;
        }
        if self.grid.at(mv) != Some(Cell::Empty) {
            debug!("Rejected move: cell occupied");
            return false;
        }

        self.grid
            .set(mv.row(), mv.col(), Cell::Marked(self.to_move));
        self.history.push(*mv);
        self.to_move = self.to_move.opponent();
        true
    }

    /// Reverts `mv` and passes the turn back.
    ///
    /// Under [`UndoPolicy::Strict`] `mv` must be the last applied move still
    /// on the history. Under [`UndoPolicy::Unchecked`] the cell is cleared
    /// whatever it holds, the latest matching history entry is dropped, and
    /// the call always succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StateErrorKind::UndoMismatch`] under the strict policy when
    /// `mv` is not the most recent move. The state is left unchanged.
    #[instrument(level = "trace", skip(self), fields(mv = %mv, policy = ?self.undo_policy))]
    pub fn undo_move(&mut self, mv: &Move) -> Result<(), StateError> {
        let last = self.history.last().copied();
        match self.undo_policy {
            UndoPolicy::Strict => {
                if last != Some(*mv) {
                    warn!(expected = ?last, found = %mv, "Undo does not match last applied move");
                    return Err(StateErrorKind::UndoMismatch {
                        expected: last,
                        found: *mv,
                    }
                    .into());
                }
                self.history.pop();
                self.grid.set(mv.row(), mv.col(), Cell::Empty);
            }
            UndoPolicy::Unchecked => {
                if let Some(i) = self.history.iter().rposition(|m| m == mv) {
                    self.history.remove(i);
                }
                if mv.in_bounds() {
                    self.grid.set(mv.row(), mv.col(), Cell::Empty);
                }
            }
        }
        self.to_move = self.to_move.opponent();
        Ok(())
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::with_config(&StateConfig::default())
    }
}

impl std::fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl SearchState for TicTacToeState {
    type Move = Move;
    type Mark = Mark;

    fn legal_moves(&self) -> Vec<Move> {
        TicTacToeState::legal_moves(self)
    }

    fn is_terminal(&self) -> bool {
        TicTacToeState::is_terminal(self)
    }

    fn evaluate(&self) -> Result<i32, StateError> {
        TicTacToeState::evaluate(self)
    }

    fn apply_move(&mut self, mv: &Move) -> bool {
        TicTacToeState::apply_move(self, mv)
    }

    fn undo_move(&mut self, mv: &Move) -> Result<(), StateError> {
        TicTacToeState::undo_move(self, mv)
    }

    fn current_mark(&self) -> Mark {
        self.to_move
    }

    fn maximizing(&self) -> bool {
        self.to_move == Mark::X
    }

    fn render(&self) -> String {
        TicTacToeState::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str, to_move: Mark) -> TicTacToeState {
        TicTacToeState::from_grid(&s.parse().unwrap(), to_move)
    }

    #[test]
    fn test_new_is_empty() {
        let state = TicTacToeState::new(Mark::O);
        assert_eq!(*state.grid(), Grid::new());
        assert_eq!(state.current_mark(), Mark::O);
        assert!(state.is_o_to_move());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_apply_writes_current_mark_and_passes_turn() {
        let mut state = TicTacToeState::new(Mark::X);
        assert!(state.apply_move(&Move::new(1, 1)));
        assert_eq!(state.grid().get(1, 1), Some(Cell::Marked(Mark::X)));
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.history(), &[Move::new(1, 1)]);
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let mut state = state("X../.../...", Mark::O);
        let before = state.clone();
        assert!(!state.apply_move(&Move::new(0, 0)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        let mut state = TicTacToeState::new(Mark::X);
        assert!(!state.apply_move(&Move::new(3, 0)));
        assert!(!state.apply_move(&Move::new(0, 3)));
        assert_eq!(state, TicTacToeState::new(Mark::X));
    }

    #[test]
    fn test_strict_undo_rejects_out_of_order() {
        let mut state = TicTacToeState::new(Mark::X);
        assert!(state.apply_move(&Move::new(0, 0)));
        assert!(state.apply_move(&Move::new(1, 1)));
        let before = state.clone();

        let err = state.undo_move(&Move::new(0, 0)).unwrap_err();
        assert_eq!(
            *err.kind(),
            StateErrorKind::UndoMismatch {
                expected: Some(Move::new(1, 1)),
                found: Move::new(0, 0),
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_strict_undo_rejects_copied_marks() {
        let mut state = state("X../.../...", Mark::O);
        assert!(state.undo_move(&Move::new(0, 0)).is_err());
        assert_eq!(state.grid().get(0, 0), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn test_unchecked_undo_clears_any_cell() {
        let mut state = state("X../.../...", Mark::O).with_undo_policy(UndoPolicy::Unchecked);
        assert!(state.undo_move(&Move::new(0, 0)).is_ok());
        assert_eq!(state.grid().get(0, 0), Some(Cell::Empty));
        assert_eq!(state.current_mark(), Mark::X);

        // Off-grid and empty targets are accepted silently.
        assert!(state.undo_move(&Move::new(4, 4)).is_ok());
        assert!(state.undo_move(&Move::new(2, 2)).is_ok());
        assert_eq!(*state.grid(), Grid::new());
    }

    #[test]
    fn test_unchecked_out_of_order_undo_drops_history_entry() {
        let mut state = TicTacToeState::new(Mark::X).with_undo_policy(UndoPolicy::Unchecked);
        let a = Move::new(0, 0);
        let b = Move::new(1, 1);
        for _ in 0..5 {
            assert!(state.apply_move(&a));
            assert!(state.apply_move(&b));
            state.undo_move(&a).unwrap();
            state.undo_move(&b).unwrap();
        }
        assert_eq!(state.grid().count_marked(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_evaluate_non_terminal_fails() {
        let state = state("XO./.X./...", Mark::O);
        assert!(!state.is_terminal());
        let err = state.evaluate().unwrap_err();
        assert_eq!(*err.kind(), StateErrorKind::InvalidState);
    }

    #[test]
    fn test_mutation_allowed_past_terminal() {
        let mut state = state("XXX/OO./...", Mark::O);
        assert!(state.is_terminal());
        assert!(state.apply_move(&Move::new(2, 2)));
        assert_eq!(state.evaluate().unwrap(), 1);
    }
}
