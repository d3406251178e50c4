//! Error types for state operations.

use crate::Move;
use derive_more::{Display, Error};
use tracing::instrument;

/// The kind of failure a state operation reported.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StateErrorKind {
    /// An operation was called on a position that does not satisfy its precondition.
    #[display("InvalidState: position is not terminal")]
    InvalidState,

    /// An undo did not match the most recently applied move.
    #[display("Undo of {} does not match last applied move {}", found, describe(expected))]
    UndoMismatch {
        /// The move on top of the history, if any.
        expected: Option<Move>,
        /// The move the caller asked to undo.
        found: Move,
    },

    /// Grid text could not be parsed.
    #[display("Invalid grid notation: {}", _0)]
    ParseGrid(String),
}

fn describe(mv: &Option<Move>) -> String {
    match mv {
        Some(mv) => mv.to_string(),
        None => "<none>".to_string(),
    }
}

/// State error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct StateError {
    /// What went wrong.
    pub kind: StateErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StateError {
    /// Creates a new state error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: StateErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &StateErrorKind {
        &self.kind
    }
}

impl From<StateErrorKind> for StateError {
    #[track_caller]
    fn from(kind: StateErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_records_location() {
        let err = StateError::new(StateErrorKind::InvalidState);
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
        assert!(err.to_string().starts_with("InvalidState"));
    }

    #[test]
    fn test_undo_mismatch_message() {
        let kind = StateErrorKind::UndoMismatch {
            expected: None,
            found: Move::new(1, 2),
        };
        assert_eq!(
            kind.to_string(),
            "Undo of (1, 2) does not match last applied move <none>"
        );
    }
}
