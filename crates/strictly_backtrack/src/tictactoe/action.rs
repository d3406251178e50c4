//! Move values for tic-tac-toe.
//!
//! Moves are transient coordinates. They carry no mark and no reference to a
//! state; the state that receives a move decides whether it is legal.

use serde::{Deserialize, Serialize};

/// A grid cell targeted by a ply.
///
/// Equality and hashing use the row and column only. Coordinates are not
/// validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Returns the row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Checks that both coordinates lie on the 3x3 grid.
    pub fn in_bounds(&self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
