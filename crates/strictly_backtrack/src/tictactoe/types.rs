//! Core domain types for tic-tac-toe positions.

use crate::{Move, StateError, StateErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A mark placed by one side.
///
/// `X` is the first mark and scores positive; `O` is the second mark and
/// scores negative.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// The first mark.
    X,
    /// The second mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Maps a raw turn indicator to the mark to move.
    ///
    /// `true` means `O` is to move.
    pub fn from_turn(o_to_move: bool) -> Self {
        if o_to_move { Mark::O } else { Mark::X }
    }

    /// Returns the raw turn indicator for this mark.
    pub fn turn_flag(self) -> bool {
        self == Mark::O
    }

    /// Score of a line completed by this mark.
    pub fn score(self) -> i32 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

/// 3x3 grid, row-major.
///
/// The grid has no public mutators. Cells change only through
/// [`TicTacToeState::apply_move`](crate::TicTacToeState::apply_move) and
/// [`TicTacToeState::undo_move`](crate::TicTacToeState::undo_move).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; 3]; 3],
}

impl Grid {
    /// Side length of the grid.
    pub const SIZE: usize = 3;

    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from explicit rows.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Gets the cell a move targets.
    pub fn at(&self, mv: &Move) -> Option<Cell> {
        self.get(mv.row(), mv.col())
    }

    /// Checks if the cell at `(row, col)` exists and is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn count_marked(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c != Cell::Empty)
            .count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Marked(mark))
            .count()
    }

    /// Writes a cell. Callers have already checked the coordinates.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const BAR: &str = " -------------";
        writeln!(f, "{}", BAR)?;
        for row in &self.cells {
            for cell in row {
                write!(f, " | {}", cell.symbol())?;
            }
            writeln!(f, " |")?;
            writeln!(f, "{}", BAR)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = StateError;

    /// Parses nine cells: `X`, `O`, and `.` or `-` for empty.
    ///
    /// `/` and whitespace are ignored, so `"XO./.X./..O"` and `"XO. .X. ..O"`
    /// describe the same grid.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            let cell = match ch.to_ascii_uppercase() {
                'X' => Cell::Marked(Mark::X),
                'O' => Cell::Marked(Mark::O),
                '.' | '-' => Cell::Empty,
                other => {
                    return Err(StateErrorKind::ParseGrid(format!(
                        "unexpected character '{}'",
                        other
                    ))
                    .into());
                }
            };
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(StateErrorKind::ParseGrid(format!(
                "expected 9 cells, found {}",
                cells.len()
            ))
            .into());
        }

        let mut grid = Grid::new();
        for (idx, cell) in cells.into_iter().enumerate() {
            grid.set(idx / 3, idx % 3, cell);
        }
        Ok(grid)
    }
}
