//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`]. Win-lines are scanned in a fixed order:
//! rows top to bottom, columns left to right, the main diagonal, then the
//! anti-diagonal. When several lines are complete the first one in that
//! order is reported.

use super::types::{Cell, Grid, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Coordinates of one win-line.
pub type WinLine = [(usize, usize); 3];

/// All 8 win-lines in scan order.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a win-line.
    Won(Mark),
    /// The grid filled with no complete line.
    Draw,
}

impl Outcome {
    /// Score from the first mark's point of view: +1, -1 or 0.
    pub fn score(self) -> i32 {
        match self {
            Outcome::Won(mark) => mark.score(),
            Outcome::Draw => 0,
        }
    }
}

/// Returns the first complete win-line and its mark.
#[instrument(skip(grid))]
pub fn winning_line(grid: &Grid) -> Option<(WinLine, Mark)> {
    for line in WIN_LINES {
        let [a, b, c] = line.map(|(r, col)| grid.get(r, col).unwrap_or_default());
        if let Some(mark) = a.mark()
            && a == b
            && b == c
        {
            return Some((line, mark));
        }
    }
    None
}

/// Returns the mark of the first complete win-line, if any.
pub fn winner(grid: &Grid) -> Option<Mark> {
    winning_line(grid).map(|(_, mark)| mark)
}

/// Checks if every cell is marked.
pub fn is_full(grid: &Grid) -> bool {
    grid.rows().iter().flatten().all(|c| *c != Cell::Empty)
}

/// Classifies a finished grid, or `None` while the game is in progress.
#[instrument(skip(grid))]
pub fn outcome(grid: &Grid) -> Option<Outcome> {
    if let Some(mark) = winner(grid) {
        Some(Outcome::Won(mark))
    } else if is_full(grid) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Grid::new()), None);
        assert_eq!(outcome(&Grid::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&grid("XXX/.../...")), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&grid(".O./.O./.O.")), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let (line, mark) = winning_line(&grid("..O/.O./O..")).unwrap();
        assert_eq!(mark, Mark::O);
        assert_eq!(line, [(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // Row 0 and column 0 are both complete; rows are scanned first.
        let (line, _) = winning_line(&grid("XXX/X../X..")).unwrap();
        assert_eq!(line, WIN_LINES[0]);

        let (line, mark) = winning_line(&grid("OOO/XXX/...")).unwrap();
        assert_eq!(line, WIN_LINES[0]);
        assert_eq!(mark, Mark::O);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&grid("XX./.O./...")), None);
    }

    #[test]
    fn test_full_board_draw() {
        let g = grid("XOX/XOO/OXX");
        assert!(is_full(&g));
        assert_eq!(outcome(&g), Some(Outcome::Draw));
        assert_eq!(Outcome::Draw.score(), 0);
    }

    #[test]
    fn test_full_board_with_winner_is_win() {
        let g = grid("XXX/OOX/XOO");
        assert_eq!(outcome(&g), Some(Outcome::Won(Mark::X)));
    }
}
