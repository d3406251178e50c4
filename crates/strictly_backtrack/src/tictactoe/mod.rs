//! Tic-tac-toe positions, moves and rules.

mod action;
mod rules;
mod state;
mod types;

pub use action::Move;
pub use rules::{Outcome, WIN_LINES, WinLine, is_full, outcome, winner, winning_line};
pub use state::TicTacToeState;
pub use types::{Cell, Grid, Mark};
