//! Minimax search over any [`SearchState`].
//!
//! The search mutates a single state in place: apply a move, recurse, undo.
//! Scores are absolute (positive favours the maximizing side) and the
//! maximizing side is read from the state at every node.

use crate::SolverError;
use strictly_backtrack::SearchState;
use tracing::{debug, instrument, trace};

/// Result of a search from one root position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<M> {
    /// Best move at the root, `None` if the root is terminal.
    pub best: Option<M>,
    /// Game value of the root with best play from both sides.
    pub score: i32,
    /// Principal variation, starting with `best`.
    pub line: Vec<M>,
    /// Nodes visited, root included.
    pub nodes: u64,
    /// Terminal positions reached.
    pub leaves: u64,
}

struct Node<M> {
    score: i32,
    line: Vec<M>,
}

/// Depth-first minimax driver with optional alpha-beta pruning.
#[derive(Debug, Clone)]
pub struct Minimax {
    pruning: bool,
    nodes: u64,
    leaves: u64,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

impl Minimax {
    /// Creates a driver with alpha-beta pruning enabled.
    pub fn new() -> Self {
        Self {
            pruning: true,
            nodes: 0,
            leaves: 0,
        }
    }

    /// Enables or disables alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Solves `state` to the end of the game.
    ///
    /// Every applied move is undone before returning. If an `undo_move`
    /// fails, the error is returned at once and the state is left as it
    /// stood at that point.
    ///
    /// Ties keep the earliest move in enumeration order, so results are
    /// reproducible.
    #[instrument(skip(self, state), fields(pruning = self.pruning))]
    pub fn solve<S: SearchState>(
        &mut self,
        state: &mut S,
    ) -> Result<SearchReport<S::Move>, SolverError> {
        self.nodes = 0;
        self.leaves = 0;

        let node = self.search(state, i32::MIN, i32::MAX)?;
        debug!(
            score = node.score,
            nodes = self.nodes,
            leaves = self.leaves,
            "Search complete"
        );

        Ok(SearchReport {
            best: node.line.first().cloned(),
            score: node.score,
            line: node.line,
            nodes: self.nodes,
            leaves: self.leaves,
        })
    }

    fn search<S: SearchState>(
        &mut self,
        state: &mut S,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<Node<S::Move>, SolverError> {
        self.nodes += 1;

        if state.is_terminal() {
            self.leaves += 1;
            return Ok(Node {
                score: state.evaluate()?,
                line: Vec::new(),
            });
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(SolverError::NoMoves);
        }

        let maximizing = state.maximizing();
        let mut best: Option<Node<S::Move>> = None;

        for mv in moves {
            if !state.apply_move(&mv) {
                return Err(SolverError::RejectedMove(format!("{:?}", mv)));
            }
            let child = self.search(state, alpha, beta);
            state.undo_move(&mv)?;
            let child = child?;

            let improves = match &best {
                None => true,
                Some(b) if maximizing => child.score > b.score,
                Some(b) => child.score < b.score,
            };
            if improves {
                let mut line = Vec::with_capacity(child.line.len() + 1);
                line.push(mv);
                line.extend(child.line);
                best = Some(Node {
                    score: child.score,
                    line,
                });
            }

            if self.pruning
                && let Some(b) = &best
            {
                if maximizing {
                    alpha = alpha.max(b.score);
                } else {
                    beta = beta.min(b.score);
                }
                if alpha >= beta {
                    trace!(alpha, beta, "Pruned");
                    break;
                }
            }
        }

        best.ok_or(SolverError::NoMoves)
    }
}
