//! Fixed-depth minimax with alpha-beta pruning.
//!
//! ## Algorithm
//!
//! The evaluator recurses over the variant's four candidate moves to a
//! fixed depth, maximizing on the computer's plies and minimizing on the
//! human's. Comparisons are strict, so the first candidate to reach the
//! best evaluation is kept; the variant's candidate order is the
//! tie-break. Alpha-beta bounds are tightened after each child and the
//! remaining candidates are skipped once `beta <= alpha`.
//!
//! ## Unguarded exploration
//!
//! Candidates are applied without legality checks: look-ahead freely
//! drives pile counts negative, and those positions are non-terminal and
//! score through the normal formula. Every application is undone on the
//! way back up, so the caller's state is exactly restored.

use crate::core::{GameState, Move};

/// Infinity sentinel for alpha-beta bounds.
///
/// `i64::MAX` rather than `i64::MIN`-based so that `-INF` cannot
/// overflow.
const INF: i64 = i64::MAX;

/// Outcome of one search: the chosen move, its minimax value, and work
/// counters for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The best candidate found, or [`Move::NONE`] for terminal and
    /// zero-depth positions.
    pub best_move: Move,
    /// Minimax value of `best_move`.
    pub value: i64,
    /// Evaluator invocations, leaves included.
    pub nodes: u64,
    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,
}

/// Reusable minimax searcher.
///
/// Holds the per-search work counters; both reset at the start of every
/// [`Searcher::search`] call, so one searcher can serve a whole session.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search from `state` to its configured depth, maximizing first.
    ///
    /// The state is mutated transiently while exploring and restored
    /// exactly before returning.
    pub fn search(&mut self, state: &mut GameState) -> SearchResult {
        self.nodes = 0;
        self.cutoffs = 0;

        let depth = state.depth();
        let (value, best_move) = self.minimax(state, depth, true, -INF, INF);

        SearchResult {
            best_move,
            value,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }

    fn minimax(
        &mut self,
        state: &mut GameState,
        depth: u32,
        maximizing: bool,
        mut alpha: i64,
        mut beta: i64,
    ) -> (i64, Move) {
        self.nodes += 1;

        if depth == 0 || state.is_game_over() {
            return (state.score(), Move::NONE);
        }

        let candidates = state.variant().candidate_moves();

        if maximizing {
            let mut best_value = -INF;
            let mut best_move = Move::NONE;

            for mv in candidates {
                state.apply(mv);
                let (value, _) = self.minimax(state, depth - 1, false, alpha, beta);
                state.undo(mv);

                if value > best_value {
                    best_value = value;
                    best_move = mv;
                }
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }

            (best_value, best_move)
        } else {
            let mut best_value = INF;
            let mut best_move = Move::NONE;

            for mv in candidates {
                state.apply(mv);
                let (value, _) = self.minimax(state, depth - 1, true, alpha, beta);
                state.undo(mv);

                if value < best_value {
                    best_value = value;
                    best_move = mv;
                }
                beta = beta.min(value);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }

            (best_value, best_move)
        }
    }
}

/// One-shot convenience: search `state` and return only the chosen move.
pub fn best_move(state: &mut GameState) -> Move {
    Searcher::new().search(state).best_move
}
