//! Move selection for the computer player.
//!
//! ## Overview
//!
//! A fixed-depth minimax evaluator with alpha-beta pruning. There is no
//! iterative deepening, no transposition table, and no move generation
//! beyond the variant's four fixed candidates; the search is small enough
//! that none of that machinery pays for itself here.
//!
//! ## Usage
//!
//! ```
//! use redblue_nim::core::{GameState, Player, Variant};
//! use redblue_nim::search::Searcher;
//!
//! let mut state = GameState::new(4, 4, Variant::Standard, Player::Computer, 1);
//! let result = Searcher::new().search(&mut state);
//!
//! assert_eq!(result.value, 18);
//! // The state is restored after the search.
//! assert_eq!(state.red(), 4);
//! ```

pub mod minimax;

pub use minimax::{best_move, SearchResult, Searcher};
