//! # redblue-nim
//!
//! An engine for Red-Blue Nim: two piles of marbles, players alternate
//! removing one or two marbles from a single pile, and the game ends the
//! moment either pile is empty. The final score is `2` per remaining red
//! marble plus `3` per remaining blue marble.
//!
//! ## Design
//!
//! - **Session-owned state**: every game lives in a [`GameSession`]
//!   owned by the driver. Nothing is global, so sessions can coexist and
//!   move freely across threads.
//!
//! - **Errors as values**: invalid human moves and persistence failures
//!   come back as [`Error`] results and leave the game untouched.
//!
//! - **Bounded search**: the computer plays fixed-depth minimax with
//!   alpha-beta pruning over the variant's four candidate moves. The
//!   look-ahead deliberately explores positions with negative pile
//!   counts; see [`search::minimax`] for the details.
//!
//! ## Modules
//!
//! - `core`: players, variants, moves, game state
//! - `search`: the minimax evaluator
//! - `session`: driver-facing sessions and JSON save files
//!
//! ## Example
//!
//! ```
//! use redblue_nim::{GameSession, Move, Player, Variant};
//!
//! let mut session = GameSession::new(5, 7, Variant::Standard, Player::Human, 3);
//!
//! session.human_move(Move::new(0, 2))?;
//! let reply = session.computer_turn();
//! assert!(reply.best_move.total() > 0);
//! # Ok::<(), redblue_nim::Error>(())
//! ```

pub mod core;
pub mod error;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameState, Move, Player, Variant, BLUE_POINTS, RED_POINTS};
pub use crate::error::{Error, Result};
pub use crate::search::{best_move, SearchResult, Searcher};
pub use crate::session::{GameSession, SavedGame};
