//! Game sessions and persistence.
//!
//! ## Overview
//!
//! A [`GameSession`] bundles one game's state with the computer's
//! searcher behind a small driver-facing API: apply a human move, let
//! the computer take a turn, save, load. [`SavedGame`] is the JSON
//! record those save files contain.
//!
//! ## Usage
//!
//! ```
//! use redblue_nim::{GameSession, Player, Variant};
//!
//! let mut session = GameSession::new(4, 4, Variant::Standard, Player::Computer, 3);
//!
//! let reply = session.computer_turn();
//! assert!(reply.best_move.total() > 0);
//! assert_eq!(session.turn(), Player::Human);
//! ```

pub mod game;
pub mod save;

pub use game::GameSession;
pub use save::SavedGame;
