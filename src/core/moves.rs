//! Move representation.
//!
//! ## Move
//!
//! A move removes marbles from the two piles. Legal play removes either
//! one or two marbles from a single pile, so every move the engine
//! generates has one zero component; the type itself does not enforce
//! that, because the search and human input both work in terms of raw
//! per-pile counts.

use serde::{Deserialize, Serialize};

/// Marbles removed from each pile by one move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Marbles removed from the red pile.
    pub red: i64,
    /// Marbles removed from the blue pile.
    pub blue: i64,
}

impl Move {
    /// The no-op move `(0, 0)`.
    ///
    /// Returned by the search for terminal or zero-depth positions, where
    /// no exploration happens.
    pub const NONE: Move = Move { red: 0, blue: 0 };

    /// Create a move removing `red` and `blue` marbles.
    #[must_use]
    pub const fn new(red: i64, blue: i64) -> Self {
        Self { red, blue }
    }

    /// Total marbles removed across both piles.
    #[must_use]
    pub const fn total(self) -> i64 {
        self.red + self.blue
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} red, {} blue", self.red, self.blue)
    }
}
