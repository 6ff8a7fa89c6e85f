//! Rule variants.
//!
//! ## Variant
//!
//! STANDARD and MISERE share the same scoring and the same set of four
//! candidate moves; they differ only in the order the search considers
//! those candidates. Because the search keeps the first candidate that
//! achieves the best evaluation, the order acts as a tie-break preference:
//! STANDARD leans toward removing two marbles, MISERE toward removing one.

use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Which rule variant a game is played under.
///
/// Serializes to `"standard"` / `"misere"`, the strings stored in
/// saved-game files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Standard,
    Misere,
}

impl Variant {
    /// The candidate moves the search explores, in tie-break priority
    /// order: earlier candidates win equal evaluations.
    #[must_use]
    pub const fn candidate_moves(self) -> [Move; 4] {
        match self {
            Variant::Standard => [
                Move::new(2, 0),
                Move::new(0, 2),
                Move::new(1, 0),
                Move::new(0, 1),
            ],
            Variant::Misere => [
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(0, 2),
                Move::new(2, 0),
            ],
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Standard => write!(f, "standard"),
            Variant::Misere => write!(f, "misere"),
        }
    }
}
