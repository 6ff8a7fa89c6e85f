//! Player identification.
//!
//! ## Player
//!
//! The two participants of a Red-Blue Nim game. The serialized form uses
//! the lowercase strings `"human"` and `"computer"`, which is also the
//! representation stored in saved-game files.

use serde::{Deserialize, Serialize};

/// One of the two participants in a game.
///
/// ```
/// use redblue_nim::Player;
///
/// assert_eq!(format!("{}", Player::Human), "human");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Human,
    #[default]
    Computer,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}
