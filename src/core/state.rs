//! Game state representation.
//!
//! ## GameState
//!
//! The complete position of a Red-Blue Nim game: both pile counts, the
//! rule variant, whose turn it is, and the search depth configured for
//! the game. All pile arithmetic is `i64`.
//!
//! ## Signed pile counts
//!
//! Pile counts are signed on purpose. The search applies candidate moves
//! without legality checks while looking ahead, so exploration routinely
//! visits positions with negative counts; those positions are not
//! terminal (`is_game_over` tests for exactly zero) and score through the
//! same linear formula. Public constructors accept only unsigned counts,
//! so every state reachable through actual play stays non-negative.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Move, Player, Variant};
use crate::error::{Error, Result};

/// Score contributed by each remaining red marble.
pub const RED_POINTS: i64 = 2;

/// Score contributed by each remaining blue marble.
pub const BLUE_POINTS: i64 = 3;

/// The complete position of one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    red: i64,
    blue: i64,
    variant: Variant,
    turn: Player,
    depth: u32,
}

impl GameState {
    /// Create a fresh position.
    ///
    /// Pile counts are unsigned at the boundary; negative positions only
    /// ever arise transiently inside the search.
    #[must_use]
    pub fn new(red: u32, blue: u32, variant: Variant, first_player: Player, depth: u32) -> Self {
        Self {
            red: i64::from(red),
            blue: i64::from(blue),
            variant,
            turn: first_player,
            depth,
        }
    }

    /// Marbles remaining in the red pile.
    #[must_use]
    pub const fn red(&self) -> i64 {
        self.red
    }

    /// Marbles remaining in the blue pile.
    #[must_use]
    pub const fn blue(&self) -> i64 {
        self.blue
    }

    /// The rule variant this game is played under.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    /// The search depth configured for this game.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether the game has ended.
    ///
    /// The game ends when either pile holds exactly zero marbles. A
    /// negative count (reachable only inside the search) is not terminal.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.red == 0 || self.blue == 0
    }

    /// The position's score: `2 * red + 3 * blue`.
    ///
    /// Total on every position, terminal or not, including the negative
    /// counts the search explores.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.red * RED_POINTS + self.blue * BLUE_POINTS
    }

    /// Apply a human move after validating it.
    ///
    /// Rejects negative removal counts and moves that take more marbles
    /// than a pile holds. On success both piles are decremented and the
    /// turn passes to the computer. On error the state is unchanged.
    pub fn apply_human_move(&mut self, mv: Move) -> Result<()> {
        if mv.red < 0 || mv.blue < 0 {
            return Err(Error::NegativeMove {
                red: mv.red,
                blue: mv.blue,
            });
        }
        if mv.red > self.red || mv.blue > self.blue {
            return Err(Error::NotEnoughMarbles {
                requested_red: mv.red,
                requested_blue: mv.blue,
                red: self.red,
                blue: self.blue,
            });
        }

        self.red -= mv.red;
        self.blue -= mv.blue;
        self.turn = Player::Computer;
        Ok(())
    }

    /// Apply a computer move.
    ///
    /// No validation: the search only proposes candidates that are legal
    /// for the non-negative position it was given. Both piles are
    /// decremented and the turn passes to the human.
    pub fn apply_computer_move(&mut self, mv: Move) {
        self.red -= mv.red;
        self.blue -= mv.blue;
        self.turn = Player::Human;
    }

    /// Unguarded move application for search backtracking.
    ///
    /// Does not touch the turn and may drive pile counts negative.
    pub(crate) fn apply(&mut self, mv: Move) {
        self.red -= mv.red;
        self.blue -= mv.blue;
    }

    /// Reverse of [`GameState::apply`].
    pub(crate) fn undo(&mut self, mv: Move) {
        self.red += mv.red;
        self.blue += mv.blue;
    }

    /// The variant's candidate moves that do not overdraw either pile,
    /// in candidate order.
    #[must_use]
    pub fn playable_moves(&self) -> SmallVec<[Move; 4]> {
        self.variant
            .candidate_moves()
            .into_iter()
            .filter(|mv| mv.red <= self.red && mv.blue <= self.blue)
            .collect()
    }
}
