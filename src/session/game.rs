//! Driver-facing game sessions.
//!
//! ## GameSession
//!
//! Owns one game's state together with the searcher that plays the
//! computer side. Drivers (the bundled CLI, tests, anything embedding
//! the crate) hold a session and talk to it exclusively; there is no
//! shared or global game state anywhere.
//!
//! The session deliberately does not police turn order or terminal
//! positions. Drivers check [`GameSession::turn`] and
//! [`GameSession::is_game_over`] and decide what to call next, the same
//! contract an event loop has with its model.

use std::path::Path;

use smallvec::SmallVec;

use crate::core::{GameState, Move, Player, Variant};
use crate::error::Result;
use crate::search::{SearchResult, Searcher};
use crate::session::SavedGame;

/// One interactive game: state plus the computer's searcher.
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    searcher: Searcher,
}

impl GameSession {
    /// Start a fresh game.
    #[must_use]
    pub fn new(red: u32, blue: u32, variant: Variant, first_player: Player, depth: u32) -> Self {
        Self::from_state(GameState::new(red, blue, variant, first_player, depth))
    }

    /// Wrap an existing position, e.g. one loaded from disk.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            searcher: Searcher::new(),
        }
    }

    /// The current position.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// The current score, `2 * red + 3 * blue`.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.state.score()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.state.turn()
    }

    /// Candidate moves the current position allows, in variant order.
    #[must_use]
    pub fn playable_moves(&self) -> SmallVec<[Move; 4]> {
        self.state.playable_moves()
    }

    /// Apply a human move.
    ///
    /// Validation errors leave the session untouched; see
    /// [`GameState::apply_human_move`].
    pub fn human_move(&mut self, mv: Move) -> Result<()> {
        self.state.apply_human_move(mv)
    }

    /// Let the computer take its turn.
    ///
    /// Runs the search, applies the chosen move, and returns the full
    /// search result so drivers can report the move and the work behind
    /// it.
    pub fn computer_turn(&mut self) -> SearchResult {
        let result = self.searcher.search(&mut self.state);
        self.state.apply_computer_move(result.best_move);
        result
    }

    /// Save the game to `path` as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        SavedGame::from_state(&self.state).save_to_file(path)
    }

    /// Resume a game saved with [`GameSession::save`].
    ///
    /// Failures are ordinary [`crate::Error`] values; a bad or missing
    /// file never aborts the caller.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let record = SavedGame::load_from_file(path)?;
        Ok(Self::from_state(record.into_state()))
    }
}
