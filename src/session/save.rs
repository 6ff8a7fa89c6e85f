//! Saved-game records.
//!
//! ## SavedGame
//!
//! The stable on-disk representation of a game, serialized as a small
//! JSON object:
//!
//! ```json
//! {"num_red": 5, "num_blue": 7, "version": "standard", "current_player": "human", "depth": 3}
//! ```
//!
//! Pile counts are unsigned in the record: a saved game can never hold a
//! negative pile, and a tampered file with negative counts fails to
//! parse rather than producing an unreachable state.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player, Variant};
use crate::error::{Error, Result};

/// On-disk record of one game. Field names are the JSON keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub num_red: u32,
    pub num_blue: u32,
    pub version: Variant,
    pub current_player: Player,
    pub depth: u32,
}

impl SavedGame {
    /// Capture a position as a record.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        // Played states never go negative; piles start from u32 and only
        // shrink, so these casts are exact.
        Self {
            num_red: state.red().max(0) as u32,
            num_blue: state.blue().max(0) as u32,
            version: state.variant(),
            current_player: state.turn(),
            depth: state.depth(),
        }
    }

    /// Rebuild the position this record captured.
    #[must_use]
    pub fn into_state(self) -> GameState {
        GameState::new(
            self.num_red,
            self.num_blue,
            self.version,
            self.current_player,
            self.depth,
        )
    }

    /// Write the record to `path` as JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::Io {
            operation: format!("create {}", path.display()),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer(&mut writer, self)?;
        writer.flush().map_err(|e| Error::Io {
            operation: format!("write {}", path.display()),
            source: e,
        })?;

        Ok(())
    }

    /// Read a record back from `path`.
    ///
    /// A missing file surfaces as [`Error::Io`]; malformed JSON or a
    /// record with out-of-range fields as [`Error::Serialization`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::Io {
            operation: format!("open {}", path.display()),
            source: e,
        })?;
        let reader = BufReader::new(file);

        Ok(serde_json::from_reader(reader)?)
    }
}
