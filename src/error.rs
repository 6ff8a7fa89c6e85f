//! Error types for the Red-Blue Nim crate

use thiserror::Error;

/// Main error type for the Red-Blue Nim crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: marble counts cannot be negative (got {red} red, {blue} blue)")]
    NegativeMove { red: i64, blue: i64 },

    #[error(
        "invalid move: cannot remove more marbles than are available \
         (asked for {requested_red} red and {requested_blue} blue, \
         piles hold {red} red and {blue} blue)"
    )]
    NotEnoughMarbles {
        requested_red: i64,
        requested_blue: i64,
        red: i64,
        blue: i64,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
