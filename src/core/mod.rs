//! Core game model: players, variants, moves, state.
//!
//! Everything in this module is plain data. Rules live in the state's
//! move-application methods; the search and session layers build on top
//! without any back-channel into the model.

pub mod moves;
pub mod player;
pub mod state;
pub mod variant;

pub use moves::Move;
pub use player::Player;
pub use state::{GameState, BLUE_POINTS, RED_POINTS};
pub use variant::Variant;
