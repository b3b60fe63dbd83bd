//! Core match types: moves, sides, state, configuration.
//!
//! These are plain data with no I/O. The rules module drives them.

pub mod config;
pub mod moves;
pub mod side;
pub mod state;

pub use config::{ConfigError, MatchConfig};
pub use moves::{normalize, Move};
pub use side::Side;
pub use state::MatchState;
