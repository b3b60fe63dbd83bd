//! Match rules: turn resolution, round outcomes, and termination.
//!
//! `MatchEngine` is the only component with game logic. It receives two
//! move strings per round and returns a `TurnResolution`, or a
//! `MatchConcludedError` once the match is over. Invalid user input is
//! never an error; it forfeits the round.

pub mod engine;
pub mod error;
pub mod outcome;

pub use engine::{GameResult, MatchEngine};
pub use error::MatchConcludedError;
pub use outcome::{Penalty, RoundWinner, TurnOutcome, TurnResolution};
