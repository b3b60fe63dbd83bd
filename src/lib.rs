//! # rps-referee
//!
//! A referee for Rock-Paper-Scissors-Plus: best-of-3 rock-paper-scissors
//! where each side may play a single "bomb" that beats every other move.
//!
//! ## Design Principles
//!
//! 1. **One Transition**: All game logic lives in
//!    [`MatchEngine::resolve_turn`]. It takes two raw move strings and
//!    returns the round outcome plus a snapshot of the match state.
//!
//! 2. **Caller-Owned State**: Each match is an explicitly constructed
//!    engine. There is no global match; independent matches can run side
//!    by side.
//!
//! 3. **Forgiving Input**: Unknown moves and bomb re-use by the user forfeit
//!    the round. The only error is submitting a turn after the match ended.
//!
//! ## Modules
//!
//! - `core`: Moves, sides, match state, configuration
//! - `rules`: The match engine and round outcomes
//! - `driver`: Move sources, presenters, and the match loop

pub mod core;
pub mod driver;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{normalize, ConfigError, MatchConfig, MatchState, Move, Side};

pub use crate::rules::{
    GameResult, MatchConcludedError, MatchEngine, Penalty, RoundWinner, TurnOutcome,
    TurnResolution,
};

pub use crate::driver::{
    run_match, JsonPresenter, LineMoveSource, MatchSummary, MovePair, MoveSource, Presenter,
    ScriptedMoves, TextPresenter,
};
