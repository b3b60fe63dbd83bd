//! Drivers that connect the engine to the outside world.
//!
//! The engine never reads input or renders output itself. A match is run
//! by pairing it with two collaborators:
//!
//! - [`MoveSource`]: supplies the raw move strings for each round
//!   (a script, a console, a remote agent)
//! - [`Presenter`]: renders each round and the final result
//!
//! [`run_match`] drives rounds until the match ends or the source runs dry.
//!
//! ## Example
//!
//! ```
//! use rps_referee::driver::{run_match, ScriptedMoves, TextPresenter};
//! use rps_referee::rules::{GameResult, MatchEngine};
//! use rps_referee::core::Side;
//!
//! let mut engine = MatchEngine::new();
//! let mut source = ScriptedMoves::new([("rock", "scissors"), ("paper", "rock")]);
//! let mut presenter = TextPresenter::new(Vec::new());
//!
//! let summary = run_match(&mut engine, &mut source, &mut presenter).unwrap();
//! assert_eq!(summary.result, Some(GameResult::Winner(Side::User)));
//! ```

mod present;
mod source;

pub use present::{JsonPresenter, TextPresenter};
pub use source::{LineMoveSource, ScriptedMoves};

use std::io;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::MatchState;
use crate::rules::{GameResult, MatchEngine, TurnOutcome, TurnResolution};

/// Raw moves declared for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePair {
    pub user: String,
    pub opponent: String,
}

impl MovePair {
    /// Create a move pair.
    pub fn new(user: impl Into<String>, opponent: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            opponent: opponent.into(),
        }
    }
}

/// Supplier of move declarations.
pub trait MoveSource {
    /// Get the moves for `round`.
    ///
    /// Returns `Ok(None)` when no more input is available.
    fn next_moves(&mut self, round: u32) -> io::Result<Option<MovePair>>;
}

/// Renderer for round outcomes and the final result.
pub trait Presenter {
    /// Called after every resolved round.
    fn on_turn(&mut self, turn: &TurnResolution) -> io::Result<()>;

    /// Called once when the driver stops.
    fn on_finished(&mut self, summary: &MatchSummary) -> io::Result<()>;
}

/// Everything known about a match when the driver stops.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Final state.
    pub state: MatchState,

    /// Match result, or `None` if the source ran out before the match ended.
    pub result: Option<GameResult>,

    /// Rounds resolved during this run.
    pub rounds: Vec<TurnOutcome>,
}

/// Drive a match to completion.
///
/// Pulls moves from `source` one round at a time and reports each
/// resolution to `presenter`. Stops when the match is over or the source is
/// exhausted, then reports the summary. Errors come only from the
/// collaborators; a concluded engine simply yields its final summary.
pub fn run_match<S, P>(
    engine: &mut MatchEngine,
    source: &mut S,
    presenter: &mut P,
) -> io::Result<MatchSummary>
where
    S: MoveSource + ?Sized,
    P: Presenter + ?Sized,
{
    while !engine.is_over() {
        let round = engine.state().round_number;
        let Some(moves) = source.next_moves(round)? else {
            debug!(round, "move source exhausted before match end");
            break;
        };

        let turn = match engine.resolve_turn(&moves.user, &moves.opponent) {
            Ok(turn) => turn,
            Err(err) => {
                debug!(error = %err, "engine refused turn");
                break;
            }
        };
        presenter.on_turn(&turn)?;
    }

    let summary = MatchSummary {
        state: engine.state(),
        result: engine.result(),
        rounds: engine.history().to_vec(),
    };
    presenter.on_finished(&summary)?;

    Ok(summary)
}
