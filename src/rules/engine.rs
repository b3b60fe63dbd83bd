//! The match engine: turn resolution and termination.
//!
//! `MatchEngine` owns the authoritative `MatchState` and exposes a single
//! transition, [`MatchEngine::resolve_turn`]. Each call:
//! - Normalizes both move strings
//! - Validates the user move (unknown strings and bomb re-use forfeit the round)
//! - Adjudicates the round and updates the score
//! - Ends the match or advances to the next round
//!
//! The engine is synchronous and performs no I/O. Run one engine per match;
//! concurrent access to the same engine must be serialized by the caller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::error::MatchConcludedError;
use super::outcome::{Penalty, RoundWinner, TurnOutcome, TurnResolution};
use crate::core::config::{ConfigError, MatchConfig};
use crate::core::moves::{normalize, Move};
use crate::core::side::Side;
use crate::core::state::MatchState;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Level scores (no winner).
    Draw,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(side) => write!(f, "{side} wins"),
            GameResult::Draw => f.write_str("Draw"),
        }
    }
}

/// Referee for a single match.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    state: MatchState,
    /// Outcomes of every resolved round, oldest first.
    /// Inline capacity covers the default three-round cap.
    history: SmallVec<[TurnOutcome; 3]>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    /// Create an engine for a standard best-of-3 match.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: MatchConfig::default(),
            state: MatchState::new(),
            history: SmallVec::new(),
        }
    }

    /// Create an engine with custom termination rules.
    pub fn with_config(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: MatchState::new(),
            history: SmallVec::new(),
        })
    }

    /// Resume a match from a previously captured state.
    ///
    /// The state must be reachable under `config`; see
    /// [`MatchConfig::check_state`]. History starts empty: only rounds
    /// resolved by this engine are recorded.
    pub fn from_state(config: MatchConfig, state: MatchState) -> Result<Self, ConfigError> {
        config.validate()?;
        config.check_state(&state)?;
        Ok(Self {
            config,
            state,
            history: SmallVec::new(),
        })
    }

    /// Get the match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Get a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Check if the match has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    /// Outcomes of the rounds resolved so far.
    #[must_use]
    pub fn history(&self) -> &[TurnOutcome] {
        &self.history
    }

    /// Final result, or `None` while the match continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.state.is_over {
            return None;
        }
        Some(match self.state.leader() {
            Some(side) => GameResult::Winner(side),
            None => GameResult::Draw,
        })
    }

    /// Resolve one round from the two declared moves.
    ///
    /// Both strings are case-folded and trimmed. An invalid user move
    /// (unknown string, or bomb after the bomb is spent) is not an error:
    /// the round goes to the opponent. The opponent move is trusted and
    /// never penalized.
    ///
    /// Fails only when the match is already over, in which case the state
    /// is left untouched and returned inside the error.
    ///
    /// ```
    /// use rps_referee::rules::{MatchEngine, RoundWinner};
    ///
    /// let mut engine = MatchEngine::new();
    /// let turn = engine.resolve_turn("Rock", "scissors").unwrap();
    ///
    /// assert_eq!(turn.summary.winner, RoundWinner::User);
    /// assert_eq!(turn.state.user_score, 1);
    /// assert_eq!(turn.state.round_number, 2);
    /// ```
    pub fn resolve_turn(
        &mut self,
        user_move_raw: &str,
        opponent_move_raw: &str,
    ) -> Result<TurnResolution, MatchConcludedError> {
        if self.state.is_over {
            warn!(
                round = self.state.round_number,
                "turn submitted after match concluded"
            );
            return Err(MatchConcludedError::new(self.state));
        }

        let user_move = normalize(user_move_raw);
        let opponent_move = normalize(opponent_move_raw);
        let round = self.state.round_number;

        let opponent = Move::parse(&opponent_move);
        if opponent == Some(Move::Bomb) {
            self.state.spend_bomb(Side::Opponent);
        }

        let (winner, penalty) = match self.validate_user_move(&user_move) {
            Ok(user) => {
                if user.is_bomb() {
                    self.state.spend_bomb(Side::User);
                }
                (adjudicate(user, opponent), None)
            }
            Err(penalty) => (RoundWinner::Opponent, Some(penalty)),
        };

        if let Some(side) = winner.side() {
            self.state.award(side);
        }

        let summary = TurnOutcome {
            round,
            user_move,
            opponent_move,
            winner,
            penalty,
        };
        debug!(
            round,
            user_move = %summary.user_move,
            opponent_move = %summary.opponent_move,
            winner = %winner,
            penalty = ?penalty,
            "round resolved"
        );

        self.advance();
        self.history.push(summary.clone());

        Ok(TurnResolution {
            summary,
            state: self.state,
        })
    }

    /// Check a normalized user move against the legal set at call time.
    fn validate_user_move(&self, user_move: &str) -> Result<Move, Penalty> {
        match Move::parse(user_move) {
            None => Err(Penalty::UnrecognizedMove),
            Some(Move::Bomb) if self.state.user_bomb_used => Err(Penalty::BombAlreadyUsed),
            Some(mv) => Ok(mv),
        }
    }

    /// End the match or move on to the next round. Runs after scoring.
    fn advance(&mut self) {
        let clinched = self.state.user_score >= self.config.wins_to_clinch
            || self.state.opponent_score >= self.config.wins_to_clinch;
        let capped = self.state.round_number >= self.config.max_rounds;

        if clinched || capped {
            self.state.is_over = true;
            info!(
                rounds = self.state.round_number,
                user_score = self.state.user_score,
                opponent_score = self.state.opponent_score,
                "match concluded"
            );
        } else {
            self.state.round_number += 1;
        }
    }
}

/// Decide a round in which the user move is legal.
///
/// An unrecognized opponent move never equals or loses to a basic move,
/// so it takes the round unless the user plays bomb.
fn adjudicate(user: Move, opponent: Option<Move>) -> RoundWinner {
    if opponent == Some(user) {
        RoundWinner::Draw
    } else if user.is_bomb() {
        RoundWinner::User
    } else if opponent == Some(Move::Bomb) {
        RoundWinner::Opponent
    } else if user.dominates() == opponent {
        RoundWinner::User
    } else {
        RoundWinner::Opponent
    }
}
