//! Match configuration.
//!
//! The defaults are the standard best-of-3 rules: the first side to two
//! round wins clinches the match, and play stops after round 3 regardless
//! of score.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::MatchState;

/// Match termination parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Round wins that end the match early (default: 2).
    pub wins_to_clinch: u32,

    /// Hard cap on rounds played (default: 3).
    /// The match ends after this round whatever the score.
    pub max_rounds: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            wins_to_clinch: 2,
            max_rounds: 3,
        }
    }
}

/// Rejected configuration values or resume states.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("wins_to_clinch must be at least 1")]
    ZeroWinsToClinch,
    #[error("max_rounds must be at least 1")]
    ZeroMaxRounds,
    #[error("round_number {round} outside 1..={max_rounds}")]
    RoundOutOfRange { round: u32, max_rounds: u32 },
    #[error("{decided} decided rounds cannot fit in round {round}")]
    ScoreExceedsRounds { decided: u32, round: u32 },
    #[error("match still running with a side at {wins_to_clinch} wins")]
    UnfinishedAfterClinch { wins_to_clinch: u32 },
}

impl MatchConfig {
    /// Create a new config with a custom win threshold.
    pub fn with_wins_to_clinch(mut self, wins: u32) -> Self {
        self.wins_to_clinch = wins;
        self
    }

    /// Create a new config with a custom round cap.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Check that the match can terminate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wins_to_clinch == 0 {
            return Err(ConfigError::ZeroWinsToClinch);
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroMaxRounds);
        }
        Ok(())
    }

    /// Check that `state` is reachable under these rules.
    ///
    /// A running match is in a round within the cap, has at most one
    /// decided round per completed round, and has no side at the win
    /// threshold. A finished match may count its final round as decided.
    pub fn check_state(&self, state: &MatchState) -> Result<(), ConfigError> {
        let round = state.round_number;
        if round == 0 || round > self.max_rounds {
            return Err(ConfigError::RoundOutOfRange {
                round,
                max_rounds: self.max_rounds,
            });
        }

        let completed = if state.is_over { round } else { round - 1 };
        let decided = state.user_score.saturating_add(state.opponent_score);
        if decided > completed {
            return Err(ConfigError::ScoreExceedsRounds { decided, round });
        }

        let clinched = state.user_score >= self.wins_to_clinch
            || state.opponent_score >= self.wins_to_clinch;
        if clinched && !state.is_over {
            return Err(ConfigError::UnfinishedAfterClinch {
                wins_to_clinch: self.wins_to_clinch,
            });
        }
        Ok(())
    }
}
