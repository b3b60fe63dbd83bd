//! Per-round results.
//!
//! A `TurnOutcome` describes one resolved round. It is produced fresh by
//! every call to [`MatchEngine::resolve_turn`](super::MatchEngine::resolve_turn)
//! and paired with a snapshot of the post-round state in a `TurnResolution`.

use serde::{Deserialize, Serialize};

use crate::core::{MatchState, Side};

/// Who took a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundWinner {
    User,
    Opponent,
    Draw,
}

impl RoundWinner {
    /// The winning side, or `None` for a draw.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            RoundWinner::User => Some(Side::User),
            RoundWinner::Opponent => Some(Side::Opponent),
            RoundWinner::Draw => None,
        }
    }
}

impl std::fmt::Display for RoundWinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundWinner::User => f.write_str("User"),
            RoundWinner::Opponent => f.write_str("Opponent"),
            RoundWinner::Draw => f.write_str("Draw"),
        }
    }
}

/// Why a user move forfeited the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Penalty {
    /// Not one of rock, paper, scissors or bomb.
    UnrecognizedMove,
    /// Bomb declared after it was already spent.
    BombAlreadyUsed,
}

impl std::fmt::Display for Penalty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Penalty::UnrecognizedMove => f.write_str("invalid move"),
            Penalty::BombAlreadyUsed => f.write_str("bomb already used"),
        }
    }
}

/// Summary of a single resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Round this outcome belongs to.
    pub round: u32,

    /// User move after case-folding and trimming.
    pub user_move: String,

    /// Opponent move after case-folding and trimming.
    pub opponent_move: String,

    /// Round winner.
    pub winner: RoundWinner,

    /// Set when the user forfeited the round with an invalid move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty: Option<Penalty>,
}

impl TurnOutcome {
    /// Human-readable winner line, e.g. `"Winner: User."`.
    #[must_use]
    pub fn result_label(&self) -> String {
        format!("Winner: {}.", self.winner)
    }
}

/// Result of a successful `resolve_turn` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResolution {
    /// What happened this round.
    pub summary: TurnOutcome,

    /// Match state after the round was applied.
    pub state: MatchState,
}
