//! Move vocabulary and the dominance rule.
//!
//! ## Move
//!
//! The four legal declarations: the three basic moves plus the single-use
//! bomb. Raw input is case-folded and trimmed before it is matched.
//!
//! ## Dominance
//!
//! - Rock beats scissors, scissors beats paper, paper beats rock.
//! - Bomb beats every move except another bomb.

use serde::{Deserialize, Serialize};

/// A legal move declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Single-use special move.
    Bomb,
}

impl Move {
    /// Every legal move, bomb included.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The basic moves, which can be played any number of times.
    pub const BASIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Parse a raw move string.
    ///
    /// Input is normalized first, so `"  ROCK\n"` parses as [`Move::Rock`].
    /// Returns `None` for anything outside the move vocabulary.
    ///
    /// ```
    /// use rps_referee::core::Move;
    ///
    /// assert_eq!(Move::parse(" Paper "), Some(Move::Paper));
    /// assert_eq!(Move::parse("lizard"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            "bomb" => Some(Move::Bomb),
            _ => None,
        }
    }

    /// Lowercase name, as it appears in round summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Check if this is the special move.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Move::Bomb)
    }

    /// The basic move this one defeats, if any.
    #[must_use]
    pub const fn dominates(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Paper => Some(Move::Rock),
            Move::Scissors => Some(Move::Paper),
            Move::Bomb => None,
        }
    }

    /// Check if this move defeats `other`.
    ///
    /// Equal moves never beat each other, so bomb against bomb is a draw.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        if self == other {
            return false;
        }
        self.is_bomb() || self.dominates() == Some(other)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-fold and trim a raw move string.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
