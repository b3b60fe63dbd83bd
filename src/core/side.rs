//! Match participants.
//!
//! A match always has exactly two sides: the user, whose moves are
//! validated, and the opponent, whose moves are trusted.

use serde::{Deserialize, Serialize};

/// One of the two participants in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    User,
    Opponent,
}

impl Side {
    /// The other participant.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::User => Side::Opponent,
            Side::Opponent => Side::User,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::User => f.write_str("User"),
            Side::Opponent => f.write_str("Opponent"),
        }
    }
}
