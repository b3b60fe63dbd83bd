//! Match state.
//!
//! ## MatchState
//!
//! The authoritative record of a match in progress:
//! - Current round number (starts at 1)
//! - Round wins for each side
//! - Whether each side has spent its bomb
//! - Whether the match is over
//!
//! The engine owns the live instance; callers only ever see copies.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Complete match state.
///
/// Field names are stable: this record is what the engine hands to
/// presentation layers and what the console driver prints as JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchState {
    /// Round being played (starts at 1, frozen once the match is over).
    pub round_number: u32,

    /// Rounds won by the user.
    pub user_score: u32,

    /// Rounds won by the opponent.
    pub opponent_score: u32,

    /// The user has spent their bomb.
    pub user_bomb_used: bool,

    /// The opponent has spent their bomb.
    pub opponent_bomb_used: bool,

    /// A terminal condition has been reached.
    pub is_over: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Create the state of a fresh match: round 1, no score, bombs unused.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            round_number: 1,
            user_score: 0,
            opponent_score: 0,
            user_bomb_used: false,
            opponent_bomb_used: false,
            is_over: false,
        }
    }

    /// Get a side's round wins.
    #[must_use]
    pub const fn score(&self, side: Side) -> u32 {
        match side {
            Side::User => self.user_score,
            Side::Opponent => self.opponent_score,
        }
    }

    /// Check if a side has spent its bomb.
    #[must_use]
    pub const fn bomb_used(&self, side: Side) -> bool {
        match side {
            Side::User => self.user_bomb_used,
            Side::Opponent => self.opponent_bomb_used,
        }
    }

    /// The side strictly ahead on score, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        use std::cmp::Ordering;

        match self.user_score.cmp(&self.opponent_score) {
            Ordering::Greater => Some(Side::User),
            Ordering::Less => Some(Side::Opponent),
            Ordering::Equal => None,
        }
    }

    /// Total rounds won by either side (draws excluded).
    #[must_use]
    pub const fn decided_rounds(&self) -> u32 {
        self.user_score + self.opponent_score
    }

    /// Award a round to a side.
    pub(crate) fn award(&mut self, side: Side) {
        match side {
            Side::User => self.user_score += 1,
            Side::Opponent => self.opponent_score += 1,
        }
    }

    /// Mark a side's bomb as spent. Never reverts.
    pub(crate) fn spend_bomb(&mut self, side: Side) {
        match side {
            Side::User => self.user_bomb_used = true,
            Side::Opponent => self.opponent_bomb_used = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = MatchState::new();
        assert_eq!(state.round_number, 1);
        assert_eq!(state.user_score, 0);
        assert_eq!(state.opponent_score, 0);
        assert!(!state.user_bomb_used);
        assert!(!state.opponent_bomb_used);
        assert!(!state.is_over);
        assert_eq!(state, MatchState::default());
    }

    #[test]
    fn test_award_and_leader() {
        let mut state = MatchState::new();
        assert_eq!(state.leader(), None);

        state.award(Side::User);
        assert_eq!(state.score(Side::User), 1);
        assert_eq!(state.leader(), Some(Side::User));

        state.award(Side::Opponent);
        state.award(Side::Opponent);
        assert_eq!(state.score(Side::Opponent), 2);
        assert_eq!(state.leader(), Some(Side::Opponent));
        assert_eq!(state.decided_rounds(), 3);
    }

    #[test]
    fn test_spend_bomb() {
        let mut state = MatchState::new();
        state.spend_bomb(Side::Opponent);
        assert!(state.bomb_used(Side::Opponent));
        assert!(!state.bomb_used(Side::User));

        state.spend_bomb(Side::Opponent);
        assert!(state.bomb_used(Side::Opponent));
    }

    #[test]
    fn test_serialization_field_names() {
        let state = MatchState::new();
        let value = serde_json::to_value(state).unwrap();

        for key in [
            "round_number",
            "user_score",
            "opponent_score",
            "user_bomb_used",
            "opponent_bomb_used",
            "is_over",
        ] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }

        let deserialized: MatchState = serde_json::from_value(value).unwrap();
        assert_eq!(state, deserialized);
    }
}
