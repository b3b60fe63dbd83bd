//! Engine error types.

use thiserror::Error;

use crate::core::MatchState;

/// A turn was submitted after the match ended.
///
/// Carries the unchanged final state so callers can still inspect it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("match already concluded after round {}", .state.round_number)]
pub struct MatchConcludedError {
    pub state: MatchState,
}

impl MatchConcludedError {
    pub fn new(state: MatchState) -> Self {
        Self { state }
    }
}
