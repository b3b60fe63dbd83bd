//! Property-based tests for the match engine.
//!
//! These tests verify the state invariants hold for arbitrary sequences
//! of move declarations, including garbage input.

use proptest::prelude::*;
use rps_referee::core::{MatchState, Move};
use rps_referee::rules::{MatchEngine, Penalty, RoundWinner};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_legal_move() -> impl Strategy<Value = String> {
    prop::sample::select(Move::ALL.to_vec()).prop_map(|mv| mv.as_str().to_string())
}

fn arb_noisy_move() -> impl Strategy<Value = String> {
    (arb_legal_move(), " {0,2}", " {0,2}", any::<bool>()).prop_map(|(mv, pre, post, upper)| {
        let mv = if upper { mv.to_uppercase() } else { mv };
        format!("{pre}{mv}{post}")
    })
}

fn arb_raw_move() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => arb_noisy_move(),
        1 => "[a-zA-Z ]{0,8}",
    ]
}

fn arb_rounds() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec((arb_raw_move(), arb_raw_move()), 1..8)
}

// ============================================================================
// Invariants
// ============================================================================

/// Checks that hold between consecutive states of a running match.
fn check_step(before: &MatchState, after: &MatchState) -> Result<(), TestCaseError> {
    prop_assert!(after.user_score >= before.user_score);
    prop_assert!(after.opponent_score >= before.opponent_score);
    prop_assert!(after.decided_rounds() - before.decided_rounds() <= 1);

    if before.user_bomb_used {
        prop_assert!(after.user_bomb_used);
    }
    if before.opponent_bomb_used {
        prop_assert!(after.opponent_bomb_used);
    }

    if after.is_over {
        prop_assert_eq!(after.round_number, before.round_number);
    } else {
        prop_assert_eq!(after.round_number, before.round_number + 1);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_state_invariants(rounds in arb_rounds()) {
        let mut engine = MatchEngine::new();

        for (user, opponent) in &rounds {
            let before = engine.state();
            match engine.resolve_turn(user, opponent) {
                Ok(turn) => {
                    prop_assert!(!before.is_over);
                    prop_assert_eq!(turn.summary.round, before.round_number);
                    prop_assert_eq!(turn.state, engine.state());
                    check_step(&before, &turn.state)?;

                    let delta_user = turn.state.user_score - before.user_score;
                    let delta_opponent = turn.state.opponent_score - before.opponent_score;
                    match turn.summary.winner {
                        RoundWinner::User => prop_assert_eq!((delta_user, delta_opponent), (1, 0)),
                        RoundWinner::Opponent => prop_assert_eq!((delta_user, delta_opponent), (0, 1)),
                        RoundWinner::Draw => prop_assert_eq!((delta_user, delta_opponent), (0, 0)),
                    }
                }
                Err(err) => {
                    prop_assert!(before.is_over);
                    prop_assert_eq!(err.state, before);
                    prop_assert_eq!(engine.state(), before);
                }
            }
        }
    }

    #[test]
    fn prop_terminates_by_round_three(rounds in arb_rounds()) {
        let mut engine = MatchEngine::new();
        let mut resolved = 0;

        for (user, opponent) in &rounds {
            if engine.resolve_turn(user, opponent).is_ok() {
                resolved += 1;
            }
        }

        let state = engine.state();
        prop_assert!(resolved <= 3);
        prop_assert!(state.round_number <= 3);
        prop_assert!(state.user_score <= 2 && state.opponent_score <= 2);
        if state.user_score >= 2 || state.opponent_score >= 2 || resolved == 3 {
            prop_assert!(state.is_over);
        }

        if state.is_over {
            prop_assert!(
                state.user_score >= 2 || state.opponent_score >= 2 || state.round_number == 3
            );
            prop_assert!(engine.result().is_some());
        } else {
            prop_assert_eq!(resolved, rounds.len());
            prop_assert!(engine.result().is_none());
        }
    }

    #[test]
    fn prop_bomb_succeeds_once(rounds in 2usize..=3, opponent in prop::sample::select(Move::BASIC.to_vec())) {
        let config = rps_referee::MatchConfig::default().with_wins_to_clinch(5);
        let mut engine = MatchEngine::with_config(config).unwrap();

        let first = engine.resolve_turn("bomb", opponent.as_str()).unwrap();
        prop_assert_eq!(first.summary.winner, RoundWinner::User);
        prop_assert_eq!(first.summary.penalty, None);
        prop_assert!(first.state.user_bomb_used);

        for _ in 1..rounds {
            let turn = engine.resolve_turn("bomb", opponent.as_str()).unwrap();
            prop_assert_eq!(turn.summary.winner, RoundWinner::Opponent);
            prop_assert_eq!(turn.summary.penalty, Some(Penalty::BombAlreadyUsed));
            prop_assert!(turn.state.user_bomb_used);
        }
    }

    #[test]
    fn prop_replay_is_deterministic(rounds in arb_rounds()) {
        let mut first = MatchEngine::new();
        let mut second = MatchEngine::new();

        for (user, opponent) in &rounds {
            let a = first.resolve_turn(user, opponent);
            let b = second.resolve_turn(user, opponent);
            prop_assert_eq!(a, b);
        }
        prop_assert_eq!(first.history(), second.history());
    }
}
