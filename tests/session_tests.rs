//! Session and persistence integration tests.

use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;

use redblue_nim::{Error, GameSession, GameState, Move, Player, SavedGame, Variant};

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("redblue_nim_{}_{}.json", std::process::id(), name));
    path
}

// =============================================================================
// Session Flow Tests
// =============================================================================

#[test]
fn test_full_game_alternates_to_completion() {
    let mut session = GameSession::new(5, 7, Variant::Standard, Player::Computer, 3);
    let mut turns = 0;

    while !session.is_game_over() {
        turns += 1;
        assert!(turns < 50, "game should terminate");

        match session.turn() {
            Player::Computer => {
                let playable = session.playable_moves();
                let reply = session.computer_turn();
                assert!(
                    playable.contains(&reply.best_move),
                    "computer move {:?} not playable",
                    reply.best_move
                );
                assert_eq!(session.turn(), Player::Human);
            }
            Player::Human => {
                let mv = session.playable_moves()[0];
                session.human_move(mv).unwrap();
                assert_eq!(session.turn(), Player::Computer);
            }
        }
    }

    let state = session.state();
    assert!(state.red() == 0 || state.blue() == 0);
    assert!(state.red() >= 0 && state.blue() >= 0);
    assert_eq!(session.score(), state.red() * 2 + state.blue() * 3);
}

#[test]
fn test_misere_game_completes() {
    let mut session = GameSession::new(4, 4, Variant::Misere, Player::Computer, 3);
    let mut turns = 0;

    while !session.is_game_over() {
        turns += 1;
        assert!(turns < 50, "game should terminate");

        match session.turn() {
            Player::Computer => {
                session.computer_turn();
            }
            Player::Human => {
                let mv = session.playable_moves()[0];
                session.human_move(mv).unwrap();
            }
        }
    }

    assert!(session.state().red() >= 0 && session.state().blue() >= 0);
}

#[test]
fn test_exhausted_red_pile_scores_remaining_blue() {
    let session = GameSession::from_state(GameState::new(1, 0, Variant::Standard, Player::Computer, 3));

    assert!(session.is_game_over());
    assert_eq!(session.score(), 2);
}

#[test]
fn test_rejected_move_keeps_the_turn() {
    let mut session = GameSession::new(2, 2, Variant::Standard, Player::Human, 3);

    let err = session.human_move(Move::new(-1, 0)).unwrap_err();
    assert!(matches!(err, Error::NegativeMove { .. }));
    assert_eq!(session.turn(), Player::Human);

    let err = session.human_move(Move::new(0, 5)).unwrap_err();
    assert!(matches!(err, Error::NotEnoughMarbles { .. }));
    assert_eq!(session.turn(), Player::Human);

    session.human_move(Move::new(0, 2)).unwrap();
    assert_eq!(session.turn(), Player::Computer);
}

// =============================================================================
// Move Application Properties
// =============================================================================

proptest! {
    #[test]
    fn test_legal_moves_shrink_piles_exactly(
        red in 0u32..=12,
        blue in 0u32..=12,
        misere in any::<bool>(),
    ) {
        let variant = if misere { Variant::Misere } else { Variant::Standard };
        let state = GameState::new(red, blue, variant, Player::Human, 3);

        for mv in state.playable_moves() {
            let mut played = state.clone();
            played.apply_human_move(mv).unwrap();

            prop_assert_eq!(played.red() + played.blue(), state.red() + state.blue() - mv.total());
            prop_assert!(played.red() >= 0 && played.blue() >= 0);
            prop_assert_eq!(played.turn(), Player::Computer);
        }
    }

    #[test]
    fn test_illegal_moves_leave_state_identical(
        red in 0u32..=12,
        blue in 0u32..=12,
    ) {
        let state = GameState::new(red, blue, Variant::Standard, Player::Human, 3);

        let illegal = [
            Move::new(-1, 0),
            Move::new(0, -2),
            Move::new(i64::from(red) + 1, 0),
            Move::new(0, i64::from(blue) + 1),
        ];

        for mv in illegal {
            let mut attempted = state.clone();
            prop_assert!(attempted.apply_human_move(mv).is_err());
            prop_assert_eq!(&attempted, &state);
        }
    }
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_save_load_reproduces_state() {
    let path = temp_path("reproduces_state");
    let session = GameSession::new(5, 3, Variant::Misere, Player::Human, 4);

    session.save(&path).unwrap();
    let restored = GameSession::load(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(restored.state(), session.state());
    assert_eq!(restored.state().variant(), Variant::Misere);
    assert_eq!(restored.turn(), Player::Human);
    assert_eq!(restored.state().depth(), 4);
}

#[test]
fn test_save_load_round_trip() {
    let path = temp_path("round_trip");
    let mut session = GameSession::new(5, 7, Variant::Misere, Player::Human, 4);

    session.human_move(Move::new(0, 2)).unwrap();
    session.computer_turn();

    session.save(&path).unwrap();
    let restored = GameSession::load(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(restored.state(), session.state());
}

#[test]
fn test_saved_file_wire_format() {
    let path = temp_path("wire_format");
    let session = GameSession::new(5, 7, Variant::Standard, Player::Human, 3);

    session.save(&path).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);

    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "num_red": 5,
            "num_blue": 7,
            "version": "standard",
            "current_player": "human",
            "depth": 3
        })
    );
}

#[test]
fn test_load_missing_file_is_recoverable() {
    let err = GameSession::load(temp_path("never_written")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_load_malformed_file() {
    let path = temp_path("malformed");
    fs::write(&path, "not a saved game").unwrap();

    let err = GameSession::load(&path).unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_load_rejects_negative_piles() {
    let path = temp_path("negative_piles");
    fs::write(
        &path,
        r#"{"num_red": -2, "num_blue": 7, "version": "standard", "current_player": "human", "depth": 3}"#,
    )
    .unwrap();

    let err = GameSession::load(&path).unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_record_survives_hand_written_files() {
    let path = temp_path("hand_written");
    fs::write(
        &path,
        r#"{"num_red": 2, "num_blue": 1, "version": "misere", "current_player": "computer", "depth": 5}"#,
    )
    .unwrap();

    let record = SavedGame::load_from_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    let state = record.into_state();
    assert_eq!(state.red(), 2);
    assert_eq!(state.blue(), 1);
    assert_eq!(state.variant(), Variant::Misere);
    assert_eq!(state.turn(), Player::Computer);
    assert_eq!(state.depth(), 5);
}
