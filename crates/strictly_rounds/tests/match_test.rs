//! Tests for rounds, scores and configuration across a match.

use strictly_rounds::{
    ConfigurationErrorKind, GameEngine, GameStatus, Player, TotalRounds, Transition,
};

const X_WINS_TOP_ROW: [usize; 5] = [0, 3, 1, 4, 2];
const DRAW: [usize; 9] = [0, 4, 2, 1, 3, 5, 7, 6, 8];

fn play_round(engine: &mut GameEngine, cells: &[usize]) {
    for &cell in cells {
        engine.play_move(cell).expect("Legal move");
    }
    assert_eq!(engine.status(), GameStatus::Finished);
}

#[test]
fn test_new_engine_defaults() {
    let engine = GameEngine::new();
    assert_eq!(engine.total_rounds().get(), 3);
    assert_eq!(engine.rounds_remaining(), 3);
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.status(), GameStatus::Active);
    assert!(!engine.is_match_over());
}

#[test]
fn test_rounds_decrease_on_win_and_draw() {
    let mut engine = GameEngine::new();

    play_round(&mut engine, &X_WINS_TOP_ROW);
    assert_eq!(engine.rounds_remaining(), 2);

    assert!(engine.next_round());
    // X won the last round and is still current, so X opens again.
    assert_eq!(engine.current_player(), Player::X);
    play_round(&mut engine, &DRAW);
    assert_eq!(engine.rounds_remaining(), 1);
    assert_eq!(engine.scores().get(Player::X), 1);
    assert_eq!(engine.scores().get(Player::O), 0);
}

#[test]
fn test_next_round_keeps_current_player() {
    let mut engine = GameEngine::new();
    // O wins; O stays current.
    play_round(&mut engine, &[0, 3, 1, 4, 8, 5]);
    assert!(engine.next_round());
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.status(), GameStatus::Active);
    assert!(engine.board().cells().iter().all(|m| m.is_empty()));
    assert_eq!(engine.winning_line(), None);

    let report = engine.play_move(4).unwrap();
    assert_eq!(engine.board().get(4), Some(strictly_rounds::Mark::O));
    assert_eq!(report.rounds_remaining, 2);
}

#[test]
fn test_next_round_requires_finished_round() {
    let mut engine = GameEngine::new();
    engine.play_move(0);
    let before = engine.snapshot();
    assert!(!engine.next_round());
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_match_over_after_last_round() {
    let mut engine = GameEngine::new();
    engine.configure(2).unwrap();

    play_round(&mut engine, &X_WINS_TOP_ROW);
    assert_eq!(engine.pending_transition(), Some(Transition::NextRound));
    assert!(engine.next_round());
    play_round(&mut engine, &DRAW);

    assert_eq!(engine.rounds_remaining(), 0);
    assert!(engine.is_match_over());
    assert_eq!(
        engine.pending_transition(),
        Some(Transition::MatchSummary(engine.scores()))
    );

    // Nothing moves until the match is restarted.
    assert!(!engine.next_round());
    assert_eq!(engine.play_move(0), None);
    assert_eq!(engine.rounds_remaining(), 0);

    engine.start_match();
    assert!(engine.play_move(0).is_some());
}

#[test]
fn test_configure_after_match_over_reopens_play() {
    let mut engine = GameEngine::new();
    engine.configure(1).unwrap();
    play_round(&mut engine, &X_WINS_TOP_ROW);
    assert!(engine.is_match_over());

    engine.configure(4).unwrap();
    assert_eq!(engine.rounds_remaining(), 4);
    assert_eq!(engine.scores().get(Player::X), 1, "configure keeps scores");
    assert!(engine.play_move(0).is_some());
}

#[test]
fn test_configure_rejects_invalid_counts() {
    let mut engine = GameEngine::new();

    let err = engine.configure(0).unwrap_err();
    assert_eq!(err.kind, ConfigurationErrorKind::BelowMinimum(0));
    assert_eq!(engine.total_rounds().get(), 3);

    engine.configure(7).unwrap();
    let err = engine.configure(-5).unwrap_err();
    assert_eq!(err.kind, ConfigurationErrorKind::BelowMinimum(-5));
    assert_eq!(engine.total_rounds(), TotalRounds::DEFAULT);
    assert_eq!(engine.rounds_remaining(), 3);

    engine.configure(7).unwrap();
    let err = engine.configure_from_input("abc").unwrap_err();
    assert!(matches!(err.kind, ConfigurationErrorKind::NotANumber(_)));
    assert_eq!(engine.total_rounds().get(), 3);
}

#[test]
fn test_configure_starts_fresh_round() {
    let mut engine = GameEngine::new();
    engine.play_move(0);
    engine.play_move(4);
    engine.play_move(8);

    let rounds = engine.configure_from_input(" 5 ").unwrap();
    assert_eq!(rounds.get(), 5);
    assert_eq!(engine.rounds_remaining(), 5);
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.status(), GameStatus::Active);
    assert!(engine.board().cells().iter().all(|m| m.is_empty()));
}

#[test]
fn test_start_match_resets_scores_and_rounds() {
    let mut engine = GameEngine::new();
    play_round(&mut engine, &X_WINS_TOP_ROW);
    engine.next_round();
    engine.play_move(6);

    engine.start_match();
    assert_eq!(engine.scores().get(Player::X), 0);
    assert_eq!(engine.scores().get(Player::O), 0);
    assert_eq!(engine.rounds_remaining(), engine.total_rounds().get());
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.pending_transition(), None);
}
