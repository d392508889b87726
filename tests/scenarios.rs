//! End-to-end sessions driven under virtual time.

use simon::core::{Pad, Phase};
use simon::game::{GameBuilder, PressOutcome, SimonGame};
use simon::presenter::Outcome;
use simon::schedule::ManualScheduler;
use simon::testing::{PresenterCall, RecordingPresenter, ScriptedPicker};
use simon::GameError;

type TestGame = SimonGame<RecordingPresenter, ManualScheduler, ScriptedPicker>;

fn game_with(script: &[Pad]) -> (TestGame, RecordingPresenter) {
    let presenter = RecordingPresenter::new();
    let game = GameBuilder::new()
        .presenter(presenter.clone())
        .scheduler(ManualScheduler::new())
        .picker(ScriptedPicker::new(script.iter().copied()))
        .build()
        .unwrap();
    (game, presenter)
}

/// Repeat the whole computer sequence back and let the next round play.
fn replay_round(game: &mut TestGame) -> PressOutcome {
    let pads = game.computer_sequence().to_vec();
    let mut last = PressOutcome::Ignored;
    for pad in pads {
        last = game.press(pad);
    }
    game.settle();
    last
}

#[test]
fn single_pad_round_advances() {
    let (mut game, _) = game_with(&[Pad::Red]);
    assert_eq!(game.start(), Ok(8));
    game.settle();

    assert_eq!(game.computer_sequence(), &[Pad::Red]);
    assert_eq!(game.press(Pad::Red), PressOutcome::RoundComplete { round: 1 });
    assert_eq!(game.phase(), Phase::RoundAdvancing);
}

#[test]
fn wrong_second_pad_fails_and_resets() {
    let (mut game, presenter) = game_with(&[Pad::Red, Pad::Green]);
    game.start().unwrap();
    game.settle();
    game.press(Pad::Red);
    game.settle();
    assert_eq!(game.computer_sequence(), &[Pad::Red, Pad::Green]);

    assert_eq!(game.press(Pad::Red), PressOutcome::Accepted { remaining: 1 });
    assert_eq!(
        game.press(Pad::Blue),
        PressOutcome::Failed {
            index: 1,
            expected: Pad::Green,
            actual: Pad::Blue,
        }
    );

    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(presenter.outcomes(), vec![Outcome::Failed]);
    assert_eq!(Outcome::Failed.message(), "Oops! Try again.");
    assert!(game.snapshot().is_reset());
}

#[test]
fn invalid_level_keeps_round_count() {
    let (mut game, _) = game_with(&[]);
    assert_eq!(game.set_level(3), Ok(20));

    assert_eq!(game.set_level(5), Err(GameError::InvalidLevel { level: 5 }));
    assert_eq!(game.level(), 3);
    assert_eq!(game.round_count(), 20);
    assert_eq!(game.current_round(), 1);
}

#[test]
fn matching_all_eight_rounds_wins() {
    let script = [
        Pad::Red,
        Pad::Green,
        Pad::Yellow,
        Pad::Blue,
        Pad::Blue,
        Pad::Yellow,
        Pad::Green,
        Pad::Red,
    ];
    let (mut game, presenter) = game_with(&script);
    game.start().unwrap();
    game.settle();

    for round in 1..8 {
        assert_eq!(game.computer_sequence().len(), round);
        assert_eq!(replay_round(&mut game), PressOutcome::RoundComplete { round });
    }
    assert_eq!(game.computer_sequence(), &script);

    let pads = game.computer_sequence().to_vec();
    let (last, rest) = pads.split_last().unwrap();
    for &pad in rest {
        assert!(matches!(game.press(pad), PressOutcome::Accepted { .. }));
    }
    assert_eq!(game.press(*last), PressOutcome::Won { rounds: 8 });

    assert_eq!(presenter.outcomes(), vec![Outcome::Won]);
    assert_eq!(game.history().last_terminal(), Some(Phase::Won));
    assert_eq!(game.history().count_entries(Phase::RoundAdvancing), 7);
    assert!(game.snapshot().is_reset());
}

#[test]
fn press_during_playback_is_ignored() {
    let (mut game, presenter) = game_with(&[Pad::Yellow]);
    game.start().unwrap();
    assert_eq!(game.phase(), Phase::ComputerPlaying);
    let before = presenter.calls().len();

    assert_eq!(game.press(Pad::Yellow), PressOutcome::Ignored);
    assert!(game.human_sequence().is_empty());
    assert_eq!(presenter.calls().len(), before);
}

#[test]
fn press_while_idle_is_ignored() {
    let (mut game, presenter) = game_with(&[Pad::Red]);
    assert_eq!(game.press(Pad::Red), PressOutcome::Ignored);
    assert!(presenter.calls().is_empty());
}

#[test]
fn reset_twice_is_a_no_op() {
    let (mut game, presenter) = game_with(&[Pad::Red]);
    game.start().unwrap();
    game.settle();
    game.press(Pad::Green);
    assert!(game.snapshot().is_reset());

    let before = presenter.calls();
    let history = game.history().clone();
    game.reset();
    game.reset();
    assert_eq!(presenter.calls(), before);
    assert_eq!(game.history(), &history);
    assert!(game.snapshot().is_reset());
}

#[test]
fn new_session_starts_from_scratch_after_failure() {
    let (mut game, presenter) = game_with(&[Pad::Red, Pad::Blue]);
    game.start().unwrap();
    game.settle();
    game.press(Pad::Green);

    game.start().unwrap();
    game.settle();
    assert_eq!(game.computer_sequence(), &[Pad::Blue]);
    assert_eq!(game.current_round(), 1);
    assert_eq!(game.phase(), Phase::AwaitingHuman);
    assert_eq!(
        game.history().get_path(),
        vec![&Phase::Idle, &Phase::ComputerPlaying, &Phase::AwaitingHuman]
    );
    assert!(presenter
        .calls()
        .contains(&PresenterCall::Status("Round 1 — Watch closely".to_string())));
}

#[test]
fn higher_level_needs_more_rounds() {
    let (mut game, _) = game_with(&[Pad::Green]);
    assert_eq!(game.start_at(2), Ok(14));
    game.settle();

    for round in 1..=8 {
        assert_eq!(replay_round(&mut game), PressOutcome::RoundComplete { round });
    }
    assert_eq!(game.phase(), Phase::AwaitingHuman);
    assert_eq!(game.computer_sequence().len(), 9);
    assert_eq!(game.current_round(), 9);
}

#[test]
fn each_round_plays_the_whole_sequence() {
    let (mut game, presenter) = game_with(&[Pad::Red, Pad::Green, Pad::Blue]);
    game.start().unwrap();
    game.settle();
    replay_round(&mut game);
    replay_round(&mut game);

    // Playback sounds interleaved with the echoed presses.
    assert_eq!(
        presenter.sounds(),
        vec![
            Pad::Red,
            Pad::Red,
            Pad::Red,
            Pad::Green,
            Pad::Red,
            Pad::Green,
            Pad::Red,
            Pad::Green,
            Pad::Blue,
        ]
    );
}
