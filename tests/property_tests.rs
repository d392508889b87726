//! Property-based tests for the round-sequence state machine.
//!
//! These tests use proptest to drive sessions with random scripts and
//! random presses and check the invariants hold throughout.

use proptest::prelude::*;
use simon::config::{GameConfig, LevelTable};
use simon::core::{Pad, Phase, PressCheck, Sequences};
use simon::game::{GameBuilder, PressOutcome, SimonGame};
use simon::schedule::ManualScheduler;
use simon::testing::{RecordingPresenter, ScriptedPicker};
use simon::GameError;

type TestGame = SimonGame<RecordingPresenter, ManualScheduler, ScriptedPicker>;

fn game(script: Vec<Pad>, target: usize) -> TestGame {
    let config = GameConfig {
        levels: LevelTable::from_pairs([(1, target)]),
        ..GameConfig::default()
    };
    GameBuilder::new()
        .config(config)
        .presenter(RecordingPresenter::new())
        .scheduler(ManualScheduler::new())
        .picker(ScriptedPicker::new(script))
        .build()
        .unwrap()
}

prop_compose! {
    fn arbitrary_pad()(variant in 0..4usize) -> Pad {
        Pad::ALL[variant]
    }
}

proptest! {
    #[test]
    fn sequence_grows_by_one_per_round(
        script in prop::collection::vec(arbitrary_pad(), 1..12)
    ) {
        let rounds = script.len();
        let mut game = game(script.clone(), rounds + 1);
        game.start().unwrap();
        game.settle();

        for round in 1..=rounds {
            prop_assert_eq!(game.computer_sequence().len(), round);
            prop_assert_eq!(game.computer_sequence(), &script[..round]);
            let pads = game.computer_sequence().to_vec();
            for pad in pads {
                game.press(pad);
            }
            game.settle();
        }
    }

    #[test]
    fn human_sequence_stays_a_prefix(
        script in prop::collection::vec(arbitrary_pad(), 8),
        presses in prop::collection::vec(arbitrary_pad(), 0..40)
    ) {
        let mut game = game(script, 8);
        game.start().unwrap();
        game.settle();

        for pad in presses {
            game.press(pad);
            if game.phase() == Phase::AwaitingHuman {
                prop_assert!(game.computer_sequence().starts_with(game.human_sequence()));
                prop_assert!(game.human_sequence().len() <= game.computer_sequence().len());
            }
            game.settle();
            if game.phase() == Phase::Idle {
                game.start().unwrap();
                game.settle();
            }
        }
    }

    #[test]
    fn win_only_on_final_matching_press(
        script in prop::collection::vec(arbitrary_pad(), 3),
        presses in prop::collection::vec(arbitrary_pad(), 0..40)
    ) {
        let mut game = game(script, 3);
        game.start().unwrap();
        game.settle();

        for pad in presses {
            let before = game.snapshot();
            let outcome = game.press(pad);
            let final_match = before.phase == Phase::AwaitingHuman
                && before.computer.len() == 3
                && before.human.len() == 2
                && before.computer[2] == pad;
            prop_assert_eq!(matches!(outcome, PressOutcome::Won { rounds: 3 }), final_match);
            prop_assert!(game.computer_sequence().len() <= 3);

            game.settle();
            if game.phase() == Phase::Idle {
                game.start().unwrap();
                game.settle();
            }
        }
    }

    #[test]
    fn invalid_level_changes_nothing(level in 5..=u8::MAX, valid in 1..=4u8) {
        let mut game = game(vec![Pad::Red], 8);
        let mut config_game = GameBuilder::new()
            .presenter(RecordingPresenter::new())
            .scheduler(ManualScheduler::new())
            .picker(ScriptedPicker::new([Pad::Red]))
            .build()
            .unwrap();
        config_game.set_level(valid).unwrap();

        for g in [&mut game, &mut config_game] {
            let before = g.snapshot();
            prop_assert_eq!(g.set_level(level), Err(GameError::InvalidLevel { level }));
            prop_assert_eq!(g.set_level(0), Err(GameError::InvalidLevel { level: 0 }));
            prop_assert_eq!(g.snapshot(), before);
        }
    }

    #[test]
    fn failure_resets_everything(
        script in prop::collection::vec(arbitrary_pad(), 1..6),
        fail_round in 1..6usize
    ) {
        let rounds = script.len();
        let mut game = game(script, 8);
        game.start().unwrap();
        game.settle();

        let fail_round = fail_round.min(rounds);
        while game.computer_sequence().len() < fail_round {
            let pads = game.computer_sequence().to_vec();
            for pad in pads {
                game.press(pad);
            }
            game.settle();
        }

        let expected = game.computer_sequence()[0];
        let wrong = Pad::ALL.into_iter().find(|&p| p != expected).unwrap();
        prop_assert!(game.press(wrong).is_terminal());
        prop_assert!(game.snapshot().is_reset());
        prop_assert_eq!(game.scheduler().pending(), 0);

        let history = game.history().clone();
        game.reset();
        prop_assert!(game.snapshot().is_reset());
        prop_assert_eq!(game.history(), &history);
    }

    #[test]
    fn press_check_agrees_with_prefix(
        computer in prop::collection::vec(arbitrary_pad(), 1..10),
        presses in prop::collection::vec(arbitrary_pad(), 1..10)
    ) {
        let mut seq = Sequences::new();
        for &pad in &computer {
            seq.extend(pad);
        }
        seq.begin_human_turn();

        for pad in presses {
            match seq.press(pad) {
                PressCheck::Mismatch { .. } => {
                    prop_assert!(!seq.human_is_prefix() || seq.human().len() > computer.len());
                    break;
                }
                PressCheck::Matched { remaining } => {
                    prop_assert!(seq.human_is_prefix());
                    prop_assert_eq!(remaining, computer.len() - seq.human().len());
                }
                PressCheck::Completed => {
                    prop_assert_eq!(seq.human(), &computer[..]);
                    break;
                }
            }
        }
    }
}
