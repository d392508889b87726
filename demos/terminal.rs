//! Terminal Simon Says
//!
//! Plays a session against a simulated player on virtual time and prints
//! every presenter call. The player repeats the sequence correctly for a
//! few rounds and then slips.
//!
//! Run with: RUST_LOG=simon=debug cargo run --example terminal

use simon::core::Pad;
use simon::game::{GameBuilder, PressOutcome};
use simon::picker::RandomPicker;
use simon::presenter::{Outcome, Presenter};
use simon::schedule::ManualScheduler;
use tracing_subscriber::EnvFilter;

struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn highlight_pad(&mut self, pad: Pad, lit: bool) {
        if lit {
            println!("  [{pad:^8}]");
        }
    }

    fn play_sound(&mut self, pad: Pad) {
        println!("  ~ {pad} tone");
    }

    fn set_status_text(&mut self, text: &str) {
        println!("status: {text}");
    }

    fn set_status_visible(&mut self, _visible: bool) {}

    fn set_heading_text(&mut self, text: &str) {
        println!("== {text} ==");
    }

    fn set_input_enabled(&mut self, _enabled: bool) {}

    fn show_start_affordance(&mut self, visible: bool) {
        if visible {
            println!("(press start to play again)");
        }
    }

    fn announce_outcome(&mut self, outcome: Outcome) {
        println!("\n*** {outcome} ***\n");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut game = GameBuilder::new()
        .presenter(TerminalPresenter)
        .scheduler(ManualScheduler::new())
        .picker(RandomPicker::seeded(2024))
        .build()
        .expect("default config is valid");

    let target = game.start().expect("idle game starts");
    println!("playing to {target} rounds\n");

    let slip_round = 5;
    loop {
        let elapsed = game.settle();
        println!("(computer turn took {}ms)", elapsed.as_millis());

        let sequence = game.computer_sequence().to_vec();
        let round = sequence.len();
        let mut outcome = PressOutcome::Ignored;
        for (index, pad) in sequence.into_iter().enumerate() {
            let pad = if round == slip_round && index == round - 1 {
                Pad::ALL.into_iter().find(|&p| p != pad).unwrap_or(pad)
            } else {
                pad
            };
            println!("player presses {pad}");
            outcome = game.press(pad);
            if outcome.is_terminal() {
                break;
            }
        }

        match outcome {
            PressOutcome::RoundComplete { round } => println!("round {round} cleared\n"),
            PressOutcome::Won { rounds } => {
                println!("won after {rounds} rounds");
                break;
            }
            PressOutcome::Failed {
                index,
                expected,
                actual,
            } => {
                println!("press {} was {actual}, expected {expected}", index + 1);
                break;
            }
            PressOutcome::Accepted { .. } | PressOutcome::Ignored => break,
        }
    }

    let path: Vec<String> = game
        .history()
        .get_path()
        .iter()
        .map(|phase| phase.to_string())
        .collect();
    println!("{}", path.join(" -> "));
}
