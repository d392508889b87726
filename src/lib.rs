//! Simon: the round-sequence state machine of a Simon Says memory game.
//!
//! The computer plays a growing sequence of pad cues, the player repeats
//! it, and the session either advances a round, is won, or fails and resets.
//! This crate is the logic only. Pads are looked up, lit and sounded by a
//! `Presenter`, and time is supplied by a `Scheduler`, so the same
//! controller runs in a browser shell, a terminal, or a test under virtual
//! time.
//!
//! # Core Concepts
//!
//! - **Pad**: one of the four colors, pure identity
//! - **Phase**: where the session is (`Idle`, `ComputerPlaying`, ...)
//! - **Sequences**: computer sequence plus the human attempt at it
//! - **SimonGame**: the controller that owns a session
//!
//! # Example
//!
//! ```rust
//! use simon::core::{Pad, Phase};
//! use simon::game::{GameBuilder, PressOutcome};
//! use simon::presenter::Outcome;
//! use simon::schedule::ManualScheduler;
//! use simon::testing::{RecordingPresenter, ScriptedPicker};
//!
//! let presenter = RecordingPresenter::new();
//! let mut game = GameBuilder::new()
//!     .presenter(presenter.clone())
//!     .scheduler(ManualScheduler::new())
//!     .picker(ScriptedPicker::new([Pad::Red, Pad::Green]))
//!     .build()
//!     .unwrap();
//!
//! game.start().unwrap();
//! game.settle();
//! assert_eq!(game.press(Pad::Red), PressOutcome::RoundComplete { round: 1 });
//!
//! game.settle();
//! assert_eq!(game.computer_sequence(), &[Pad::Red, Pad::Green]);
//! game.press(Pad::Red);
//! assert!(game.press(Pad::Blue).is_terminal());
//!
//! assert_eq!(game.phase(), Phase::Idle);
//! assert_eq!(presenter.outcomes(), vec![Outcome::Failed]);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod picker;
pub mod presenter;
#[cfg(feature = "runtime")]
pub mod runtime;
pub mod schedule;
pub mod testing;

// Re-export commonly used types
pub use crate::config::GameConfig;
pub use crate::core::{Pad, Phase};
pub use crate::error::GameError;
pub use crate::game::{GameBuilder, GameEvent, PressOutcome, SimonGame};
pub use crate::presenter::{Outcome, Presenter};
pub use crate::schedule::{ManualScheduler, Scheduler};
