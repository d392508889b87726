//! Game session controller and its surrounding types.
//!
//! `SimonGame` is the state machine. It is generic over the presenter, the
//! scheduler and the pad picker, and is usually put together with
//! `GameBuilder`.
//!
//! # Example
//!
//! ```rust
//! use simon::core::{Pad, Phase};
//! use simon::game::{GameBuilder, PressOutcome};
//! use simon::schedule::ManualScheduler;
//! use simon::testing::{RecordingPresenter, ScriptedPicker};
//!
//! let mut game = GameBuilder::new()
//!     .presenter(RecordingPresenter::new())
//!     .scheduler(ManualScheduler::new())
//!     .picker(ScriptedPicker::new([Pad::Red, Pad::Green]))
//!     .build()
//!     .unwrap();
//!
//! game.start().unwrap();
//! assert_eq!(game.phase(), Phase::ComputerPlaying);
//!
//! game.settle();
//! assert_eq!(game.phase(), Phase::AwaitingHuman);
//! assert_eq!(game.press(Pad::Red), PressOutcome::RoundComplete { round: 1 });
//! ```

mod builder;
mod controller;
mod error;
mod snapshot;

pub use builder::GameBuilder;
pub use controller::SimonGame;
pub use error::BuildError;
pub use snapshot::Snapshot;

use crate::core::Pad;
use serde::{Deserialize, Serialize};

/// Input the controller consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start at the default level.
    Start,
    /// Start at a specific level.
    StartAt(u8),
    Press(Pad),
    Reset,
}

/// What a single press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressOutcome {
    /// Not the human turn; nothing changed.
    Ignored,
    /// Correct so far.
    Accepted { remaining: usize },
    /// Round matched; the next one starts after a pause.
    RoundComplete { round: usize },
    /// Final round matched. The session has been reset.
    Won { rounds: usize },
    /// Wrong pad. The session has been reset.
    Failed {
        index: usize,
        expected: Pad,
        actual: Pad,
    },
}

impl PressOutcome {
    /// The press ended the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Failed { .. })
    }
}

/// Reply to a `GameEvent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    Started { level: u8, target: usize },
    Pressed(PressOutcome),
    Reset,
}
