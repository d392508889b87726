//! Pure core of the game.
//!
//! This module holds the data the state machine works on:
//! - `Pad` identities
//! - `Phase` of a session
//! - the computer and human `Sequences` and the press check
//! - the `PhaseHistory` of a session
//!
//! Nothing here schedules timers or talks to a presenter.

mod history;
mod pad;
mod phase;
mod sequence;

pub use history::{PhaseHistory, PhaseTransition};
pub use pad::{Pad, UnknownPad};
pub use phase::Phase;
pub use sequence::{PressCheck, Sequences};
