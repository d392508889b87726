//! Timer seam between the controller and whatever drives time.
//!
//! The controller never sleeps. It asks a `Scheduler` to deliver a `Timer`
//! after a delay, and the host hands fired timers back through
//! `SimonGame::fire`. Timers are plain data, so a test double can run them
//! under virtual time.

mod manual;

pub use manual::ManualScheduler;

use crate::core::Pad;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Handle for cancelling a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Light and sound cue `index` of the playback.
    Cue { index: usize, pad: Pad },
    /// Release the highlight of a cue.
    CueRelease { pad: Pad },
    /// Playback has settled; open the human turn.
    HumanTurn,
    /// Pause after a completed round is over; play the next round.
    NextRound,
}

/// A scheduled callback, tagged with the session epoch that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    pub epoch: u64,
    pub kind: TimerKind,
}

/// Delivers timers back to the controller after a delay.
pub trait Scheduler {
    /// Arrange for `timer` to fire once `delay` has elapsed.
    fn schedule_after(&mut self, delay: Duration, timer: Timer) -> TimerId;

    /// Drop a pending timer. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn schedule_after(&mut self, delay: Duration, timer: Timer) -> TimerId {
        (**self).schedule_after(delay, timer)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id)
    }
}
