//! Test doubles for driving a game without a real board.
//!
//! `RecordingPresenter` keeps every presenter call in order behind a shared
//! handle, so a test can keep inspecting it after the presenter has been
//! moved into a controller or an actor. `ScriptedPicker` replays a fixed
//! list of pads.

use crate::core::Pad;
use crate::picker::PadPicker;
use crate::presenter::{Outcome, Presenter};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// One recorded presenter call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresenterCall {
    Highlight { pad: Pad, lit: bool },
    Sound(Pad),
    Status(String),
    StatusVisible(bool),
    Heading(String),
    InputEnabled(bool),
    StartAffordance(bool),
    Outcome(Outcome),
}

/// Presenter that records calls into a shared log.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    log: Arc<Mutex<Vec<PresenterCall>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> MutexGuard<'_, Vec<PresenterCall>> {
        // A panicking test thread poisons the lock; the log is still usable.
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, call: PresenterCall) {
        self.log().push(call);
    }

    pub fn calls(&self) -> Vec<PresenterCall> {
        self.log().clone()
    }

    /// Drain the log, returning what was recorded so far.
    pub fn take(&self) -> Vec<PresenterCall> {
        std::mem::take(&mut *self.log())
    }

    /// Pads that received a sound, in order.
    pub fn sounds(&self) -> Vec<Pad> {
        self.log()
            .iter()
            .filter_map(|call| match call {
                PresenterCall::Sound(pad) => Some(*pad),
                _ => None,
            })
            .collect()
    }

    pub fn outcomes(&self) -> Vec<Outcome> {
        self.log()
            .iter()
            .filter_map(|call| match call {
                PresenterCall::Outcome(outcome) => Some(*outcome),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<String> {
        self.log().iter().rev().find_map(|call| match call {
            PresenterCall::Status(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn input_enabled(&self) -> Option<bool> {
        self.log().iter().rev().find_map(|call| match call {
            PresenterCall::InputEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }

    /// Number of pads lit right now.
    pub fn lit_pads(&self) -> usize {
        let log = self.log();
        Pad::ALL
            .iter()
            .filter(|&&pad| {
                log.iter().rev().find_map(|call| match call {
                    PresenterCall::Highlight { pad: p, lit } if *p == pad => Some(*lit),
                    _ => None,
                }) == Some(true)
            })
            .count()
    }
}

impl Presenter for RecordingPresenter {
    fn highlight_pad(&mut self, pad: Pad, lit: bool) {
        self.push(PresenterCall::Highlight { pad, lit });
    }

    fn play_sound(&mut self, pad: Pad) {
        self.push(PresenterCall::Sound(pad));
    }

    fn set_status_text(&mut self, text: &str) {
        self.push(PresenterCall::Status(text.to_string()));
    }

    fn set_status_visible(&mut self, visible: bool) {
        self.push(PresenterCall::StatusVisible(visible));
    }

    fn set_heading_text(&mut self, text: &str) {
        self.push(PresenterCall::Heading(text.to_string()));
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.push(PresenterCall::InputEnabled(enabled));
    }

    fn show_start_affordance(&mut self, visible: bool) {
        self.push(PresenterCall::StartAffordance(visible));
    }

    fn announce_outcome(&mut self, outcome: Outcome) {
        self.push(PresenterCall::Outcome(outcome));
    }
}

/// Picker that replays a script, then repeats its last pad.
///
/// # Example
///
/// ```rust
/// use simon::core::Pad;
/// use simon::picker::PadPicker;
/// use simon::testing::ScriptedPicker;
///
/// let mut picker = ScriptedPicker::new([Pad::Red, Pad::Green]);
/// assert_eq!(picker.pick(&Pad::ALL), Pad::Red);
/// assert_eq!(picker.pick(&Pad::ALL), Pad::Green);
/// assert_eq!(picker.pick(&Pad::ALL), Pad::Green);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedPicker {
    script: VecDeque<Pad>,
    last: Pad,
}

impl ScriptedPicker {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Pad>,
    {
        Self {
            script: script.into_iter().collect(),
            last: Pad::Red,
        }
    }
}

impl PadPicker for ScriptedPicker {
    fn pick(&mut self, _pads: &[Pad]) -> Pad {
        if let Some(pad) = self.script.pop_front() {
            self.last = pad;
        }
        self.last
    }
}
