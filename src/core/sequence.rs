//! The computer and human sequences of a session, and the pure press check.

use super::pad::Pad;
use serde::{Deserialize, Serialize};

/// Result of comparing one human press against the computer sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressCheck {
    /// Matches so far; `remaining` presses are still needed this round.
    Matched { remaining: usize },
    /// The human sequence now equals the computer sequence.
    Completed,
    /// Wrong pad at `index`.
    Mismatch {
        index: usize,
        expected: Pad,
        actual: Pad,
    },
}

/// Both sequences of a running session.
///
/// The computer sequence only ever grows by one per round. The human
/// sequence is cleared at every human turn and is kept a prefix of the
/// computer sequence: a press that breaks the prefix is reported as a
/// mismatch.
///
/// # Example
///
/// ```rust
/// use simon::core::{Pad, PressCheck, Sequences};
///
/// let mut seq = Sequences::new();
/// seq.extend(Pad::Red);
/// seq.extend(Pad::Green);
/// seq.begin_human_turn();
///
/// assert_eq!(seq.press(Pad::Red), PressCheck::Matched { remaining: 1 });
/// assert_eq!(
///     seq.press(Pad::Blue),
///     PressCheck::Mismatch { index: 1, expected: Pad::Green, actual: Pad::Blue }
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequences {
    computer: Vec<Pad>,
    human: Vec<Pad>,
}

impl Sequences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next pad of a new round.
    pub fn extend(&mut self, pad: Pad) {
        self.computer.push(pad);
    }

    /// Start a fresh human attempt at the current round.
    pub fn begin_human_turn(&mut self) {
        self.human.clear();
    }

    /// Record a press and compare it at the same index.
    ///
    /// A press past the end of the computer sequence cannot match anything
    /// and is reported against the last pad.
    pub fn press(&mut self, pad: Pad) -> PressCheck {
        self.human.push(pad);
        let index = self.human.len() - 1;

        match self.computer.get(index) {
            Some(&expected) if expected == pad => {
                let remaining = self.computer.len() - self.human.len();
                if remaining == 0 {
                    PressCheck::Completed
                } else {
                    PressCheck::Matched { remaining }
                }
            }
            Some(&expected) => PressCheck::Mismatch {
                index,
                expected,
                actual: pad,
            },
            None => PressCheck::Mismatch {
                index,
                expected: self.computer.last().copied().unwrap_or(pad),
                actual: pad,
            },
        }
    }

    /// Human presses so far form a prefix of the computer sequence.
    pub fn human_is_prefix(&self) -> bool {
        self.computer.starts_with(&self.human)
    }

    pub fn clear(&mut self) {
        self.computer.clear();
        self.human.clear();
    }

    pub fn computer(&self) -> &[Pad] {
        &self.computer
    }

    pub fn human(&self) -> &[Pad] {
        &self.human
    }

    /// Computer sequence length, which is also the round being played.
    pub fn round(&self) -> usize {
        self.computer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.computer.is_empty() && self.human.is_empty()
    }
}
