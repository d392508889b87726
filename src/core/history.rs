//! Phase transition history.
//!
//! The controller records every phase change so a shell (or a test) can
//! see how a session unfolded, including the terminal `Won`/`Failed` hop
//! that is immediately followed by the reset to `Idle`.

use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One recorded phase change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    pub from: Phase,
    pub to: Phase,
    /// Length of the computer sequence when the change happened.
    pub round: usize,
    pub timestamp: DateTime<Utc>,
}

impl PhaseTransition {
    /// Record a change stamped with the current time.
    pub fn now(from: Phase, to: Phase, round: usize) -> Self {
        Self {
            from,
            to,
            round,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of phase changes.
///
/// `record` returns a new history and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use simon::core::{Phase, PhaseHistory, PhaseTransition};
///
/// let history = PhaseHistory::new()
///     .record(PhaseTransition::now(Phase::Idle, Phase::ComputerPlaying, 1))
///     .record(PhaseTransition::now(Phase::ComputerPlaying, Phase::AwaitingHuman, 1));
///
/// assert_eq!(
///     history.get_path(),
///     vec![&Phase::Idle, &Phase::ComputerPlaying, &Phase::AwaitingHuman]
/// );
/// assert_eq!(history.count_entries(Phase::AwaitingHuman), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Phases traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// How many times the session entered `phase`.
    pub fn count_entries(&self, phase: Phase) -> usize {
        self.transitions.iter().filter(|t| t.to == phase).count()
    }

    /// The terminal phase of the most recent session, if it has ended.
    pub fn last_terminal(&self) -> Option<Phase> {
        self.transitions
            .iter()
            .rev()
            .map(|t| t.to)
            .find(Phase::is_final)
    }

    /// Time from first to last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn last(&self) -> Option<&PhaseTransition> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
