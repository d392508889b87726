//! Virtual-time scheduler for tests and headless shells.

use super::{Scheduler, Timer, TimerId};
use std::collections::BTreeMap;
use std::time::Duration;

/// Scheduler that only moves when told to.
///
/// Timers are ordered by deadline, then by the order they were scheduled.
///
/// # Example
///
/// ```rust
/// use simon::schedule::{ManualScheduler, Scheduler, Timer, TimerKind};
/// use std::time::Duration;
///
/// let mut clock = ManualScheduler::new();
/// let timer = Timer { epoch: 0, kind: TimerKind::HumanTurn };
/// clock.schedule_after(Duration::from_millis(100), timer);
///
/// let deadline = clock.now() + Duration::from_millis(50);
/// assert!(clock.pop_due(deadline).is_none());
///
/// let deadline = clock.now() + Duration::from_millis(100);
/// assert_eq!(clock.pop_due(deadline), Some(timer));
/// assert_eq!(clock.now(), Duration::from_millis(100));
/// ```
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, TimerId), Timer>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Remove the earliest timer due at or before `deadline`, moving the
    /// clock to its deadline.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Timer> {
        let (&(due, id), _) = self.pending.first_key_value()?;
        if due > deadline {
            return None;
        }
        let timer = self.pending.remove(&(due, id))?;
        self.now = self.now.max(due);
        Some(timer)
    }

    /// Move the clock forward without firing anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|&(due, _)| due)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Pending timers in firing order with their deadlines.
    pub fn queued(&self) -> Vec<(Duration, Timer)> {
        self.pending
            .iter()
            .map(|(&(due, _), &timer)| (due, timer))
            .collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&mut self, delay: Duration, timer: Timer) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((self.now + delay, id), timer);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|&(_, pending_id), _| pending_id != id);
    }
}
