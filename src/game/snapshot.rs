//! Read-only view of a session.

use crate::core::{Pad, Phase};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Copy of the controller's state at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub session_id: Option<Uuid>,
    pub phase: Phase,
    pub level: u8,
    pub round_count: usize,
    pub current_round: usize,
    pub computer: Vec<Pad>,
    pub human: Vec<Pad>,
}

impl Snapshot {
    /// Both sequences are empty and every counter is zero.
    pub fn is_reset(&self) -> bool {
        self.phase == Phase::Idle
            && self.computer.is_empty()
            && self.human.is_empty()
            && self.level == 0
            && self.round_count == 0
            && self.current_round == 0
    }
}
