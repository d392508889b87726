//! Session phases of the round-sequence state machine.
//!
//! All methods are pure and only describe where the session is. Moving
//! between phases is the controller's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a game session currently is.
///
/// `Won` and `Failed` are terminal: the controller surfaces the outcome and
/// resets to `Idle` straight away, so they mostly show up in the history.
///
/// # Example
///
/// ```rust
/// use simon::core::Phase;
///
/// assert!(Phase::AwaitingHuman.accepts_input());
/// assert!(!Phase::ComputerPlaying.accepts_input());
/// assert!(Phase::Failed.is_final());
/// assert!(Phase::Failed.is_error());
/// assert!(!Phase::Won.is_error());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    ComputerPlaying,
    AwaitingHuman,
    RoundAdvancing,
    Won,
    Failed,
}

impl Phase {
    /// Name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::ComputerPlaying => "ComputerPlaying",
            Self::AwaitingHuman => "AwaitingHuman",
            Self::RoundAdvancing => "RoundAdvancing",
            Self::Won => "Won",
            Self::Failed => "Failed",
        }
    }

    /// Terminal phases end the session.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Won | Self::Failed)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Only the human turn takes pad presses.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::AwaitingHuman)
    }

    /// A session is running between start and reset.
    pub fn is_session_active(&self) -> bool {
        matches!(
            self,
            Self::ComputerPlaying | Self::AwaitingHuman | Self::RoundAdvancing
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Phase; 6] = [
        Phase::Idle,
        Phase::ComputerPlaying,
        Phase::AwaitingHuman,
        Phase::RoundAdvancing,
        Phase::Won,
        Phase::Failed,
    ];

    #[test]
    fn only_awaiting_human_accepts_input() {
        let accepting: Vec<_> = ALL.iter().filter(|p| p.accepts_input()).collect();
        assert_eq!(accepting, vec![&Phase::AwaitingHuman]);
    }

    #[test]
    fn final_phases_are_won_and_failed() {
        assert!(Phase::Won.is_final());
        assert!(Phase::Failed.is_final());
        assert!(!Phase::Idle.is_final());
        assert!(!Phase::RoundAdvancing.is_final());
    }

    #[test]
    fn active_phases_exclude_idle_and_terminal() {
        assert!(!Phase::Idle.is_session_active());
        assert!(Phase::ComputerPlaying.is_session_active());
        assert!(Phase::AwaitingHuman.is_session_active());
        assert!(Phase::RoundAdvancing.is_session_active());
        assert!(!Phase::Won.is_session_active());
        assert!(!Phase::Failed.is_session_active());
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn display_matches_name() {
        for phase in ALL {
            assert_eq!(phase.to_string(), phase.name());
        }
    }
}
