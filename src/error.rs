//! Errors surfaced by the game controller.
//!
//! Gameplay outcomes (a wrong pad, a win) are not errors. They are phase
//! transitions with an `Outcome` message.

use crate::core::Phase;
use thiserror::Error;

/// Rejections returned by controller operations.
///
/// A rejected call never mutates session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid level: {level}")]
    InvalidLevel { level: u8 },

    #[error("A session is already in progress (phase '{phase}')")]
    SessionInProgress { phase: Phase },

    #[error("Game runtime has shut down")]
    RuntimeClosed,
}
