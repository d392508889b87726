//! Tokio runtime for a game controller.
//!
//! `spawn_game` moves a `SimonGame` onto its own task. Every start, press
//! and timer is handled by that one task, so the controller keeps its
//! single-threaded semantics even when handles are shared across threads.

mod actor;
mod scheduler;

pub use actor::{spawn_game, GameHandle};
pub use scheduler::TokioScheduler;
