//! Pad identities.
//!
//! A pad is pure data: one of the four colors on the board. How a pad looks
//! or sounds is the presenter's business, keyed by this identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the fixed colored pads.
///
/// # Example
///
/// ```rust
/// use simon::core::Pad;
///
/// let pad: Pad = "green".parse().unwrap();
/// assert_eq!(pad, Pad::Green);
/// assert_eq!(pad.to_string(), "green");
/// assert_eq!(Pad::ALL.len(), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pad {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Pad {
    /// Every pad, in board order.
    pub const ALL: [Pad; 4] = [Pad::Red, Pad::Green, Pad::Yellow, Pad::Blue];

    /// Lowercase color name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for Pad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a string names no pad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown pad color '{0}'")]
pub struct UnknownPad(pub String);

impl FromStr for Pad {
    type Err = UnknownPad;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pad::ALL
            .iter()
            .copied()
            .find(|pad| pad.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPad(s.to_string()))
    }
}
