//! Output capability the controller drives.
//!
//! A presenter owns everything visual and audible: pad highlights, sounds,
//! status and heading text, the start affordance. One presenter serves a
//! browser page, a terminal, or a recording test double. Failures of the
//! underlying device are the presenter's to handle.

use crate::core::Pad;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Failed,
}

impl Outcome {
    /// Message shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Won => "You win!",
            Self::Failed => "Oops! Try again.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub trait Presenter {
    /// Turn a pad highlight on or off.
    fn highlight_pad(&mut self, pad: Pad, lit: bool);

    fn play_sound(&mut self, pad: Pad);

    /// Start a cue: sound plus highlight. The controller releases the
    /// highlight when the cue duration has passed.
    fn play_cue(&mut self, pad: Pad) {
        self.play_sound(pad);
        self.highlight_pad(pad, true);
    }

    fn set_status_text(&mut self, text: &str);

    fn set_status_visible(&mut self, visible: bool);

    fn set_heading_text(&mut self, text: &str);

    /// Allow or block pad clicks.
    fn set_input_enabled(&mut self, enabled: bool);

    fn show_start_affordance(&mut self, visible: bool);

    /// Tell the player how the session ended.
    fn announce_outcome(&mut self, outcome: Outcome);
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn highlight_pad(&mut self, pad: Pad, lit: bool) {
        (**self).highlight_pad(pad, lit)
    }

    fn play_sound(&mut self, pad: Pad) {
        (**self).play_sound(pad)
    }

    fn play_cue(&mut self, pad: Pad) {
        (**self).play_cue(pad)
    }

    fn set_status_text(&mut self, text: &str) {
        (**self).set_status_text(text)
    }

    fn set_status_visible(&mut self, visible: bool) {
        (**self).set_status_visible(visible)
    }

    fn set_heading_text(&mut self, text: &str) {
        (**self).set_heading_text(text)
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        (**self).set_input_enabled(enabled)
    }

    fn show_start_affordance(&mut self, visible: bool) {
        (**self).show_start_affordance(visible)
    }

    fn announce_outcome(&mut self, outcome: Outcome) {
        (**self).announce_outcome(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_messages() {
        assert_eq!(Outcome::Won.message(), "You win!");
        assert_eq!(Outcome::Failed.to_string(), "Oops! Try again.");
    }
}
