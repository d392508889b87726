//! The game session controller.

use crate::config::{ConfigError, GameConfig};
use crate::core::{Pad, Phase, PhaseHistory, PhaseTransition, PressCheck, Sequences};
use crate::error::GameError;
use crate::game::snapshot::Snapshot;
use crate::game::{GameEvent, PressOutcome, Response};
use crate::picker::PadPicker;
use crate::presenter::{Outcome, Presenter};
use crate::schedule::{ManualScheduler, Scheduler, Timer, TimerId, TimerKind};
use std::time::Duration;
use tracing::{debug, info, info_span, trace, Span};
use uuid::Uuid;

const HEADING: &str = "Simon Says";

/// Owns one game session and drives it through its phases.
///
/// The controller reacts to three inputs: start requests, pad presses and
/// timers it scheduled itself. Everything it shows or plays goes through
/// the presenter.
pub struct SimonGame<P, S, K> {
    config: GameConfig,
    presenter: P,
    scheduler: S,
    picker: K,
    phase: Phase,
    level: u8,
    round_count: usize,
    current_round: usize,
    sequences: Sequences,
    history: PhaseHistory,
    session_id: Option<Uuid>,
    span: Span,
    epoch: u64,
    pending: Vec<TimerId>,
    lit: Vec<Pad>,
}

impl<P: Presenter, S: Scheduler, K: PadPicker> SimonGame<P, S, K> {
    /// Create an idle controller. The config is validated first.
    pub fn new(
        config: GameConfig,
        presenter: P,
        scheduler: S,
        picker: K,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            presenter,
            scheduler,
            picker,
            phase: Phase::Idle,
            level: 0,
            round_count: 0,
            current_round: 0,
            sequences: Sequences::new(),
            history: PhaseHistory::new(),
            session_id: None,
            span: Span::none(),
            epoch: 0,
            pending: Vec::new(),
            lit: Vec::new(),
        })
    }

    /// Select a level while idle, returning its target round count.
    ///
    /// Unknown levels and calls during a session are rejected without
    /// touching any state.
    pub fn set_level(&mut self, level: u8) -> Result<usize, GameError> {
        if self.phase.is_session_active() {
            return Err(GameError::SessionInProgress { phase: self.phase });
        }
        let target = self.config.levels.target_rounds(level)?;
        self.level = level;
        self.round_count = target;
        self.current_round = 1;
        debug!(level, target, "level selected");
        Ok(target)
    }

    /// Start a session at the configured default level.
    pub fn start(&mut self) -> Result<usize, GameError> {
        self.start_at(self.config.default_level)
    }

    /// Start a session at `level` and play the first round.
    pub fn start_at(&mut self, level: u8) -> Result<usize, GameError> {
        let target = self.set_level(level)?;

        let id = Uuid::new_v4();
        self.session_id = Some(id);
        self.span = info_span!("session", id = %id, level);
        let span = self.span.clone();
        let _entered = span.enter();

        self.cancel_pending();
        self.history = PhaseHistory::new();
        self.sequences.clear();
        self.current_round = 1;

        self.presenter.show_start_affordance(false);
        self.presenter.set_heading_text(HEADING);
        info!(target, "session started");

        self.begin_round();
        Ok(target)
    }

    /// Handle a pad press. Presses outside the human turn are ignored.
    pub fn press(&mut self, pad: Pad) -> PressOutcome {
        let span = self.span.clone();
        let _entered = span.enter();

        if !self.phase.accepts_input() {
            debug!(%pad, phase = %self.phase, "press ignored");
            return PressOutcome::Ignored;
        }

        self.light(pad);
        self.schedule(self.config.timing.cue_duration(), TimerKind::CueRelease { pad });

        match self.sequences.press(pad) {
            PressCheck::Matched { remaining } => {
                trace!(%pad, remaining, "press matched");
                PressOutcome::Accepted { remaining }
            }
            PressCheck::Mismatch {
                index,
                expected,
                actual,
            } => {
                info!(index, %expected, %actual, round = self.sequences.round(), "sequence mismatch");
                self.transition(Phase::Failed);
                self.finish(Outcome::Failed);
                PressOutcome::Failed {
                    index,
                    expected,
                    actual,
                }
            }
            PressCheck::Completed => {
                let round = self.sequences.round();
                if round == self.round_count {
                    info!(rounds = round, "session won");
                    self.transition(Phase::Won);
                    self.finish(Outcome::Won);
                    PressOutcome::Won { rounds: round }
                } else {
                    debug!(round, "round complete");
                    self.current_round += 1;
                    self.transition(Phase::RoundAdvancing);
                    self.presenter.set_input_enabled(false);
                    self.schedule(
                        self.config.timing.round_advance_delay(),
                        TimerKind::NextRound,
                    );
                    PressOutcome::RoundComplete { round }
                }
            }
        }
    }

    /// Deliver a timer that this controller scheduled.
    ///
    /// Timers from an earlier session epoch are dropped.
    pub fn fire(&mut self, timer: Timer) {
        let span = self.span.clone();
        let _entered = span.enter();

        if timer.epoch != self.epoch {
            debug!(?timer, epoch = self.epoch, "dropping stale timer");
            return;
        }

        match timer.kind {
            TimerKind::Cue { index, pad } => {
                if self.phase != Phase::ComputerPlaying {
                    trace!(index, %pad, phase = %self.phase, "cue outside playback");
                    return;
                }
                trace!(index, %pad, "cue");
                self.light(pad);
                self.schedule(self.config.timing.cue_duration(), TimerKind::CueRelease { pad });
            }
            TimerKind::CueRelease { pad } => self.release(pad),
            TimerKind::HumanTurn => {
                if self.phase == Phase::ComputerPlaying {
                    self.begin_human_turn();
                }
            }
            TimerKind::NextRound => {
                if self.phase == Phase::RoundAdvancing {
                    self.sequences.begin_human_turn();
                    self.begin_round();
                }
            }
        }
    }

    /// Abandon any running session and return to idle.
    ///
    /// Calling this on an idle controller with no level selected does
    /// nothing.
    pub fn reset(&mut self) {
        if self.phase == Phase::Idle
            && self.sequences.is_empty()
            && self.level == 0
            && self.round_count == 0
            && self.current_round == 0
        {
            return;
        }
        let span = self.span.clone();
        let _entered = span.enter();
        info!(phase = %self.phase, "session reset");
        self.reset_state();
    }

    /// Dispatch an input event.
    pub fn handle(&mut self, event: GameEvent) -> Result<Response, GameError> {
        match event {
            GameEvent::Start => self.start().map(|target| Response::Started {
                level: self.level,
                target,
            }),
            GameEvent::StartAt(level) => self
                .start_at(level)
                .map(|target| Response::Started { level, target }),
            GameEvent::Press(pad) => Ok(Response::Pressed(self.press(pad))),
            GameEvent::Reset => {
                self.reset();
                Ok(Response::Reset)
            }
        }
    }

    fn begin_round(&mut self) {
        let pad = self.picker.pick(&Pad::ALL);
        self.sequences.extend(pad);
        let round = self.sequences.round();
        self.transition(Phase::ComputerPlaying);

        self.presenter
            .set_status_text(&format!("Round {round} — Watch closely"));
        self.presenter.set_status_visible(true);
        self.presenter.set_input_enabled(false);

        let timing = self.config.timing.clone();
        let cues: Vec<(usize, Pad)> = self.sequences.computer().iter().copied().enumerate().collect();
        for (index, pad) in cues {
            self.schedule(timing.cue_offset(index), TimerKind::Cue { index, pad });
        }
        self.schedule(timing.human_turn_offset(round), TimerKind::HumanTurn);
        debug!(round, %pad, "playback scheduled");
    }

    fn begin_human_turn(&mut self) {
        self.sequences.begin_human_turn();
        self.transition(Phase::AwaitingHuman);
        self.presenter.set_status_text("Your turn");
        self.presenter.set_input_enabled(true);
    }

    fn finish(&mut self, outcome: Outcome) {
        self.presenter.announce_outcome(outcome);
        self.reset_state();
    }

    fn reset_state(&mut self) {
        self.cancel_pending();
        self.epoch += 1;
        for pad in std::mem::take(&mut self.lit) {
            self.presenter.highlight_pad(pad, false);
        }

        self.presenter.set_heading_text(HEADING);
        self.presenter.show_start_affordance(true);
        self.presenter.set_status_visible(false);
        self.presenter.set_input_enabled(false);

        self.sequences.clear();
        self.level = 0;
        self.round_count = 0;
        self.current_round = 0;
        if self.phase != Phase::Idle {
            self.transition(Phase::Idle);
        }
        self.session_id = None;
    }

    fn transition(&mut self, to: Phase) {
        let from = self.phase;
        let round = self.sequences.round();
        self.history = self
            .history
            .record(PhaseTransition::now(from, to, round));
        debug!(%from, %to, round, "phase transition");
        self.phase = to;
    }

    fn schedule(&mut self, delay: Duration, kind: TimerKind) {
        let timer = Timer {
            epoch: self.epoch,
            kind,
        };
        let id = self.scheduler.schedule_after(delay, timer);
        self.pending.push(id);
    }

    fn cancel_pending(&mut self) {
        for id in self.pending.drain(..) {
            self.scheduler.cancel(id);
        }
    }

    fn light(&mut self, pad: Pad) {
        self.presenter.play_cue(pad);
        if !self.lit.contains(&pad) {
            self.lit.push(pad);
        }
    }

    fn release(&mut self, pad: Pad) {
        if let Some(pos) = self.lit.iter().position(|&p| p == pad) {
            self.lit.swap_remove(pos);
            self.presenter.highlight_pad(pad, false);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Selected level, or 0 when none is selected.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Rounds needed to win the current session.
    pub fn round_count(&self) -> usize {
        self.round_count
    }

    pub fn current_round(&self) -> usize {
        self.current_round
    }

    pub fn computer_sequence(&self) -> &[Pad] {
        self.sequences.computer()
    }

    pub fn human_sequence(&self) -> &[Pad] {
        self.sequences.human()
    }

    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    /// Counter bumped by every reset; scheduled timers carry it.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session_id: self.session_id,
            phase: self.phase,
            level: self.level,
            round_count: self.round_count,
            current_round: self.current_round,
            computer: self.sequences.computer().to_vec(),
            human: self.sequences.human().to_vec(),
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<P: Presenter, K: PadPicker> SimonGame<P, ManualScheduler, K> {
    /// Move virtual time forward by `by`, firing every timer that comes
    /// due, including timers scheduled by earlier ones. Returns how many
    /// fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let deadline = self.scheduler.now() + by;
        let mut fired = 0;
        while let Some(timer) = self.scheduler.pop_due(deadline) {
            self.fire(timer);
            fired += 1;
        }
        self.scheduler.set_now(deadline);
        fired
    }

    /// Fire timers until none are pending. Returns the virtual time spent.
    pub fn settle(&mut self) -> Duration {
        let start = self.scheduler.now();
        while let Some(deadline) = self.scheduler.next_deadline() {
            if let Some(timer) = self.scheduler.pop_due(deadline) {
                self.fire(timer);
            }
        }
        self.scheduler.now() - start
    }
}
