//! Builder for assembling a game controller.

use crate::config::GameConfig;
use crate::game::controller::SimonGame;
use crate::game::error::BuildError;
use crate::picker::PadPicker;
use crate::presenter::Presenter;
use crate::schedule::Scheduler;

/// Fluent builder for `SimonGame`.
///
/// The presenter, scheduler and picker are required. The config defaults
/// to `GameConfig::default()` and is validated by `build`.
pub struct GameBuilder<P, S, K> {
    config: GameConfig,
    presenter: Option<P>,
    scheduler: Option<S>,
    picker: Option<K>,
}

impl<P: Presenter, S: Scheduler, K: PadPicker> GameBuilder<P, S, K> {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            presenter: None,
            scheduler: None,
            picker: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn presenter(mut self, presenter: P) -> Self {
        self.presenter = Some(presenter);
        self
    }

    pub fn scheduler(mut self, scheduler: S) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn picker(mut self, picker: K) -> Self {
        self.picker = Some(picker);
        self
    }

    /// Build the controller.
    /// Returns an error if a part is missing or the config is invalid.
    pub fn build(self) -> Result<SimonGame<P, S, K>, BuildError> {
        let presenter = self.presenter.ok_or(BuildError::MissingPresenter)?;
        let scheduler = self.scheduler.ok_or(BuildError::MissingScheduler)?;
        let picker = self.picker.ok_or(BuildError::MissingPicker)?;

        Ok(SimonGame::new(self.config, presenter, scheduler, picker)?)
    }
}

impl<P: Presenter, S: Scheduler, K: PadPicker> Default for GameBuilder<P, S, K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::core::Phase;
    use crate::picker::RandomPicker;
    use crate::schedule::ManualScheduler;
    use crate::testing::{RecordingPresenter, ScriptedPicker};
    use rand::rngs::StdRng;

    type Builder = GameBuilder<RecordingPresenter, ManualScheduler, ScriptedPicker>;

    #[test]
    fn builder_requires_presenter() {
        let result = Builder::new().build();
        assert!(matches!(result, Err(BuildError::MissingPresenter)));
    }

    #[test]
    fn builder_requires_scheduler() {
        let result = Builder::new().presenter(RecordingPresenter::new()).build();
        assert!(matches!(result, Err(BuildError::MissingScheduler)));
    }

    #[test]
    fn builder_requires_picker() {
        let result = Builder::new()
            .presenter(RecordingPresenter::new())
            .scheduler(ManualScheduler::new())
            .build();
        assert!(matches!(result, Err(BuildError::MissingPicker)));
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.timing.cue_duration_ms = 700;

        let result = Builder::new()
            .config(config)
            .presenter(RecordingPresenter::new())
            .scheduler(ManualScheduler::new())
            .picker(ScriptedPicker::new([]))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidConfig(ConfigError::Invalid(_)))
        ));
    }

    #[test]
    fn fluent_api_builds_idle_game() {
        let game = GameBuilder::<_, _, RandomPicker<StdRng>>::new()
            .presenter(RecordingPresenter::new())
            .scheduler(ManualScheduler::new())
            .picker(RandomPicker::seeded(3))
            .build()
            .unwrap();

        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.round_count(), 0);
        assert!(game.presenter().calls().is_empty());
    }
}
