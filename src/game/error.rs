//! Errors raised while assembling a controller.

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Presenter not specified. Call .presenter(p) before .build()")]
    MissingPresenter,

    #[error("Scheduler not specified. Call .scheduler(s) before .build()")]
    MissingScheduler,

    #[error("Pad picker not specified. Call .picker(k) before .build()")]
    MissingPicker,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
