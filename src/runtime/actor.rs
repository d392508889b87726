//! Actor task that owns a controller.

use crate::config::{ConfigError, GameConfig};
use crate::core::Pad;
use crate::error::GameError;
use crate::game::{PressOutcome, SimonGame, Snapshot};
use crate::picker::PadPicker;
use crate::presenter::Presenter;
use crate::runtime::scheduler::TokioScheduler;
use crate::schedule::Timer;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

const COMMAND_BUFFER: usize = 32;

enum Command {
    Start {
        level: Option<u8>,
        reply: oneshot::Sender<Result<usize, GameError>>,
    },
    Press {
        pad: Pad,
        reply: oneshot::Sender<PressOutcome>,
    },
    Reset {
        reply: oneshot::Sender<()>,
    },
    Snapshot {
        reply: oneshot::Sender<Snapshot>,
    },
    Shutdown,
}

/// Cloneable handle to a game running on its own task.
#[derive(Clone, Debug)]
pub struct GameHandle {
    tx: mpsc::Sender<Command>,
}

/// Spawn a game actor on the current tokio runtime.
///
/// The actor stops when `shutdown` is called or every handle is dropped.
pub fn spawn_game<P, K>(config: GameConfig, presenter: P, picker: K) -> Result<GameHandle, ConfigError>
where
    P: Presenter + Send + 'static,
    K: PadPicker + Send + 'static,
{
    let (scheduler, timers) = TokioScheduler::new();
    let game = SimonGame::new(config, presenter, scheduler, picker)?;
    let (tx, commands) = mpsc::channel(COMMAND_BUFFER);
    tokio::spawn(run(game, commands, timers));
    Ok(GameHandle { tx })
}

async fn run<P, K>(
    mut game: SimonGame<P, TokioScheduler, K>,
    mut commands: mpsc::Receiver<Command>,
    mut timers: mpsc::UnboundedReceiver<Timer>,
) where
    P: Presenter,
    K: PadPicker,
{
    info!("game actor started");
    loop {
        tokio::select! {
            Some(timer) = timers.recv() => game.fire(timer),
            command = commands.recv() => match command {
                Some(Command::Start { level, reply }) => {
                    let result = match level {
                        Some(level) => game.start_at(level),
                        None => game.start(),
                    };
                    let _ = reply.send(result);
                }
                Some(Command::Press { pad, reply }) => {
                    let _ = reply.send(game.press(pad));
                }
                Some(Command::Reset { reply }) => {
                    game.reset();
                    let _ = reply.send(());
                }
                Some(Command::Snapshot { reply }) => {
                    let _ = reply.send(game.snapshot());
                }
                Some(Command::Shutdown) | None => break,
            },
        }
    }
    game.reset();
    debug!("game actor stopped");
}

impl GameHandle {
    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, GameError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(command(reply))
            .await
            .map_err(|_| GameError::RuntimeClosed)?;
        rx.await.map_err(|_| GameError::RuntimeClosed)
    }

    /// Start at the default level, returning the target round count.
    pub async fn start(&self) -> Result<usize, GameError> {
        self.request(|reply| Command::Start { level: None, reply })
            .await?
    }

    pub async fn start_at(&self, level: u8) -> Result<usize, GameError> {
        self.request(|reply| Command::Start {
            level: Some(level),
            reply,
        })
        .await?
    }

    pub async fn press(&self, pad: Pad) -> Result<PressOutcome, GameError> {
        self.request(|reply| Command::Press { pad, reply }).await
    }

    pub async fn reset(&self) -> Result<(), GameError> {
        self.request(|reply| Command::Reset { reply }).await
    }

    pub async fn snapshot(&self) -> Result<Snapshot, GameError> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Stop the actor. Pending timers are cancelled.
    pub async fn shutdown(&self) -> Result<(), GameError> {
        self.tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| GameError::RuntimeClosed)
    }
}
