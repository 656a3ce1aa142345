use stagefire_core::error::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("game loop already running")]
    AlreadyRunning,
    #[error("game loop not started")]
    NotStarted,
    #[error("game loop has shut down")]
    Disconnected,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
