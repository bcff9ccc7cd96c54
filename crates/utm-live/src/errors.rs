use thiserror::Error;

pub type LiveResult<T> = std::result::Result<T, LiveError>;

#[derive(Error, Debug)]
pub enum LiveError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("RON deserialization error {0}")]
    RonDeError(#[from] ron::de::SpannedError),

    #[error("simulation error: {0}")]
    SimError(#[from] utm_sim::SimError),

    #[error("failed to spawn tick loop: {0}")]
    LoopSpawnError(String),

    #[error("tick interval out of range: {0:?}")]
    InvalidInterval(std::time::Duration),
}

pub fn loop_spawn_error(msg: impl ToString) -> LiveError {
    LiveError::LoopSpawnError(msg.to_string())
}
