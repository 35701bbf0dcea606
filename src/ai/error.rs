//! Error types for the AI host
//!
//! A side with no legal move is not an error: searches report it as
//! `Ok(None)`.

use thiserror::Error;
use xiangqi_engine::EngineError;

#[derive(Error, Debug)]
pub enum AiError {
    /// The worker thread could not be started
    #[error("Failed to spawn AI worker: {0}")]
    Spawn(#[from] std::io::Error),

    /// The worker panicked mid-search
    #[error("AI worker panicked: {0}")]
    WorkerPanicked(String),

    /// The worker went away without a result
    #[error("AI worker disconnected before reporting a result")]
    Disconnected,

    /// The search was cancelled by its owner
    #[error("AI search was cancelled")]
    Cancelled,

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

pub type AiResult<T> = Result<T, AiError>;
