//! Worker error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Configuration error: {0}")]
    Config(&'static str),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Evaluation error: {0}")]
    Eval(#[from] eval_core::CoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
