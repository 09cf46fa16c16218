//! Worker configuration from environment variables

use std::env;

use crate::error::WorkerError;

#[derive(Clone, Debug)]
pub struct WorkerConfig {
    /// Path to the patched engine binary that prints position analysis.
    pub stockfish_path: String,
}

impl WorkerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, WorkerError> {
        let stockfish_path =
            env::var("STOCKFISH_PATH").map_err(|_| WorkerError::Config("STOCKFISH_PATH not set"))?;

        Ok(Self { stockfish_path })
    }
}
