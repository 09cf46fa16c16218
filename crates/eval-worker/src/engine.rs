//! Engine subprocess adapter: feeds a position to the `eval` command and
//! collects the raw report text.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::WorkerError;

/// One-shot wrapper around the engine binary. The engine reads commands
/// until stdin closes, prints its report, and exits on its own; process
/// lifecycle beyond that is not managed here.
pub struct EvalEngine {
    path: String,
}

impl EvalEngine {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    /// Run `position fen <fen>` followed by `eval` and return the engine's
    /// full stdout. Anything on stderr fails the evaluation.
    pub async fn static_eval(&self, fen: &str) -> Result<String, WorkerError> {
        let mut child = Command::new(&self.path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| WorkerError::Engine(format!("Failed to spawn engine: {e}")))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| WorkerError::Engine("Failed to open engine stdin".into()))?;

        let commands = format!("position fen {fen}\neval\n");
        debug!(%fen, "engine <");
        stdin
            .write_all(commands.as_bytes())
            .await
            .map_err(|e| WorkerError::Engine(format!("Failed to write to engine: {e}")))?;
        // Closing stdin lets the engine finish and exit.
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| WorkerError::Engine(format!("Failed to read engine output: {e}")))?;

        if !output.stderr.is_empty() {
            return Err(WorkerError::Engine(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
