//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// The FEN string is structurally invalid.
    #[error("Malformed FEN: {0}")]
    MalformedFen(String),

    /// The report passed the header gate but a delimiter is missing.
    #[error("Malformed report: {0}")]
    MalformedReport(&'static str),
}
