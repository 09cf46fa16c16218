//! Core parsing for chess-engine static-evaluation reports.
//!
//! Converts the section-delimited text a patched engine prints for its
//! `eval` command into a typed [`PositionReport`], and interprets FEN
//! strings for piece listing and game-phase classification. All parsing
//! is synchronous and side-effect-free; individual report sections
//! degrade to empty values instead of failing the whole parse.

pub mod error;
pub mod fen;
pub mod phase;
pub mod report;
pub mod square;

pub use error::CoreError;
pub use fen::{
    board_placement, is_initial_position, parse_fen, piece_locations, FenRecord, PieceLocation,
    STANDARD_START_PLACEMENT,
};
pub use phase::{game_phase, GamePhase};
pub use report::{has_analysis, parse_report, EvalOutcome, PositionReport};
pub use square::Sq;
