//! Game-phase classification from material weight and move count.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;
use crate::fen::parse_fen;

/// Coarse game phase derived from the FEN alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Opening => "Opening",
            GamePhase::Middlegame => "Middlegame",
            GamePhase::Endgame => "Endgame",
        };
        write!(f, "{name}")
    }
}

/// Below this total weight the position is an endgame.
const ENDGAME_WEIGHT_LIMIT: u32 = 6;

/// Below this fullmove number a non-endgame position is an opening.
const OPENING_MOVE_LIMIT: u32 = 15;

fn piece_weight(piece: char) -> u32 {
    match piece.to_ascii_lowercase() {
        'n' | 'b' => 1,
        'r' => 2,
        'q' => 4,
        _ => 0,
    }
}

/// Classify the phase: material weight first, move count second.
pub fn game_phase(fen: &str) -> Result<GamePhase, CoreError> {
    let record = parse_fen(fen)?;
    let total_weight: u32 = record.placement.chars().map(piece_weight).sum();

    if total_weight < ENDGAME_WEIGHT_LIMIT {
        Ok(GamePhase::Endgame)
    } else if record.fullmove_number < OPENING_MOVE_LIMIT {
        Ok(GamePhase::Opening)
    } else {
        Ok(GamePhase::Middlegame)
    }
}
