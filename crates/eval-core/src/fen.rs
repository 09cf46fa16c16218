//! FEN decoding — board placement, side to move, move counters.

use serde::Serialize;
use shakmaty::fen::Fen;
use shakmaty::{Board, Color, Role};

use crate::error::CoreError;
use crate::square::{piece_label, Sq};

/// Placement field of the standard starting position.
pub const STANDARD_START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// The six whitespace-separated fields of a FEN string. Only the placement
/// and fullmove number are consumed by the core; castling rights and the
/// en-passant target pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenRecord {
    pub placement: String,
    pub side_to_move: Color,
    pub castling: String,
    pub en_passant: String,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Split a FEN string into its six fields.
pub fn parse_fen(fen: &str) -> Result<FenRecord, CoreError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 6 {
        return Err(CoreError::MalformedFen(format!(
            "expected 6 fields, found {}",
            fields.len()
        )));
    }

    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(CoreError::MalformedFen(format!(
                "bad side to move: {other}"
            )))
        }
    };

    let halfmove_clock = fields[4]
        .parse()
        .map_err(|_| CoreError::MalformedFen(format!("bad halfmove clock: {}", fields[4])))?;
    let fullmove_number = fields[5]
        .parse()
        .map_err(|_| CoreError::MalformedFen(format!("bad fullmove number: {}", fields[5])))?;

    Ok(FenRecord {
        placement: fields[0].to_string(),
        side_to_move,
        castling: fields[2].to_string(),
        en_passant: fields[3].to_string(),
        halfmove_clock,
        fullmove_number,
    })
}

/// True when the placement field is the standard starting position,
/// regardless of the remaining fields.
pub fn is_initial_position(fen: &str) -> bool {
    fen.split_whitespace().next() == Some(STANDARD_START_PLACEMENT)
}

/// Decode the placement field into a board. Structural errors (wrong rank
/// count, bad piece letters) surface as `MalformedFen`.
pub fn board_placement(fen: &str) -> Result<Board, CoreError> {
    let parsed: Fen = fen
        .parse()
        .map_err(|e| CoreError::MalformedFen(format!("{e}")))?;
    Ok(parsed.into_setup().board)
}

/// One occupied square. `piece` is the "White Pawn"-style label consumed
/// by the prompt-building collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceLocation {
    pub square: Sq,
    pub piece: String,
}

/// List every piece on the board: all White pieces first, then all Black,
/// each group in ascending square-name order (a1, a2, ..., h8).
pub fn piece_locations(fen: &str) -> Result<Vec<PieceLocation>, CoreError> {
    let board = board_placement(fen)?;

    let mut entries: Vec<(Color, Sq, Role)> = Vec::new();
    for square in board.occupied() {
        if let Some(piece) = board.piece_at(square) {
            entries.push((piece.color, Sq(square), piece.role));
        }
    }
    entries.sort_by_key(|&(color, sq, _)| (color == Color::Black, sq));

    Ok(entries
        .into_iter()
        .map(|(color, square, role)| PieceLocation {
            square,
            piece: piece_label(color, role),
        })
        .collect())
}
