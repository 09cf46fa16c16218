//! Board squares and the piece-label vocabulary of the report grammar.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shakmaty::{Color, Role, Square};

/// A board square as it appears in FEN or report text. Wraps
/// [`shakmaty::Square`] so the derived pawn-structure math can work on
/// plain file/rank indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sq(pub Square);

impl Sq {
    /// Parse a square token such as "e4" or "E4". The engine mixes cases:
    /// pawn-structure squares are lowercase, king-flank lists uppercase.
    pub fn parse(token: &str) -> Option<Sq> {
        let lower = token.trim().to_ascii_lowercase();
        Square::from_ascii(lower.as_bytes()).ok().map(Sq)
    }

    /// File index 0..=7 for files a..h.
    pub fn file_index(self) -> i32 {
        self.0.file() as i32
    }

    /// Rank index 0..=7 for ranks 1..8.
    pub fn rank_index(self) -> i32 {
        self.0.rank() as i32
    }
}

impl fmt::Display for Sq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Ordered by (file, rank) so that sorting matches ascending square-name
// order: a1, a2, ..., a8, b1, ...
impl Ord for Sq {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.file_index(), self.rank_index()).cmp(&(other.file_index(), other.rank_index()))
    }
}

impl PartialOrd for Sq {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Sq {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Sq {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Sq::parse(&name).ok_or_else(|| serde::de::Error::custom(format!("invalid square: {name}")))
    }
}

/// "White" / "Black", as the engine labels sides.
pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

pub fn color_from_name(name: &str) -> Option<Color> {
    match name {
        "White" => Some(Color::White),
        "Black" => Some(Color::Black),
        _ => None,
    }
}

/// "Pawn" / "Knight" / ..., as the engine labels piece kinds.
pub fn role_name(role: Role) -> &'static str {
    match role {
        Role::Pawn => "Pawn",
        Role::Knight => "Knight",
        Role::Bishop => "Bishop",
        Role::Rook => "Rook",
        Role::Queen => "Queen",
        Role::King => "King",
    }
}

pub fn role_from_name(name: &str) -> Option<Role> {
    match name {
        "Pawn" => Some(Role::Pawn),
        "Knight" => Some(Role::Knight),
        "Bishop" => Some(Role::Bishop),
        "Rook" => Some(Role::Rook),
        "Queen" => Some(Role::Queen),
        "King" => Some(Role::King),
        _ => None,
    }
}

/// "White Bishop"-style label, the key format of the activity and NNUE
/// score sections.
pub fn piece_label(color: Color, role: Role) -> String {
    format!("{} {}", color_name(color), role_name(role))
}
