//! Pieces-activity section parsing: per-piece feature blocks joined with
//! the NNUE per-piece score listing.

use std::collections::HashMap;

use regex::Regex;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use shakmaty::{Color, Role};

use crate::report::scan;
use crate::square::{color_from_name, piece_label, role_from_name, Sq};

/// One piece-description block. `features` keeps the normalized free-text
/// summaries ("Controlled squares: 5", "On (semi-)open column", ...);
/// `score` is `None` when the NNUE listing has no line for this exact
/// piece and square.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceActivityEntry {
    pub color: Color,
    pub kind: Role,
    pub square: Sq,
    pub features: Vec<String>,
    pub score: Option<f64>,
}

impl PieceActivityEntry {
    /// "White Bishop"-style label, as the engine names the piece.
    pub fn label(&self) -> String {
        piece_label(self.color, self.kind)
    }
}

impl Serialize for PieceActivityEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PieceActivityEntry", 4)?;
        state.serialize_field("piece", &self.label())?;
        state.serialize_field("square", &self.square)?;
        state.serialize_field("features", &self.features)?;
        state.serialize_field("score", &self.score)?;
        state.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PieceActivityReport {
    pub white: Vec<PieceActivityEntry>,
    pub black: Vec<PieceActivityEntry>,
}

pub fn parse(body: &str) -> PieceActivityReport {
    blocks(body).unwrap_or_default()
}

fn blocks(body: &str) -> Option<PieceActivityReport> {
    let anchor = Regex::new(r"(\w+) (\w+) of square (\w\d)").ok()?;
    let scores = nnue_scores(body);

    let spans: Vec<usize> = anchor.find_iter(body).map(|m| m.start()).collect();

    let mut report = PieceActivityReport::default();
    for (i, &start) in spans.iter().enumerate() {
        let end = spans.get(i + 1).copied().unwrap_or(body.len());
        let mut block = &body[start..end];
        // A blank line terminates the block early.
        if let Some(gap) = block.find("\n\n") {
            block = &block[..gap];
        }

        let Some(caps) = anchor.captures(block) else { continue };
        // A block without a recognizable color/kind/square anchor is dropped.
        let Some(color) = color_from_name(&caps[1]) else { continue };
        let Some(kind) = role_from_name(&caps[2]) else { continue };
        let Some(square) = Sq::parse(&caps[3]) else { continue };

        let features = block_features(block, kind);
        let key = format!("{} of {}", piece_label(color, kind), square);
        let entry = PieceActivityEntry {
            color,
            kind,
            square,
            features,
            score: scores.get(&key).copied(),
        };
        match color {
            Color::White => report.white.push(entry),
            Color::Black => report.black.push(entry),
        }
    }
    Some(report)
}

fn block_features(block: &str, kind: Role) -> Vec<String> {
    let mut features = Vec::new();

    if let Some(list) = scan::first_capture(
        block,
        r"Squares controlled by the \w+: ([A-H][1-8](?:, [A-H][1-8])*)",
    ) {
        features.push(format!(
            "Controlled squares: {}",
            list.split(", ").count()
        ));
    }
    if let Some(n) = scan::capture_u32(block, r"The \w+ can move to: (\d+) squares") {
        features.push(format!("Moveable squares: {n}"));
    }
    if matches!(kind, Role::Bishop | Role::Knight) {
        if let Some(n) = scan::capture_u32(block, r"The \w+ is (\d+) squares far from our king") {
            features.push(format!("Distance from king: {n} squares"));
        }
    }
    if kind == Role::Bishop {
        if let Some(n) =
            scan::capture_u32(block, r"Pawns on the same bishop color squared: (\d+)")
        {
            features.push(format!("Pawns on same color squared: {n}"));
        }
        if let Some(n) = scan::capture_u32(block, r"Number of enemy pawns x-rayed: (\d+)") {
            features.push(format!("Enemy pawns x-rayed: {n}"));
        }
        if block.contains("The bishop is on a long diagonal and can see both center squares.") {
            features.push("On long diagonal, sees both center squares".to_string());
        }
    }
    if kind == Role::Rook && block.contains("The rook is on (semi-)open column.") {
        features.push("On (semi-)open column".to_string());
    }
    // Engine-spelled sentence, "de" included.
    if kind == Role::Queen && block.contains("Exists pin in or discover attack over de queen.") {
        features.push("Pin or discovered attack exists".to_string());
    }

    features
}

/// Lookup from "White Bishop of c1"-style keys to NNUE score values.
fn nnue_scores(body: &str) -> HashMap<String, f64> {
    let mut scores = HashMap::new();
    let Ok(re) = Regex::new(r"(\w+ \w+) of (\w\d): ([\d.]+)") else {
        return scores;
    };
    for caps in re.captures_iter(body) {
        let Some(square) = Sq::parse(&caps[2]) else { continue };
        if let Ok(value) = caps[3].parse::<f64>() {
            scores.insert(format!("{} of {}", &caps[1], square), value);
        }
    }
    scores
}
