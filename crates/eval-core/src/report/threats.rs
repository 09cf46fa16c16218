//! Threats section parsing, folding in the opposing king's checking
//! squares from the king-safety data.

use serde::Serialize;
use shakmaty::Color;

use crate::report::king_safety::{KingSafetyReport, KingSafetySide};
use crate::report::scan;
use crate::square::{color_name, Sq};

/// One named threat category and its target squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreatCategory {
    pub label: String,
    pub squares: Vec<Sq>,
}

/// Ordered category list for one side; only categories present in the
/// report appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThreatsSide {
    pub categories: Vec<ThreatCategory>,
}

impl ThreatsSide {
    pub fn get(&self, label: &str) -> Option<&[Sq]> {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.squares.as_slice())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThreatsReport {
    pub white: ThreatsSide,
    pub black: ThreatsSide,
}

// Output labels paired with the engine's source lines ("atacked" is the
// engine's own spelling).
const CATEGORIES: &[(&str, &str)] = &[
    (
        "Enemies could be attacked by knights",
        "Enemies atacked by knights:",
    ),
    (
        "Enemies could be attacked by Bishops",
        "Enemies atacked by Bishops:",
    ),
    (
        "Enemies could be attacked by rooks",
        "Enemies atacked by rooks:",
    ),
    (
        "Enemies could be attacked by Queens",
        "Enemies atacked by Queens:",
    ),
    (
        "Enemies could be attacked by king",
        "Enemies atacked by king:",
    ),
    (
        "Squares where our pawns could push on the next move",
        "Squares where our pawns can push on the next move:",
    ),
];

pub fn parse(body: &str, king_safety: &KingSafetyReport) -> ThreatsReport {
    let mut white = side(body, "Threads of White:", &["Threads of Black", "Trheats"]);
    let mut black = side(body, "Threads of Black:", &["Threads of White", "Trheats"]);

    // Checks against a king are threats credited to the opposing side.
    if let Some(checks) = check_union(&king_safety.white) {
        black.categories.push(injected_category(Color::White, checks));
    }
    if let Some(checks) = check_union(&king_safety.black) {
        white.categories.push(injected_category(Color::Black, checks));
    }

    ThreatsReport { white, black }
}

fn side(body: &str, header: &str, ends: &[&str]) -> ThreatsSide {
    let Some(block) = scan::slice_between(body, header, ends) else {
        return ThreatsSide::default();
    };

    let categories = CATEGORIES
        .iter()
        .filter_map(|&(label, line)| {
            scan::labelled_squares(block, line).map(|squares| ThreatCategory {
                label: label.to_string(),
                squares,
            })
        })
        .collect();
    ThreatsSide { categories }
}

/// Union of the four checking lists in bishop, knight, rook, queen order,
/// duplicates retained. `None` when nothing can check this king.
fn check_union(side: &KingSafetySide) -> Option<Vec<Sq>> {
    let mut union = Vec::new();
    for list in [
        &side.bishop_checks,
        &side.knight_checks,
        &side.rook_checks,
        &side.queen_checks,
    ] {
        if let Some(squares) = list {
            union.extend(squares.iter().copied());
        }
    }
    if union.is_empty() {
        None
    } else {
        Some(union)
    }
}

fn injected_category(king: Color, squares: Vec<Sq>) -> ThreatCategory {
    ThreatCategory {
        label: format!("Possible checks on {} King", color_name(king)),
        squares,
    }
}
