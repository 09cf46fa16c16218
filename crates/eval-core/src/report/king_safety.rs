//! King-safety section parsing: flank square counts and per-piece
//! checking-square lists.

use serde::Serialize;

use crate::report::scan;
use crate::square::Sq;

/// Flank counts default to 0 when their line is absent. The four checking
/// lists stay `None` when absent — a present-but-empty list never occurs
/// in the source format, so `None` and "empty" are distinct states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KingSafetySide {
    pub attacked: u32,
    pub attacked_twice: u32,
    pub defended: u32,
    pub bishop_checks: Option<Vec<Sq>>,
    pub knight_checks: Option<Vec<Sq>>,
    pub rook_checks: Option<Vec<Sq>>,
    pub queen_checks: Option<Vec<Sq>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KingSafetyReport {
    pub white: KingSafetySide,
    pub black: KingSafetySide,
}

/// Tokens that terminate a king-safety side block, whichever comes first.
const BLOCK_ENDS: &[&str] = &[
    "Black King safety",
    "Space of White",
    "Trheats",
    "Threads of White",
    "Threads of Black",
];

pub fn parse(body: &str) -> KingSafetyReport {
    KingSafetyReport {
        white: side(body, "White King safety"),
        black: side(body, "Black King safety"),
    }
}

fn side(body: &str, header: &str) -> KingSafetySide {
    let Some(block) = scan::slice_between(body, header, BLOCK_ENDS) else {
        return KingSafetySide::default();
    };

    KingSafetySide {
        attacked: count(scan::labelled_squares(
            block,
            "Squares attacked at King flank:",
        )),
        attacked_twice: count(scan::labelled_squares(
            block,
            "Squares attacked twice at King flank:",
        )),
        defended: count(scan::labelled_squares(
            block,
            "Squares defended at King flank:",
        )),
        bishop_checks: scan::labelled_squares(block, "Bishop checks availables:"),
        knight_checks: scan::labelled_squares(block, "Knight checks availables:"),
        rook_checks: scan::labelled_squares(block, "Rook checks availables:"),
        queen_checks: scan::labelled_squares(block, "Queen checks availables:"),
    }
}

fn count(list: Option<Vec<Sq>>) -> u32 {
    list.map_or(0, |squares| squares.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: &str = "\
King safety:
White King safety:
\tSquares attacked at King flank: F2, G2, H2
\tSquares attacked twice at King flank: G2
\tSquares defended at King flank: F2, G2, H2, G1
\tKnight checks availables: E2
\tQueen checks availables: H4, E1
Black King safety:
\tSquares attacked at King flank: F7, G7
\tSquares defended at King flank: F7, G7, H7
Space of White:
";

    #[test]
    fn test_white_side_counts_and_checks() {
        let report = parse(SECTION);
        assert_eq!(report.white.attacked, 3);
        assert_eq!(report.white.attacked_twice, 1);
        assert_eq!(report.white.defended, 4);
        assert!(report.white.bishop_checks.is_none());
        assert_eq!(report.white.knight_checks.as_ref().unwrap().len(), 1);
        assert!(report.white.rook_checks.is_none());
        assert_eq!(report.white.queen_checks.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_black_side_does_not_leak_from_white() {
        let report = parse(SECTION);
        assert_eq!(report.black.attacked, 2);
        assert_eq!(report.black.attacked_twice, 0);
        assert_eq!(report.black.defended, 3);
        // Absent lines are None, never Some(empty).
        assert!(report.black.knight_checks.is_none());
        assert!(report.black.queen_checks.is_none());
    }

    #[test]
    fn test_missing_section_defaults() {
        let report = parse("no king safety here");
        assert_eq!(report, KingSafetyReport::default());
        assert_eq!(report.white.attacked, 0);
        assert!(report.white.bishop_checks.is_none());
    }
}
