//! Material section parsing.

use regex::Regex;
use serde::Serialize;

/// Piece counts and bishop-pair flag for one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialSide {
    pub pawns: u32,
    pub bishops: u32,
    pub bishop_pair: bool,
    pub knights: u32,
    pub rooks: u32,
    pub queens: u32,
}

/// `None` for a side means its block was missing or did not carry the full
/// field sequence — a side is never partially populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterialReport {
    pub white: Option<MaterialSide>,
    pub black: Option<MaterialSide>,
}

pub fn parse(body: &str) -> MaterialReport {
    // The engine spells the header "matetial"; the typo is part of the format.
    MaterialReport {
        white: side(body, "White matetial"),
        black: side(body, "Black matetial"),
    }
}

fn side(body: &str, header: &str) -> Option<MaterialSide> {
    // One contiguous match over the fixed field order; note the singular
    // "Knight" and the missing space in "Bishops pair:", both engine-spelled.
    let pattern = format!(
        r"{}:[\s\S]*?Pawns: (\d+)[\s\S]*?Bishops: (\d+)[\s\S]*?Bishops pair:(true|false)[\s\S]*?Knight: (\d+)[\s\S]*?Rooks: (\d+)[\s\S]*?Queens: (\d+)",
        regex::escape(header)
    );
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(body)?;

    Some(MaterialSide {
        pawns: caps[1].parse().ok()?,
        bishops: caps[2].parse().ok()?,
        bishop_pair: &caps[3] == "true",
        knights: caps[4].parse().ok()?,
        rooks: caps[5].parse().ok()?,
        queens: caps[6].parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: &str = "\
Material:
White matetial:
 Pawns: 7
 Bishops: 2
 Bishops pair:true
 Knight: 1
 Rooks: 2
 Queens: 1
Black matetial:
 Pawns: 6
 Bishops: 1
 Bishops pair:false
 Knight: 2
 Rooks: 2
 Queens: 0
";

    #[test]
    fn test_both_sides_parse() {
        let report = parse(SECTION);
        let white = report.white.unwrap();
        assert_eq!(white.pawns, 7);
        assert_eq!(white.bishops, 2);
        assert!(white.bishop_pair);
        assert_eq!(white.knights, 1);
        assert_eq!(white.rooks, 2);
        assert_eq!(white.queens, 1);

        let black = report.black.unwrap();
        assert_eq!(black.pawns, 6);
        assert!(!black.bishop_pair);
        assert_eq!(black.queens, 0);
    }

    #[test]
    fn test_missing_side_is_none_not_zero() {
        let white_only = SECTION.split("Black matetial").next().unwrap();
        let report = parse(white_only);
        assert!(report.white.is_some());
        assert!(report.black.is_none());
    }

    #[test]
    fn test_out_of_order_fields_yield_none() {
        // Queens before Rooks breaks the contiguous field sequence.
        let scrambled = "\
White matetial:
 Pawns: 7
 Bishops: 2
 Bishops pair:true
 Knight: 1
 Queens: 1
 Rooks: 2
";
        assert!(parse(scrambled).white.is_none());
    }

    #[test]
    fn test_correctly_spelled_header_does_not_match() {
        let fixed = SECTION.replace("matetial", "material");
        let report = parse(&fixed);
        assert!(report.white.is_none());
        assert!(report.black.is_none());
    }
}
