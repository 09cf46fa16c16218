//! Pawn-structure section parsing and the derived structures: passed,
//! backward and isolated pawns, phalanxes, and pawn islands.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;
use shakmaty::Color;

use crate::report::scan;
use crate::square::{color_name, Sq};

/// A passed pawn with the optional details of its report block. A missing
/// detail line leaves the field `None`, never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassedPawn {
    pub square: Sq,
    pub promotion_distance: Option<u32>,
    pub enemy_king_distance: Option<u32>,
    pub blocked: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PawnStructureSide {
    pub pawns: Vec<Sq>,
    pub passed: Vec<PassedPawn>,
    pub backward: Vec<Sq>,
    pub isolated: Vec<Sq>,
    pub phalanxes: Vec<Vec<Sq>>,
    pub islands: Vec<Vec<Sq>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PawnStructureReport {
    pub white: PawnStructureSide,
    pub black: PawnStructureSide,
}

pub fn parse(body: &str) -> PawnStructureReport {
    sides(body).unwrap_or_default()
}

// The two side blocks degrade together: if either bound is missing the
// whole section reads as empty.
fn sides(body: &str) -> Option<PawnStructureReport> {
    let white_block = scan::slice_between(
        body,
        "Pawn structure of White",
        &["Pawn structure of Black"],
    )?;
    let black_block =
        scan::slice_between(body, "Pawn structure of Black", &["Pieces activity"])?;

    let white_pawns = pawn_squares(white_block);
    let black_pawns = pawn_squares(black_block);

    Some(PawnStructureReport {
        white: side(body, white_block, &white_pawns, &black_pawns, Color::White),
        black: side(body, black_block, &black_pawns, &white_pawns, Color::Black),
    })
}

fn side(
    body: &str,
    block: &str,
    own: &[Sq],
    opponents: &[Sq],
    color: Color,
) -> PawnStructureSide {
    PawnStructureSide {
        pawns: own.to_vec(),
        passed: passed_pawns(body, own, opponents, color),
        backward: backward_pawns(block),
        isolated: isolated_pawns(own),
        phalanxes: phalanxes(own),
        islands: islands(own),
    }
}

/// Pawn squares of a side block, in encounter order, deduplicated.
fn pawn_squares(block: &str) -> Vec<Sq> {
    let Ok(re) = Regex::new(r"Pawn of (\w\d)") else {
        return Vec::new();
    };
    let mut squares = Vec::new();
    for caps in re.captures_iter(block) {
        if let Some(sq) = Sq::parse(&caps[1]) {
            if !squares.contains(&sq) {
                squares.push(sq);
            }
        }
    }
    squares
}

/// A pawn is passed when no opposing pawn stands on the same or an adjacent
/// file strictly ahead of it (higher rank for White, lower for Black). An
/// equal-rank opposing pawn does not block.
fn is_passed(pawn: Sq, opponents: &[Sq], color: Color) -> bool {
    opponents.iter().all(|opp| {
        if (pawn.file_index() - opp.file_index()).abs() > 1 {
            return true;
        }
        match color {
            Color::White => opp.rank_index() <= pawn.rank_index(),
            Color::Black => opp.rank_index() >= pawn.rank_index(),
        }
    })
}

fn passed_pawns(body: &str, own: &[Sq], opponents: &[Sq], color: Color) -> Vec<PassedPawn> {
    let section = passed_section(body, color);

    own.iter()
        .copied()
        .filter(|&pawn| is_passed(pawn, opponents, color))
        .map(|square| {
            section
                .and_then(|s| passed_detail(s, square))
                .unwrap_or(PassedPawn {
                    square,
                    promotion_distance: None,
                    enemy_king_distance: None,
                    blocked: None,
                })
        })
        .collect()
}

fn passed_section(body: &str, color: Color) -> Option<&str> {
    let header = format!("Passed pawns of {}:", color_name(color));
    scan::slice_between(body, &header, &["Passed pawns of "])
}

/// Detail block `Passed pawn of <sq> square:` up to the next blank line.
fn passed_detail(section: &str, square: Sq) -> Option<PassedPawn> {
    let pattern = format!(r"Passed pawn of {square} square:[\s\S]*?(\n\n|\z)");
    let re = Regex::new(&pattern).ok()?;
    let block = re.find(section)?.as_str();

    let promotion_distance = scan::capture_u32(block, r"Is at (\d+) squares of promotion");
    let enemy_king_distance =
        scan::capture_u32(block, r"The king enemy is at (\d+) squares of distance of it");
    let blocked = if block.contains("Is blocked and can not advance") {
        Some(true)
    } else if block.contains("Is not blocked and free to advance") {
        Some(false)
    } else {
        None
    };

    if promotion_distance.is_none() && enemy_king_distance.is_none() && blocked.is_none() {
        return None;
    }
    Some(PassedPawn {
        square,
        promotion_distance,
        enemy_king_distance,
        blocked,
    })
}

/// Backward pawns are read straight from the report: a pawn whose detail
/// block carries the affirmative marker. Blocks run from one
/// "Pawn of <sq> square:" anchor to the next.
fn backward_pawns(block: &str) -> Vec<Sq> {
    let Ok(anchor) = Regex::new(r"Pawn of (\w\d) square:") else {
        return Vec::new();
    };
    let spans: Vec<(usize, usize)> = anchor.find_iter(block).map(|m| (m.start(), m.end())).collect();

    let mut backward = Vec::new();
    for (i, &(start, _)) in spans.iter().enumerate() {
        let end = spans.get(i + 1).map_or(block.len(), |&(s, _)| s);
        let detail = &block[start..end];
        if !detail.contains("Is a backward pawn: true") {
            continue;
        }
        if let Some(caps) = anchor.captures(detail) {
            if let Some(sq) = Sq::parse(&caps[1]) {
                backward.push(sq);
            }
        }
    }
    backward
}

/// A pawn is isolated when no own pawn occupies an adjacent file. Computed
/// from the own-side file set only.
fn isolated_pawns(own: &[Sq]) -> Vec<Sq> {
    own.iter()
        .copied()
        .filter(|pawn| {
            !own.iter()
                .any(|other| (other.file_index() - pawn.file_index()).abs() == 1)
        })
        .collect()
}

/// Maximal same-rank runs of adjacent-file pawns, length two or more.
fn phalanxes(own: &[Sq]) -> Vec<Vec<Sq>> {
    let mut by_rank: BTreeMap<i32, Vec<Sq>> = BTreeMap::new();
    for &pawn in own {
        by_rank.entry(pawn.rank_index()).or_default().push(pawn);
    }

    let mut groups = Vec::new();
    for (_, mut rank_pawns) in by_rank {
        rank_pawns.sort();
        let mut run = vec![rank_pawns[0]];
        for &pawn in &rank_pawns[1..] {
            if pawn.file_index() == run[run.len() - 1].file_index() + 1 {
                run.push(pawn);
            } else {
                if run.len() >= 2 {
                    groups.push(run);
                }
                run = vec![pawn];
            }
        }
        if run.len() >= 2 {
            groups.push(run);
        }
    }
    groups
}

/// Maximal runs of consecutive occupied files, rank-independent. Each run
/// is one island, pawns listed file by file in encounter order.
fn islands(own: &[Sq]) -> Vec<Vec<Sq>> {
    let mut by_file: BTreeMap<i32, Vec<Sq>> = BTreeMap::new();
    for &pawn in own {
        by_file.entry(pawn.file_index()).or_default().push(pawn);
    }

    let mut groups: Vec<Vec<Sq>> = Vec::new();
    let mut current: Vec<Sq> = Vec::new();
    let mut previous_file: Option<i32> = None;
    for (file, pawns) in by_file {
        match previous_file {
            Some(prev) if file == prev + 1 => current.extend(pawns),
            Some(_) => {
                groups.push(current);
                current = pawns;
            }
            None => current = pawns,
        }
        previous_file = Some(file);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}
