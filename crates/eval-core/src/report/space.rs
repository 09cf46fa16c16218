//! Space section parsing: per-side controlled-square counts.

use serde::Serialize;

use crate::report::scan;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpaceReport {
    pub white: u32,
    pub black: u32,
}

pub fn parse(body: &str) -> SpaceReport {
    SpaceReport {
        white: side(body, "Space of White:"),
        black: side(body, "Space of Black:"),
    }
}

fn side(body: &str, header: &str) -> u32 {
    scan::slice_between(body, header, &["Space of "])
        .and_then(|block| scan::labelled_squares(block, "Squares behind or at our pawns:"))
        .map_or(0, |squares| squares.len() as u32)
}
