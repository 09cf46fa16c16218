//! Engine report parsing: the section-header gate, the body delimiters,
//! and the aggregate position report.
//!
//! Every section parser degrades to its empty/default value on unexpected
//! structure; only the delimiter extraction can fail hard once the gate
//! has confirmed the report carries analysis.

pub mod activity;
pub mod king_safety;
pub mod material;
pub mod pawns;
mod scan;
pub mod space;
pub mod threats;

use serde::Serialize;

pub use activity::{PieceActivityEntry, PieceActivityReport};
pub use king_safety::{KingSafetyReport, KingSafetySide};
pub use material::{MaterialReport, MaterialSide};
pub use pawns::{PassedPawn, PawnStructureReport, PawnStructureSide};
pub use space::SpaceReport;
pub use threats::{ThreatCategory, ThreatsReport, ThreatsSide};

use crate::error::CoreError;

/// Header tokens that must all be present for the engine to have produced
/// usable analysis. Spellings — "Trheats" included — are the engine's own.
const REQUIRED_HEADERS: [&str; 6] = [
    "Material:",
    "Pawn structure:",
    "Pieces activity:",
    "King safety:",
    "Trheats:",
    "Space:",
];

const BEGIN_DELIMITER: &str = "Begin position analysis.";
const END_DELIMITER: &str = "End position analysis.";

/// The normalized position report. Any section may independently be empty
/// without invalidating the others; an all-empty report is valid output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionReport {
    pub material: MaterialReport,
    pub pawn_structure: PawnStructureReport,
    pub king_safety: KingSafetyReport,
    pub piece_activity: PieceActivityReport,
    pub threats: ThreatsReport,
    pub space: SpaceReport,
}

/// Outcome of a parse: "the engine had nothing to report" is a normal
/// value, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalOutcome {
    NoAnalysis,
    Report(PositionReport),
}

impl EvalOutcome {
    pub fn report(&self) -> Option<&PositionReport> {
        match self {
            EvalOutcome::Report(report) => Some(report),
            EvalOutcome::NoAnalysis => None,
        }
    }

    pub fn into_report(self) -> Option<PositionReport> {
        match self {
            EvalOutcome::Report(report) => Some(report),
            EvalOutcome::NoAnalysis => None,
        }
    }
}

/// True when all required section headers are present in the raw output.
pub fn has_analysis(raw: &str) -> bool {
    REQUIRED_HEADERS.iter().all(|header| raw.contains(header))
}

/// The report body between the begin/end delimiters. Missing delimiters
/// are fatal here: the header gate already confirmed content should exist.
fn report_body(raw: &str) -> Result<&str, CoreError> {
    let start = raw
        .find(BEGIN_DELIMITER)
        .ok_or(CoreError::MalformedReport("begin delimiter not found"))?
        + BEGIN_DELIMITER.len();
    let length = raw[start..]
        .find(END_DELIMITER)
        .ok_or(CoreError::MalformedReport("end delimiter not found"))?;
    Ok(&raw[start..start + length])
}

/// Parse the raw engine output into a position report, or the explicit
/// no-analysis signal. No section parser runs when the gate fails.
pub fn parse_report(raw: &str) -> Result<EvalOutcome, CoreError> {
    if !has_analysis(raw) {
        return Ok(EvalOutcome::NoAnalysis);
    }
    let body = report_body(raw)?;

    let king_safety = king_safety::parse(body);
    let threats = threats::parse(body, &king_safety);

    Ok(EvalOutcome::Report(PositionReport {
        material: material::parse(body),
        pawn_structure: pawns::parse(body),
        piece_activity: activity::parse(body),
        space: space::parse(body),
        threats,
        king_safety,
    }))
}
