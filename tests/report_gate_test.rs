//! Integration tests for the header gate, the body delimiters, parse
//! idempotence, and the serialized report shape.

mod common;

use common::SAMPLE_REPORT;
use eval_core::{parse_report, CoreError, EvalOutcome};

#[test]
fn test_sample_report_passes_the_gate() {
    assert!(eval_core::has_analysis(SAMPLE_REPORT));
    assert!(matches!(
        parse_report(SAMPLE_REPORT).unwrap(),
        EvalOutcome::Report(_)
    ));
}

#[test]
fn test_missing_king_safety_header_means_no_analysis() {
    // Everything else well-formed, delimiters included.
    let gutted = SAMPLE_REPORT.replace("King safety", "King hazard");
    assert_eq!(parse_report(&gutted).unwrap(), EvalOutcome::NoAnalysis);
}

#[test]
fn test_each_required_header_gates_independently() {
    for header in [
        "Material:",
        "Pawn structure:",
        "Pieces activity:",
        "Trheats:",
        "Space:",
    ] {
        let gutted = SAMPLE_REPORT.replace(header, "");
        assert_eq!(
            parse_report(&gutted).unwrap(),
            EvalOutcome::NoAnalysis,
            "removing {header:?} should gate the report"
        );
    }
}

#[test]
fn test_correctly_spelled_threats_header_fails_the_gate() {
    // The gate wants the engine's own misspelling, not the fixed one.
    let fixed = SAMPLE_REPORT.replace("Trheats:", "Threats:");
    assert_eq!(parse_report(&fixed).unwrap(), EvalOutcome::NoAnalysis);
}

#[test]
fn test_missing_end_delimiter_is_malformed() {
    let truncated = SAMPLE_REPORT.replace("End position analysis.", "");
    assert!(matches!(
        parse_report(&truncated),
        Err(CoreError::MalformedReport(_))
    ));
}

#[test]
fn test_missing_begin_delimiter_is_malformed() {
    let truncated = SAMPLE_REPORT.replace("Begin position analysis.", "");
    assert!(matches!(
        parse_report(&truncated),
        Err(CoreError::MalformedReport(_))
    ));
}

#[test]
fn test_parsing_twice_yields_identical_reports() {
    let first = parse_report(SAMPLE_REPORT).unwrap();
    let second = parse_report(SAMPLE_REPORT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_serialized_report_shape() {
    let report = parse_report(SAMPLE_REPORT)
        .unwrap()
        .into_report()
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["material"]["white"]["pawns"], 5);
    assert_eq!(json["material"]["white"]["bishop_pair"], true);
    assert_eq!(json["space"]["white"], 6);
    assert_eq!(json["pawn_structure"]["white"]["passed"][0]["square"], "e5");
    // Absent check lists serialize as null, present ones as arrays.
    assert!(json["king_safety"]["white"]["bishop_checks"].is_null());
    assert_eq!(json["king_safety"]["white"]["knight_checks"][0], "e2");
    assert_eq!(
        json["threats"]["black"]["categories"]
            .as_array()
            .unwrap()
            .last()
            .unwrap()["label"],
        "Possible checks on White King"
    );
}
