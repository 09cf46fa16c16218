//! Shared lexical helpers for the report grammar.
//!
//! The engine's section labels are matched as fixed substrings, exactly as
//! emitted — misspellings included. Helpers here never fail outward: a
//! pattern that does not match yields `None` and the caller defaults.

use regex::Regex;

use crate::square::Sq;

/// Slice `text` after the first occurrence of `start`, up to the earliest
/// occurrence of any token in `ends` (or the end of the text).
pub fn slice_between<'a>(text: &'a str, start: &str, ends: &[&str]) -> Option<&'a str> {
    let from = text.find(start)? + start.len();
    let rest = &text[from..];
    let stop = ends
        .iter()
        .filter_map(|end| rest.find(end))
        .min()
        .unwrap_or(rest.len());
    Some(&rest[..stop])
}

/// Parse a comma-separated square list such as "A1, B2, C3".
pub fn square_list(text: &str) -> Vec<Sq> {
    text.split(", ").filter_map(Sq::parse).collect()
}

/// Find a labelled square-list line, e.g. "Bishop checks availables: D5, E6".
/// Returns `None` when the line is absent; a present line always carries at
/// least one square in the source format.
pub fn labelled_squares(section: &str, label: &str) -> Option<Vec<Sq>> {
    let pattern = format!(
        r"{}\s*([A-H][1-8](?:, [A-H][1-8])*)",
        regex::escape(label)
    );
    let list = first_capture(section, &pattern)?;
    Some(square_list(&list))
}

/// First capture group of `pattern` in `text`, as an owned string.
pub fn first_capture(text: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(text)?.get(1).map(|m| m.as_str().to_string())
}

/// First capture group of `pattern`, parsed as a number.
pub fn capture_u32(text: &str, pattern: &str) -> Option<u32> {
    first_capture(text, pattern)?.parse().ok()
}
