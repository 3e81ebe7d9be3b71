//! Text normalisation: whitespace cleanup before shape checks.
//!
//! Two tiny pure functions with deliberately different jobs: [`normalize`]
//! produces the canonical form used for equality and casing checks, while
//! [`flatten_paragraph`] only removes line breaks when assembling paragraph
//! or cell text from multi-line spans. Neither ever fails; empty in, empty
//! out.

/// Collapse any run of whitespace (including newlines) to a single space and
/// trim both ends.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace newlines with spaces and trim both ends.
///
/// Unlike [`normalize`] this keeps interior space runs intact — the table
/// detector relies on 2+ consecutive spaces as a column separator, so
/// flattened text must not collapse them.
pub fn flatten_paragraph(text: &str) -> String {
    text.replace('\n', " ").trim().to_string()
}
