//! Error types for the layout2doc library.
//!
//! Two distinct types reflect two distinct failure modes:
//!
//! * [`StructureError`] — **Fatal**: the structuring pass cannot proceed at
//!   all (unparsable layout JSON, invalid configuration, output file could
//!   not be written). Returned as `Err(StructureError)` from the top-level
//!   entry points.
//!
//! * [`GeometryIssue`] — **Non-fatal**: one unit of geometry was malformed
//!   (a line with zero spans, a table line that splits to zero columns).
//!   The offending unit is skipped and the issue recorded in
//!   [`crate::element::PageOutline`] so callers can inspect what was dropped.
//!
//! Heuristic mismatch is *neither*: a short ALL-CAPS paragraph classified as
//! a title is accepted best-effort behaviour, resolved by the fixed predicate
//! precedence, and never surfaces as an error of any kind.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the layout2doc library.
///
/// Per-unit geometry problems use [`GeometryIssue`] and are stored in
/// [`crate::element::PageOutline`] rather than propagated here — a defect in
/// one block must never abort processing of its siblings.
#[derive(Debug, Error)]
pub enum StructureError {
    /// The input layout JSON could not be parsed into the page model.
    #[error("Invalid page layout: {detail}\nExpected extractor dict output (blocks/lines/spans with bbox arrays).")]
    InvalidLayout { detail: String },

    /// Could not create or write the output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal geometry problem in one block/line.
///
/// Collected in [`crate::element::PageOutline::issues`]; the unit is skipped
/// and processing continues with its siblings.
#[derive(Debug, Clone, PartialEq, Error, serde::Serialize, serde::Deserialize)]
pub enum GeometryIssue {
    /// A line carried zero spans; it yields no element.
    #[error("Block {block}, line {line}: line has no spans, skipped")]
    EmptyLine { block: usize, line: usize },

    /// A line inside a detected table run split to zero columns; its row
    /// stays empty in the grid.
    #[error("Block {block}, line {line}: table line split to no columns, row left empty")]
    EmptyTableLine { block: usize, line: usize },

    /// The page reported a non-positive width; centering is disabled for
    /// every heading on the page.
    #[error("Page width {width} is not positive, headings left uncentered")]
    NonPositivePageWidth { width: f64 },
}
