//! Table detection and grid building.
//!
//! ## The column heuristic
//!
//! A column boundary is a literal tab or a run of 2+ consecutive spaces.
//! That is deliberately naive: justified text with irregular spacing *will*
//! occasionally split, and a genuine two-column paragraph *can* be mistaken
//! for a table. Both are accepted heuristic limitations — swapping in a
//! smarter tokenizer would change observable output for every document, so
//! the split stays exactly as it is.
//!
//! ## First run wins
//!
//! Detection scans a block's flattened lines once, accumulating consecutive
//! multi-column lines. The first run that reaches the minimum length is the
//! block's table; later tabular lines separated by a non-tabular line are
//! never merged into it and never form a second table for the block.

use crate::config::EngineConfig;
use crate::element::{Cell, StructuredElement};
use crate::pipeline::classify;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// Column separator: a tab, or two-or-more consecutive spaces.
static RE_COLUMN_SEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t| {2,}").unwrap());

/// Split a line into trimmed, non-empty column fragments.
pub fn split_columns(line: &str) -> Vec<&str> {
    RE_COLUMN_SEP
        .split(line)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

/// True iff the line splits into enough columns to look tabular.
pub fn looks_tabular(line: &str, config: &EngineConfig) -> bool {
    split_columns(line).len() >= config.min_table_columns
}

/// The first qualifying run of tabular lines in a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRun {
    /// Index of the run's first line within the block's line list.
    pub start: usize,
    /// The flattened text of the run's lines, in order.
    pub lines: Vec<String>,
}

/// Scan a block's flattened lines for the first run of at least
/// `min_table_lines` consecutive tabular lines.
///
/// Returns `None` when no such run exists. A run still open when the scan
/// ends qualifies like any other.
pub fn detect_table(lines: &[String], config: &EngineConfig) -> Option<TableRun> {
    let mut run: Vec<String> = Vec::new();
    let mut start = 0;

    for (i, line) in lines.iter().enumerate() {
        if looks_tabular(line, config) {
            if run.is_empty() {
                start = i;
            }
            run.push(line.clone());
        } else {
            if run.len() >= config.min_table_lines {
                return Some(TableRun { start, lines: run });
            }
            run.clear();
        }
    }

    if run.len() >= config.min_table_lines {
        return Some(TableRun { start, lines: run });
    }
    None
}

/// Build a table grid from a detected run.
///
/// The grid is as wide as the widest line in the run; shorter lines leave
/// their trailing cells empty. A cell whose text independently reads as a
/// subtitle is emphasized (the writer centers it at the emphasis font size).
/// A run line that splits to zero columns leaves its whole row empty rather
/// than failing the block.
pub fn build_table(run: &TableRun, config: &EngineConfig) -> StructuredElement {
    let max_cols = run
        .lines
        .iter()
        .map(|l| split_columns(l).len())
        .max()
        .unwrap_or(0);

    debug!(
        rows = run.lines.len(),
        cols = max_cols,
        "building table grid"
    );

    let mut rows = Vec::with_capacity(run.lines.len());
    for line in &run.lines {
        let mut row = vec![Cell::default(); max_cols];
        let cols = split_columns(line);
        if cols.is_empty() {
            warn!(line = %line, "table line split to no columns, leaving row empty");
        }
        for (cell, col) in row.iter_mut().zip(cols) {
            cell.text = col.to_string();
            cell.emphasized = classify::is_subtitle(col, config);
        }
        rows.push(row);
    }

    StructuredElement::Table { rows }
}
