//! Row grouping: recombine spans that share a visual height.
//!
//! ## Why group by rounded y?
//!
//! PDF-style text extraction yields lines already in reading order, but a
//! single visual row splits into separate `Line` records whenever the font
//! run changes mid-row. Grouping spans by the line's top-edge y, rounded to
//! a fixed number of decimals, recombines those fragments into one logical
//! row before column analysis. At the default 1 decimal, two lines whose y
//! differs by ≤ 0.05 land in the same row.
//!
//! Spans keep line encounter order and are never resorted horizontally;
//! the extractor's reading order is trusted.

use crate::layout::{Block, Span};
use std::collections::BTreeMap;

/// Row key: the rounded y expressed in fixed-point decimal units, so it can
/// serve as an exact map key (f64 cannot).
pub type RowKey = i64;

/// Round `y` to `decimals` places and express it as a [`RowKey`].
pub fn row_key(y: f64, decimals: u32) -> RowKey {
    let scale = 10f64.powi(decimals as i32);
    (y * scale).round() as RowKey
}

/// Group a block's spans into visual rows keyed by rounded top-edge y.
///
/// Each line's spans are appended in order to the row its y rounds to;
/// lines are visited in encounter order, so a row that collects spans from
/// several lines holds them in reading order. Deterministic and idempotent
/// for a given block and tolerance.
pub fn group_rows(block: &Block, decimals: u32) -> BTreeMap<RowKey, Vec<&Span>> {
    let mut rows: BTreeMap<RowKey, Vec<&Span>> = BTreeMap::new();
    for line in &block.lines {
        let key = row_key(line.bbox.y0(), decimals);
        rows.entry(key).or_default().extend(line.spans.iter());
    }
    rows
}
