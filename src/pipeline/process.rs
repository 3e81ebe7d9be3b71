//! Page processing: the orchestrator that walks blocks and emits elements.
//!
//! For each text block the processor first asks the table detector whether a
//! contiguous run of the block's lines looks tabular. A detected run
//! consumes the *entire* block — its lines are never independently
//! re-classified. Otherwise every non-empty line goes through the
//! classifier's precedence chain and comes out as exactly one heading, link,
//! or paragraph.
//!
//! Malformed geometry (a line with zero spans, a non-positive page width)
//! is skipped defensively and recorded as a [`GeometryIssue`]; nothing in
//! this pass can fail a page outright.

use crate::config::EngineConfig;
use crate::element::{PageOutline, StructuredElement};
use crate::error::GeometryIssue;
use crate::layout::{Block, Line, Page};
use crate::pipeline::classify::{self, LineClass};
use crate::pipeline::{rows, table, text};
use tracing::{debug, trace, warn};

/// Process one page into its ordered element sequence.
///
/// Blocks without lines (images etc.) are skipped; `blocks_skipped` reports
/// how many. Output order is deterministic: block order, then line order
/// within each block.
pub fn process_page(page: &Page, config: &EngineConfig) -> (PageOutline, usize) {
    let mut outline = PageOutline::default();
    let mut blocks_skipped = 0;

    if page.width <= 0.0 {
        warn!(width = page.width, "non-positive page width, headings will not be centered");
        outline.issues.push(GeometryIssue::NonPositivePageWidth { width: page.width });
    }

    for (block_idx, block) in page.blocks.iter().enumerate() {
        if !block.is_text() {
            blocks_skipped += 1;
            continue;
        }
        process_block(block, block_idx, page.width, config, &mut outline);
    }

    debug!(
        elements = outline.elements.len(),
        issues = outline.issues.len(),
        blocks_skipped,
        "page processed"
    );
    (outline, blocks_skipped)
}

fn process_block(
    block: &Block,
    block_idx: usize,
    page_width: f64,
    config: &EngineConfig,
    outline: &mut PageOutline,
) {
    // Row grouping is a structural aid only: it documents which lines share
    // a visual height but does not gate table detection.
    let grouped = rows::group_rows(block, config.row_grouping_decimals);
    trace!(block = block_idx, rows = grouped.len(), lines = block.lines.len(), "grouped rows");

    let flattened: Vec<String> = block
        .lines
        .iter()
        .map(|line| text::flatten_paragraph(&line.text()))
        .collect();

    if let Some(run) = table::detect_table(&flattened, config) {
        debug!(block = block_idx, start = run.start, lines = run.lines.len(), "table detected");
        for (offset, line) in run.lines.iter().enumerate() {
            if table::split_columns(line).is_empty() {
                outline.issues.push(GeometryIssue::EmptyTableLine {
                    block: block_idx,
                    line: run.start + offset,
                });
            }
        }
        outline.elements.push(table::build_table(&run, config));
        // The whole block belongs to the table; no per-line classification.
        return;
    }

    for (line_idx, line) in block.lines.iter().enumerate() {
        if line.spans.is_empty() {
            outline.issues.push(GeometryIssue::EmptyLine {
                block: block_idx,
                line: line_idx,
            });
            continue;
        }

        let line_text = line.text();
        if line_text.is_empty() {
            continue;
        }

        let element = match classify::classify(&line_text, config) {
            LineClass::Link => StructuredElement::Link { text: line_text },
            LineClass::Title => StructuredElement::Heading {
                text: line_text,
                level: 1,
                centered: is_centered(line, page_width, config),
            },
            LineClass::Subtitle => StructuredElement::Heading {
                text: line_text,
                level: 2,
                centered: is_centered(line, page_width, config),
            },
            LineClass::Paragraph => StructuredElement::Paragraph { text: line_text },
        };
        outline.elements.push(element);
    }
}

/// Heading centering: the midpoint of the line's first-span left edge and
/// last-span right edge must fall *strictly* inside the page's central band.
///
/// Only headings are ever centered; links and paragraphs never reach here.
fn is_centered(line: &Line, page_width: f64, config: &EngineConfig) -> bool {
    if page_width <= 0.0 {
        return false;
    }
    // Callers guarantee at least one span.
    let (Some(first), Some(last)) = (line.spans.first(), line.spans.last()) else {
        return false;
    };
    let mid = (first.bbox.x0() + last.bbox.x1()) / 2.0;
    let (lo, hi) = config.center_band;
    mid > page_width * lo && mid < page_width * hi
}
