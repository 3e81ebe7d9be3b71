//! Top-level structuring entry points.
//!
//! The library surface mirrors how the engine is consumed: one page at a
//! time ([`structure_page`]), a whole document at once
//! ([`structure_document`]), straight from extractor JSON
//! ([`structure_json`]), or written to disk as a serialized outline
//! ([`write_outline_to_file`]). Everything is synchronous and purely
//! computational — pages are independent, so callers that want parallelism
//! can fan pages out themselves and reassemble outlines in page order.

use crate::config::EngineConfig;
use crate::element::{DocumentOutline, PageOutline, RenderDefaults, StructureStats, StructuredElement};
use crate::error::StructureError;
use crate::layout::{DocumentLayout, Page};
use crate::pipeline::process;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Structure a single page into its ordered element sequence.
///
/// Never fails: malformed geometry is skipped and recorded in
/// [`PageOutline::issues`], misclassification is accepted heuristic error.
pub fn structure_page(page: &Page, config: &EngineConfig) -> PageOutline {
    let (outline, _) = process::process_page(page, config);
    outline
}

/// Structure a whole document, page by page, in order.
///
/// The returned [`DocumentOutline`] holds one [`PageOutline`] per input page
/// plus writer defaults and aggregate stats. Use
/// [`DocumentOutline::into_elements`] to get the flat stream with explicit
/// page breaks for the document writer.
pub fn structure_document(pages: &[Page], config: &EngineConfig) -> DocumentOutline {
    let start = Instant::now();
    info!(pages = pages.len(), "structuring document");

    let mut outlines = Vec::with_capacity(pages.len());
    let mut blocks_skipped = 0;
    for (i, page) in pages.iter().enumerate() {
        let (outline, skipped) = process::process_page(page, config);
        debug!(page = i + 1, elements = outline.elements.len(), "page structured");
        blocks_skipped += skipped;
        outlines.push(outline);
    }

    let mut stats = count_elements(&outlines);
    stats.pages = pages.len();
    stats.blocks_skipped = blocks_skipped;
    stats.duration_ms = start.elapsed().as_millis() as u64;

    info!(
        headings = stats.headings,
        links = stats.links,
        paragraphs = stats.paragraphs,
        tables = stats.tables,
        duration_ms = stats.duration_ms,
        "document structured"
    );

    DocumentOutline {
        pages: outlines,
        defaults: RenderDefaults::from(config),
        stats,
    }
}

/// Parse extractor JSON and structure the whole document.
///
/// Accepts either a document object (`{"pages": [...]}`) or a bare single
/// page object, since extractors commonly emit one dict per page.
pub fn structure_json(json: &str, config: &EngineConfig) -> Result<DocumentOutline, StructureError> {
    let layout = match DocumentLayout::from_json(json) {
        Ok(layout) => layout,
        Err(_) => DocumentLayout::new(vec![Page::from_json(json)?]),
    };
    Ok(structure_document(&layout.pages, config))
}

/// Serialize an outline to pretty JSON and write it atomically.
///
/// Atomic write (temp file + rename) so a crash mid-write never leaves a
/// truncated outline behind.
pub fn write_outline_to_file(
    outline: &DocumentOutline,
    path: impl AsRef<Path>,
) -> Result<(), StructureError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(outline)
        .map_err(|e| StructureError::Internal(format!("outline serialisation: {e}")))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| StructureError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json).map_err(|e| StructureError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| StructureError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), bytes = json.len(), "outline written");
    Ok(())
}

fn count_elements(outlines: &[PageOutline]) -> StructureStats {
    let mut stats = StructureStats::default();
    for outline in outlines {
        stats.geometry_issues += outline.issues.len();
        for element in &outline.elements {
            match element {
                StructuredElement::Heading { .. } => stats.headings += 1,
                StructuredElement::Link { .. } => stats.links += 1,
                StructuredElement::Paragraph { .. } => stats.paragraphs += 1,
                StructuredElement::Table { .. } => stats.tables += 1,
                StructuredElement::PageBreak => {}
            }
        }
    }
    stats
}
