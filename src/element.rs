//! Output data model: the structural elements handed to the document-writer
//! collaborator.
//!
//! The engine never renders anything itself. It emits a flat, ordered
//! sequence of tagged [`StructuredElement`] values per page; the writer turns
//! those into native heading styles, run formatting, hyperlink styling, and
//! table grids. Rendering hints the writer is expected to honour are
//! documented on each variant.

use crate::config::EngineConfig;
use crate::error::GeometryIssue;
use serde::{Deserialize, Serialize};

/// One structural element inferred from page geometry.
///
/// Serialized with a `type` tag so the element stream is self-describing:
/// `{"type": "heading", "text": "...", "level": 1, "centered": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructuredElement {
    /// A heading. `level` 1 is a title, 2 a subtitle; `centered` headings
    /// should be horizontally centered by the writer.
    Heading {
        text: String,
        level: u8,
        centered: bool,
    },

    /// A hyperlink line. Rendering hint: colored and underlined.
    Link { text: String },

    /// A body paragraph. Rendering hint: base font size, trailing spacing.
    Paragraph { text: String },

    /// A table grid. Every row has the same number of cells; trailing cells
    /// of short source lines are empty.
    Table { rows: Vec<Vec<Cell>> },

    /// Explicit page-break signal, emitted between (never after) pages.
    PageBreak,
}

impl StructuredElement {
    /// Convenience constructor for a heading.
    pub fn heading(text: impl Into<String>, level: u8, centered: bool) -> Self {
        Self::Heading {
            text: text.into(),
            level,
            centered,
        }
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    /// Emphasized cells read as subtitles on their own: the writer centers
    /// them at [`EngineConfig::emphasis_font_size`] instead of plain text.
    pub emphasized: bool,
}

impl Cell {
    pub fn new(text: impl Into<String>, emphasized: bool) -> Self {
        Self {
            text: text.into(),
            emphasized,
        }
    }
}

/// Writer-facing document defaults, sourced from [`EngineConfig`].
///
/// Carried in the outline so the document writer needs no second
/// configuration channel to reproduce the body style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDefaults {
    pub font_family: String,
    pub base_font_size: f32,
    pub emphasis_font_size: f32,
}

impl From<&EngineConfig> for RenderDefaults {
    fn from(config: &EngineConfig) -> Self {
        Self {
            font_family: config.font_family.clone(),
            base_font_size: config.base_font_size,
            emphasis_font_size: config.emphasis_font_size,
        }
    }
}

/// The structured result for a single page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageOutline {
    /// Elements in reading order.
    pub elements: Vec<StructuredElement>,
    /// Geometry units that were skipped defensively while producing
    /// `elements`. Empty on clean input.
    pub issues: Vec<GeometryIssue>,
}

/// Aggregate counts for a whole structuring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructureStats {
    pub pages: usize,
    pub headings: usize,
    pub links: usize,
    pub paragraphs: usize,
    pub tables: usize,
    /// Non-text blocks (images etc.) skipped without producing elements.
    pub blocks_skipped: usize,
    /// Malformed geometry units skipped defensively.
    pub geometry_issues: usize,
    pub duration_ms: u64,
}

/// The structured result for a whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutline {
    pub pages: Vec<PageOutline>,
    pub defaults: RenderDefaults,
    pub stats: StructureStats,
}

impl DocumentOutline {
    /// Flatten the outline into one element stream with an explicit
    /// [`StructuredElement::PageBreak`] between consecutive pages.
    ///
    /// This is the exact sequence a document writer should consume: the
    /// break goes *between* pages, never after the last one.
    pub fn into_elements(self) -> Vec<StructuredElement> {
        let mut elements = Vec::new();
        let last = self.pages.len().saturating_sub(1);
        for (i, page) in self.pages.into_iter().enumerate() {
            elements.extend(page.elements);
            if i < last {
                elements.push(StructuredElement::PageBreak);
            }
        }
        elements
    }
}
