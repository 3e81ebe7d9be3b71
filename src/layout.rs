//! Input data model: the geometric page layout produced by an external
//! text-extraction service.
//!
//! ## Shape
//!
//! The model mirrors the dict shape that PDF text extractors emit
//! (PyMuPDF's `page.get_text("dict")` and friends): a page is a list of
//! blocks, a block a list of lines, a line a list of spans, and every span
//! carries its text plus a bounding box as a `[x0, y0, x1, y1]` array.
//! Non-text blocks (images, drawings) arrive *without* a `lines` key; they
//! deserialize with an empty line list and are skipped by the processor.
//!
//! All entities live only for the duration of one structuring pass — nothing
//! here persists across pages or crosses the writer boundary.

use crate::error::StructureError;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, `(x0, y0, x1, y1)` in page coordinates.
///
/// Serialized as a plain 4-element array to match extractor output.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BBox(pub f64, pub f64, pub f64, pub f64);

impl BBox {
    /// Left edge.
    pub fn x0(&self) -> f64 {
        self.0
    }

    /// Top edge.
    pub fn y0(&self) -> f64 {
        self.1
    }

    /// Right edge.
    pub fn x1(&self) -> f64 {
        self.2
    }

    /// Bottom edge.
    pub fn y1(&self) -> f64 {
        self.3
    }
}

/// Atomic unit of positioned text: one font run with its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub bbox: BBox,
}

impl Span {
    pub fn new(text: impl Into<String>, bbox: BBox) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }
}

/// Ordered sequence of spans sharing one extractor-reported line position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub bbox: BBox,
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(bbox: BBox, spans: Vec<Span>) -> Self {
        Self { bbox, spans }
    }

    /// The line's visible text: span texts joined with single spaces, trimmed.
    pub fn text(&self) -> String {
        let joined = self
            .spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        joined.trim().to_string()
    }
}

/// One layout unit on a page: an ordered sequence of lines.
///
/// Image and drawing blocks have no `lines` key in extractor output;
/// `serde(default)` maps that to an empty vec, which the processor skips.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Block {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// True for non-text blocks (images etc.), which carry no lines.
    pub fn is_text(&self) -> bool {
        !self.lines.is_empty()
    }
}

/// A fully extracted page: its width plus its blocks in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Overall page width in the same coordinate space as the span bboxes.
    /// Needed for the heading-centering decision.
    pub width: f64,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(width: f64, blocks: Vec<Block>) -> Self {
        Self { width, blocks }
    }

    /// Parse a single page from extractor JSON.
    pub fn from_json(json: &str) -> Result<Self, StructureError> {
        serde_json::from_str(json).map_err(|e| StructureError::InvalidLayout {
            detail: e.to_string(),
        })
    }
}

/// A whole extracted document: pages in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLayout {
    pub pages: Vec<Page>,
}

impl DocumentLayout {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Parse a whole document from extractor JSON.
    pub fn from_json(json: &str) -> Result<Self, StructureError> {
        serde_json::from_str(json).map_err(|e| StructureError::InvalidLayout {
            detail: e.to_string(),
        })
    }
}
