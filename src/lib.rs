//! # layout2doc
//!
//! Infer a structured document — headings, links, paragraphs, tables — from
//! the raw geometric layout of an extracted page.
//!
//! ## Why this crate?
//!
//! Text extractors hand you geometry, not structure: blocks of lines of
//! spans, each with a bounding box, and nothing that says what any of it
//! *is*. This crate is the decision layer in between. From position and
//! text shape alone it decides that a short ALL-CAPS line is a title, that
//! a run of double-space-separated lines is a table, and that a heading
//! whose midpoint sits in the middle fifth of the page should be centered.
//! Everything around it — the PDF parser upstream, the document writer
//! downstream — is somebody else's mechanical I/O.
//!
//! The heuristics are deliberately simple and deliberately stable: a real
//! two-column paragraph can be misread as a table and a shouty short
//! paragraph as a title. That is accepted best-effort behaviour, not a bug
//! to be fixed with a cleverer tokenizer that would change every output.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Page (blocks / lines / spans + bboxes)
//!  │
//!  ├─ 1. Rows      regroup spans by rounded vertical position
//!  ├─ 2. Flatten   per-line text, newlines → spaces
//!  ├─ 3. Tables    first run of ≥2 multi-column lines consumes the block
//!  ├─ 4. Classify  link → title → subtitle → paragraph (fixed precedence)
//!  └─ 5. Emit      ordered StructuredElement stream + page breaks
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use layout2doc::{structure_page, BBox, Block, EngineConfig, Line, Page, Span};
//!
//! let bbox = BBox(72.0, 100.0, 300.0, 112.0);
//! let page = Page::new(
//!     612.0,
//!     vec![Block::new(vec![Line::new(
//!         bbox,
//!         vec![Span::new("INTRODUCTION", bbox)],
//!     )])],
//! );
//!
//! let outline = structure_page(&page, &EngineConfig::default());
//! assert_eq!(outline.elements.len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `layout2doc` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! layout2doc = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod element;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod structure;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{EngineConfig, EngineConfigBuilder};
pub use element::{
    Cell, DocumentOutline, PageOutline, RenderDefaults, StructureStats, StructuredElement,
};
pub use error::{GeometryIssue, StructureError};
pub use layout::{BBox, Block, DocumentLayout, Line, Page, Span};
pub use structure::{structure_document, structure_json, structure_page, write_outline_to_file};
