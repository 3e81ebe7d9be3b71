//! Pipeline stages for layout-to-structure inference.
//!
//! Each submodule implements exactly one stage. Keeping stages separate
//! makes each independently testable and lets us tune one heuristic (say,
//! the column split) without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! page ──▶ rows ──▶ text ──▶ table ──▶ classify ──▶ process
//! (blocks) (y-group) (flatten) (detect+build) (predicates) (orchestrate)
//! ```
//!
//! 1. [`text`]     — whitespace normalisation for shape checks and flattening
//! 2. [`rows`]     — regroup spans by rounded vertical position
//! 3. [`classify`] — title / subtitle / link predicates with fixed precedence
//! 4. [`table`]    — detect the first tabular run and build its grid
//! 5. [`process`]  — walk blocks, emit the ordered element sequence

pub mod classify;
pub mod process;
pub mod rows;
pub mod table;
pub mod text;
