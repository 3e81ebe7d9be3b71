//! Configuration types for layout structuring.
//!
//! All engine behaviour is controlled through [`EngineConfig`], built via its
//! [`EngineConfigBuilder`]. Keeping every knob in one struct makes it trivial
//! to share configs across threads, serialise them for logging, and diff two
//! runs to understand why their outputs differ — and it replaces the hidden
//! process-wide defaults (output folder, font globals) that this kind of tool
//! tends to accumulate.
//!
//! # A word of caution on the heuristic knobs
//! The defaults reproduce a specific, observable classification behaviour:
//! title under 60 chars, subtitle under 90, centering band (0.40, 0.60),
//! row grouping at 1 decimal. Changing them changes which elements come out
//! the other end, so two runs are only comparable under the same config.

use crate::error::StructureError;
use serde::{Deserialize, Serialize};

/// Configuration for a layout-structuring run.
///
/// Built via [`EngineConfig::builder()`] or using
/// [`EngineConfig::default()`].
///
/// # Example
/// ```rust
/// use layout2doc::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .font_family("Georgia")
///     .base_font_size(12.0)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Font family the document writer should use for body text. Default: "Calibri".
    ///
    /// Purely a pass-through rendering default; the engine never inspects it.
    pub font_family: String,

    /// Base body font size in points. Default: 11.0.
    pub base_font_size: f32,

    /// Font size in points for emphasized table cells. Default: 11.0.
    ///
    /// A cell whose text independently reads as a subtitle is rendered
    /// centered at this size instead of as plain cell text.
    pub emphasis_font_size: f32,

    /// Maximum character count (exclusive) for the title predicate. Default: 60.
    ///
    /// A line shorter than this that is ALL-CAPS or Title-Case becomes a
    /// level-1 heading.
    pub title_max_chars: usize,

    /// Maximum character count (exclusive) for the subtitle predicate. Default: 90.
    ///
    /// Because titles are checked first, in practice this branch catches
    /// Title-Case lines of length 60–89.
    pub subtitle_max_chars: usize,

    /// Fractional horizontal band for the centering decision. Default: (0.40, 0.60).
    ///
    /// A heading is centered iff its line midpoint falls *strictly* inside
    /// `(band.0 × width, band.1 × width)`. A midpoint at exactly 40% of the
    /// page width is not centered.
    pub center_band: (f64, f64),

    /// Decimal places used when rounding a line's top-edge y for row
    /// grouping. Default: 1.
    ///
    /// At 1 decimal, lines whose y differs by ≤ 0.05 merge into one row.
    /// This tolerance must match across implementations for reproducible
    /// grouping; change it only if every consumer changes with you.
    pub row_grouping_decimals: u32,

    /// Minimum consecutive multi-column lines that make a table. Default: 2.
    pub min_table_lines: usize,

    /// Minimum columns a line must split into to look tabular. Default: 2.
    pub min_table_columns: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            base_font_size: 11.0,
            emphasis_font_size: 11.0,
            title_max_chars: 60,
            subtitle_max_chars: 90,
            center_band: (0.40, 0.60),
            row_grouping_decimals: 1,
            min_table_lines: 2,
            min_table_columns: 2,
        }
    }
}

impl EngineConfig {
    /// Create a new builder for `EngineConfig`.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`EngineConfig`].
#[derive(Debug)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.config.font_family = family.into();
        self
    }

    pub fn base_font_size(mut self, pt: f32) -> Self {
        self.config.base_font_size = pt.max(1.0);
        self
    }

    pub fn emphasis_font_size(mut self, pt: f32) -> Self {
        self.config.emphasis_font_size = pt.max(1.0);
        self
    }

    pub fn title_max_chars(mut self, n: usize) -> Self {
        self.config.title_max_chars = n;
        self
    }

    pub fn subtitle_max_chars(mut self, n: usize) -> Self {
        self.config.subtitle_max_chars = n;
        self
    }

    pub fn center_band(mut self, lo: f64, hi: f64) -> Self {
        self.config.center_band = (lo, hi);
        self
    }

    pub fn row_grouping_decimals(mut self, decimals: u32) -> Self {
        self.config.row_grouping_decimals = decimals.min(6);
        self
    }

    pub fn min_table_lines(mut self, n: usize) -> Self {
        self.config.min_table_lines = n;
        self
    }

    pub fn min_table_columns(mut self, n: usize) -> Self {
        self.config.min_table_columns = n;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<EngineConfig, StructureError> {
        let c = &self.config;
        let (lo, hi) = c.center_band;
        if !(0.0..=1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) || lo >= hi {
            return Err(StructureError::InvalidConfig(format!(
                "Center band must satisfy 0 ≤ lo < hi ≤ 1, got ({lo}, {hi})"
            )));
        }
        if c.title_max_chars == 0 || c.title_max_chars > c.subtitle_max_chars {
            return Err(StructureError::InvalidConfig(format!(
                "Title bound must be nonzero and ≤ subtitle bound, got {} vs {}",
                c.title_max_chars, c.subtitle_max_chars
            )));
        }
        if c.min_table_lines < 2 {
            return Err(StructureError::InvalidConfig(
                "A table needs at least 2 lines".into(),
            ));
        }
        if c.min_table_columns < 2 {
            return Err(StructureError::InvalidConfig(
                "A tabular line needs at least 2 columns".into(),
            ));
        }
        Ok(self.config)
    }
}
