//! Line classification: decide what a line of text *is* from its shape alone.
//!
//! Three boolean predicates (link, title, subtitle) over normalized text,
//! resolved by a fixed precedence order rather than by scoring:
//! link → title → subtitle → paragraph. The order matters — a link is never
//! re-classified as a title even when it satisfies the casing test, and a
//! short Title-Case line is a title, not a subtitle, even though it
//! satisfies both predicates. Ambiguity is resolved here by construction,
//! never reported as an error.
//!
//! Casing follows the conventional tests: ALL-CAPS means at least one cased
//! character and no lowercase ones; Title-Case means every word starts with
//! an uppercase letter and continues in lowercase. Lengths count characters,
//! not bytes.

use crate::config::EngineConfig;

/// The classification of one line in a non-table block.
///
/// Classification is total: every non-empty line maps to exactly one
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Link,
    Title,
    Subtitle,
    Paragraph,
}

/// True iff the text has at least one cased character and no lowercase ones.
fn is_all_caps(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// True iff the text is title-cased: uppercase letters only begin words,
/// lowercase letters only continue them, and at least one cased character
/// exists.
fn is_title_case(text: &str) -> bool {
    let mut cased = false;
    let mut prev_cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            cased = true;
        } else {
            prev_cased = false;
        }
    }
    cased
}

/// True iff the line reads as a title: short and shouty (ALL-CAPS) or short
/// and Title-Case.
pub fn is_title(text: &str, config: &EngineConfig) -> bool {
    text.chars().count() < config.title_max_chars && (is_all_caps(text) || is_title_case(text))
}

/// True iff the line reads as a subtitle: Title-Case under the looser bound.
pub fn is_subtitle(text: &str, config: &EngineConfig) -> bool {
    text.chars().count() < config.subtitle_max_chars && is_title_case(text)
}

/// True iff the line is a bare hyperlink.
pub fn is_link(text: &str) -> bool {
    text.starts_with("http")
}

/// Classify one line of text with the fixed precedence order.
pub fn classify(text: &str, config: &EngineConfig) -> LineClass {
    if is_link(text) {
        LineClass::Link
    } else if is_title(text, config) {
        LineClass::Title
    } else if is_subtitle(text, config) {
        LineClass::Subtitle
    } else {
        LineClass::Paragraph
    }
}
