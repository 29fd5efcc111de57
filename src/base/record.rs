//! Per-line records kept by the observer

use super::tag::TagCategory;

/// 1-based line number as reported by the parser.
pub type LineNumber = usize;

/// One classified directive line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedLineRecord {
    pub line_number: LineNumber,
    pub category: TagCategory,
    /// Reserved for near-match detection (`disalow`, `useragent`). No
    /// parser event carries typo information yet, so this is always false.
    pub is_typo: bool,
}

impl ParsedLineRecord {
    pub fn new(line_number: LineNumber, category: TagCategory) -> Self {
        Self {
            line_number,
            category,
            is_typo: false,
        }
    }
}
