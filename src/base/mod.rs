//! Foundation types for robots.txt reporting.
//!
//! This module provides the vocabulary shared by the handler contract and
//! the observer:
//! - [`TagCategory`] - Closed classification of a directive line
//! - [`ParsedLineRecord`] - One classified line
//! - [`LineNumber`] - 1-based line index as reported by the parser
//! - Domain constants (directives other crawlers honor but we ignore)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod record;
mod tag;

pub use record::{LineNumber, ParsedLineRecord};
pub use tag::TagCategory;
