//! # robots-report
//!
//! Statistics-collecting observer for robots.txt directive parsers.
//!
//! The parser itself lives elsewhere; it scans a robots.txt document and
//! pushes one callback per directive line into a [`RobotsParseHandler`].
//! [`ParseObserver`] is the handler shipped here: it classifies each line,
//! counts valid and unused directives, and keeps an ordered per-line record
//! for reporting or highlighting.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! reporter  → ParseObserver, ObserverOptions, ReportError
//!   ↓
//! handler   → RobotsParseHandler trait, replayable RobotsEvent
//!   ↓
//! base      → TagCategory, ParsedLineRecord, unsupported-tag set
//! ```

// ============================================================================
// MODULES (dependency order: base → handler → reporter)
// ============================================================================

/// Foundation types: tag categories, per-line records, constants
pub mod base;

/// Parser callback contract and replayable events
pub mod handler;

/// The statistics-collecting observer
pub mod reporter;

pub use base::{LineNumber, ParsedLineRecord, TagCategory};
pub use handler::{RobotsEvent, RobotsParseHandler, replay};
pub use reporter::{ObserverOptions, OrderingPolicy, ParseObserver, ReportError, ReportSummary};
