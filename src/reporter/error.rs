//! Error types for the observer.

use thiserror::Error;

use crate::base::LineNumber;

/// Errors raised while recording parser events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The parser reported a line at or before one it already reported.
    #[error("line {line} reported out of order (last line seen: {last_seen})")]
    OutOfOrderLine { line: LineNumber, last_seen: LineNumber },
}
