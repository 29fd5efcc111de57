//! Parser callback contract
//!
//! A robots.txt parser walks the document and reports each directive line
//! through [`RobotsParseHandler`]:
//!
//! ```text
//! handle_robots_start
//!     ↓
//! handle_user_agent / handle_allow / handle_disallow /
//! handle_sitemap / handle_unknown_action   (one per line, increasing)
//!     ↓
//! handle_robots_end
//! ```
//!
//! [`RobotsEvent`] is the same surface as a value, so a recorded stream of
//! directives can be pushed into any handler with [`replay`].

mod events;

pub use events::{RobotsEvent, replay};

use crate::base::LineNumber;

/// Callbacks raised by a robots.txt parser, one per directive line.
///
/// Line numbers passed to the directive methods must be strictly increasing
/// within a session. Implementations may refuse a line that breaks this by
/// returning an error, which the parser should treat as fatal for the run.
pub trait RobotsParseHandler {
    /// Error returned when a directive cannot be accepted
    type Error;

    /// Start of a document. Resets per-session state.
    fn handle_robots_start(&mut self);

    /// End of a document.
    fn handle_robots_end(&mut self);

    fn handle_user_agent(&mut self, line_num: LineNumber, value: &str) -> Result<(), Self::Error>;

    fn handle_allow(&mut self, line_num: LineNumber, value: &str) -> Result<(), Self::Error>;

    fn handle_disallow(&mut self, line_num: LineNumber, value: &str) -> Result<(), Self::Error>;

    fn handle_sitemap(&mut self, line_num: LineNumber, value: &str) -> Result<(), Self::Error>;

    /// Any `key: value` line whose key is not one of the directives above.
    /// `action` is the raw key as it appeared in the document.
    fn handle_unknown_action(
        &mut self,
        line_num: LineNumber,
        action: &str,
        value: &str,
    ) -> Result<(), Self::Error>;
}
