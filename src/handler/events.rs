//! Directive events as values

use super::RobotsParseHandler;
use crate::base::LineNumber;

/// A single directive line as reported by the parser.
///
/// Values borrow from the source document; nothing is copied until a
/// handler decides to keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotsEvent<'a> {
    UserAgent {
        line: LineNumber,
        value: &'a str,
    },
    Allow {
        line: LineNumber,
        value: &'a str,
    },
    Disallow {
        line: LineNumber,
        value: &'a str,
    },
    Sitemap {
        line: LineNumber,
        value: &'a str,
    },
    Unknown {
        line: LineNumber,
        action: &'a str,
        value: &'a str,
    },
}

impl RobotsEvent<'_> {
    pub fn line_number(&self) -> LineNumber {
        match self {
            Self::UserAgent { line, .. }
            | Self::Allow { line, .. }
            | Self::Disallow { line, .. }
            | Self::Sitemap { line, .. }
            | Self::Unknown { line, .. } => *line,
        }
    }

    /// Deliver this event to the matching handler method.
    pub fn dispatch<H: RobotsParseHandler + ?Sized>(&self, handler: &mut H) -> Result<(), H::Error> {
        match *self {
            Self::UserAgent { line, value } => handler.handle_user_agent(line, value),
            Self::Allow { line, value } => handler.handle_allow(line, value),
            Self::Disallow { line, value } => handler.handle_disallow(line, value),
            Self::Sitemap { line, value } => handler.handle_sitemap(line, value),
            Self::Unknown {
                line,
                action,
                value,
            } => handler.handle_unknown_action(line, action, value),
        }
    }
}

/// Run one full session: start, every event in order, end.
///
/// Stops at the first event the handler refuses and returns its error. An
/// aborted session never reaches `handle_robots_end`.
pub fn replay<'a, H, I>(handler: &mut H, events: I) -> Result<(), H::Error>
where
    H: RobotsParseHandler + ?Sized,
    I: IntoIterator<Item = RobotsEvent<'a>>,
{
    handler.handle_robots_start();
    for event in events {
        event.dispatch(handler)?;
    }
    handler.handle_robots_end();
    Ok(())
}
