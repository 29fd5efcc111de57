//! The observer itself

use tracing::{debug, trace, warn};

use super::error::ReportError;
use super::options::{ObserverOptions, OrderingPolicy};
use crate::base::{LineNumber, ParsedLineRecord, TagCategory};
use crate::handler::RobotsParseHandler;

/// Aggregate totals of a parse session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReportSummary {
    pub valid_directives: usize,
    pub unused_directives: usize,
    /// Records currently held, across every session since the history was
    /// last taken
    pub lines: usize,
}

/// Collects statistics about the lines a robots.txt parser reports.
///
/// Counters belong to the current session and are reset by
/// `handle_robots_start`. The history is append-only across sessions; use
/// [`take_parse_results`](Self::take_parse_results) to discard it.
#[derive(Debug, Clone, Default)]
pub struct ParseObserver {
    options: ObserverOptions,
    last_line_seen: LineNumber,
    valid_directives: usize,
    unused_directives: usize,
    parse_results: Vec<ParsedLineRecord>,
}

impl ParseObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ObserverOptions) -> Self {
        Self {
            parse_results: Vec::with_capacity(options.history_capacity),
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Directives the crawler acts on: user-agent, allow, disallow, sitemap
    pub fn valid_directives(&self) -> usize {
        self.valid_directives
    }

    /// Directives reported through `handle_unknown_action`, whether they
    /// classified as [`TagCategory::Unused`] or [`TagCategory::Unknown`]
    pub fn unused_directives(&self) -> usize {
        self.unused_directives
    }

    pub fn last_line_seen(&self) -> LineNumber {
        self.last_line_seen
    }

    /// Every record in the order it was reported
    pub fn parse_results(&self) -> &[ParsedLineRecord] {
        &self.parse_results
    }

    /// Number of held records with the given category
    pub fn count_of(&self, category: TagCategory) -> usize {
        self.parse_results
            .iter()
            .filter(|record| record.category == category)
            .count()
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            valid_directives: self.valid_directives,
            unused_directives: self.unused_directives,
            lines: self.parse_results.len(),
        }
    }

    /// Hand the history to the caller, leaving it empty. Counters are kept.
    pub fn take_parse_results(&mut self) -> Vec<ParsedLineRecord> {
        std::mem::take(&mut self.parse_results)
    }

    pub fn into_parse_results(self) -> Vec<ParsedLineRecord> {
        self.parse_results
    }

    fn digest(&mut self, line_num: LineNumber, category: TagCategory, is_typo: bool) -> Result<(), ReportError> {
        if line_num <= self.last_line_seen {
            let err = ReportError::OutOfOrderLine {
                line: line_num,
                last_seen: self.last_line_seen,
            };
            warn!(line = line_num, last_seen = self.last_line_seen, %category, "rejecting out-of-order line");
            return match self.options.ordering {
                OrderingPolicy::Reject => Err(err),
                OrderingPolicy::Abort => panic!("{err}"),
            };
        }

        self.last_line_seen = line_num;
        if category.is_valid() {
            self.valid_directives += 1;
        }
        trace!(line = line_num, %category, "recorded robots.txt line");
        self.parse_results.push(ParsedLineRecord {
            line_number: line_num,
            category,
            is_typo,
        });
        Ok(())
    }
}

impl RobotsParseHandler for ParseObserver {
    type Error = ReportError;

    fn handle_robots_start(&mut self) {
        self.last_line_seen = 0;
        self.valid_directives = 0;
        self.unused_directives = 0;
        debug!(retained = self.parse_results.len(), "robots.txt session started");
    }

    fn handle_robots_end(&mut self) {
        debug!(
            valid = self.valid_directives,
            unused = self.unused_directives,
            last_line = self.last_line_seen,
            "robots.txt session finished"
        );
    }

    fn handle_user_agent(&mut self, line_num: LineNumber, _value: &str) -> Result<(), ReportError> {
        // typo info not yet available
        self.digest(line_num, TagCategory::UserAgent, false)
    }

    fn handle_allow(&mut self, line_num: LineNumber, _value: &str) -> Result<(), ReportError> {
        self.digest(line_num, TagCategory::Allow, false)
    }

    fn handle_disallow(&mut self, line_num: LineNumber, _value: &str) -> Result<(), ReportError> {
        self.digest(line_num, TagCategory::Disallow, false)
    }

    fn handle_sitemap(&mut self, line_num: LineNumber, _value: &str) -> Result<(), ReportError> {
        self.digest(line_num, TagCategory::Sitemap, false)
    }

    fn handle_unknown_action(
        &mut self,
        line_num: LineNumber,
        action: &str,
        _value: &str,
    ) -> Result<(), ReportError> {
        // Unused and Unknown share one counter.
        self.digest(line_num, TagCategory::classify_unknown(action), false)?;
        self.unused_directives += 1;
        Ok(())
    }
}
