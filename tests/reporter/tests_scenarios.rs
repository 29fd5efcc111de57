//! Reporter Tests - Whole-document scenarios
//!
//! Feeds complete event streams through `replay` and checks the totals and
//! per-line records a report would be built from.

use robots_report::{
    ParseObserver, ParsedLineRecord, ReportError, ReportSummary, RobotsEvent, RobotsParseHandler, TagCategory,
    replay,
};

use crate::helpers::event_fixtures::{Directive, TYPICAL_ROBOTS, numbered};

fn record(line: usize, category: TagCategory) -> ParsedLineRecord {
    ParsedLineRecord::new(line, category)
}

#[test]
fn test_mixed_directives_scenario() {
    let mut observer = ParseObserver::new();
    replay(
        &mut observer,
        numbered(&[
            Directive::UserAgent,
            Directive::Disallow,
            Directive::Unknown("crawl-delay"),
            Directive::Unknown("unicorn"),
        ]),
    )
    .unwrap();

    assert_eq!(observer.valid_directives(), 2);
    assert_eq!(observer.unused_directives(), 2);
    assert_eq!(
        observer.parse_results(),
        [
            record(1, TagCategory::UserAgent),
            record(2, TagCategory::Disallow),
            record(3, TagCategory::Unused),
            record(4, TagCategory::Unknown),
        ]
    );
}

#[test]
fn test_typical_robots_txt() {
    let mut observer = ParseObserver::new();
    replay(&mut observer, TYPICAL_ROBOTS.iter().copied()).unwrap();

    assert_eq!(
        observer.summary(),
        ReportSummary {
            valid_directives: 5,
            unused_directives: 3,
            lines: 8,
        }
    );
    assert_eq!(observer.last_line_seen(), 10);
    assert_eq!(observer.count_of(TagCategory::UserAgent), 2);
    assert_eq!(observer.count_of(TagCategory::Unused), 2);
    assert_eq!(observer.count_of(TagCategory::Unknown), 1);

    let lines: Vec<_> = observer.parse_results().iter().map(|r| r.line_number).collect();
    assert_eq!(lines, [2, 3, 4, 5, 7, 8, 9, 10]);
}

#[test]
fn test_highlight_lines_that_do_nothing() {
    let mut observer = ParseObserver::new();
    replay(&mut observer, TYPICAL_ROBOTS.iter().copied()).unwrap();

    let flagged: Vec<_> = observer
        .parse_results()
        .iter()
        .filter(|r| r.category.is_unused())
        .map(|r| (r.line_number, r.category.as_str()))
        .collect();

    assert_eq!(flagged, [(5, "unused"), (8, "unused"), (9, "unknown")]);
}

#[test]
fn test_out_of_order_stream_aborts_replay() {
    let mut observer = ParseObserver::new();
    let result = replay(
        &mut observer,
        [
            RobotsEvent::UserAgent { line: 1, value: "*" },
            RobotsEvent::Disallow { line: 3, value: "/a" },
            RobotsEvent::Disallow { line: 2, value: "/b" },
            RobotsEvent::Allow { line: 4, value: "/c" },
        ],
    );

    assert_eq!(result, Err(ReportError::OutOfOrderLine { line: 2, last_seen: 3 }));
    assert_eq!(
        observer.parse_results(),
        [record(1, TagCategory::UserAgent), record(3, TagCategory::Disallow)]
    );
}

#[test]
fn test_consecutive_documents_need_explicit_start() {
    let mut observer = ParseObserver::new();
    replay(&mut observer, numbered(&[Directive::UserAgent, Directive::Allow])).unwrap();

    // Without a start event the second document's line 1 is out of order.
    let err = observer.handle_user_agent(1, "*").unwrap_err();
    assert_eq!(err, ReportError::OutOfOrderLine { line: 1, last_seen: 2 });

    replay(&mut observer, numbered(&[Directive::Sitemap])).unwrap();
    assert_eq!(observer.valid_directives(), 1);
    assert_eq!(
        observer.parse_results(),
        [
            record(1, TagCategory::UserAgent),
            record(2, TagCategory::Allow),
            record(1, TagCategory::Sitemap),
        ]
    );
}

#[test]
fn test_empty_document() {
    let mut observer = ParseObserver::new();
    replay(&mut observer, std::iter::empty::<RobotsEvent>()).unwrap();

    assert_eq!(observer.summary(), ReportSummary::default());
    assert!(observer.into_parse_results().is_empty());
}
