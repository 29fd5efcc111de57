//! Domain constants for robots.txt directives.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Directive names that show up often in robots.txt files but have no effect
/// for our crawler.
///
/// Other search engines may honor them, so they are reported as
/// [`TagCategory::Unused`](super::TagCategory::Unused) rather than lumped in
/// with names that are not directives at all (`unicorn: /value`).
pub const UNSUPPORTED_TAGS: &[&str] = &[
    "clean-param",
    "crawl-delay",
    "host",
    "noarchive",
    "noindex",
    "nofollow",
];

static UNSUPPORTED_TAG_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| UNSUPPORTED_TAGS.iter().copied().collect());

/// Check whether `name` is a known-but-unused directive.
///
/// Matching is exact: `Crawl-Delay` is not `crawl-delay`.
pub fn is_unsupported_tag(name: &str) -> bool {
    UNSUPPORTED_TAG_SET.contains(name)
}
