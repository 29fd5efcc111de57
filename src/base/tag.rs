//! Tag categories for classified directive lines

use std::fmt;

use super::constants::is_unsupported_tag;

/// Classification of a single robots.txt directive line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    /// `user-agent: ...`
    UserAgent,
    /// `allow: ...`
    Allow,
    /// `disallow: ...`
    Disallow,
    /// `sitemap: ...`
    Sitemap,
    /// A directive other crawlers honor but which does nothing here
    /// (e.g. `crawl-delay`, `host`)
    Unused,
    /// Not a directive at all
    Unknown,
}

impl TagCategory {
    /// Every category, in declaration order
    pub const ALL: [TagCategory; 6] = [
        Self::UserAgent,
        Self::Allow,
        Self::Disallow,
        Self::Sitemap,
        Self::Unused,
        Self::Unknown,
    ];

    /// Classify a directive name the parser did not recognize.
    ///
    /// Names in [`UNSUPPORTED_TAGS`](super::constants::UNSUPPORTED_TAGS) are
    /// [`Unused`](Self::Unused); everything else is [`Unknown`](Self::Unknown).
    pub fn classify_unknown(name: &str) -> Self {
        if is_unsupported_tag(name) {
            Self::Unused
        } else {
            Self::Unknown
        }
    }

    /// Whether this is one of the directives the crawler acts on
    pub fn is_valid(&self) -> bool {
        !self.is_unused()
    }

    /// Whether this line feeds the unused-directive bucket
    pub fn is_unused(&self) -> bool {
        matches!(self, Self::Unused | Self::Unknown)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserAgent => "user-agent",
            Self::Allow => "allow",
            Self::Disallow => "disallow",
            Self::Sitemap => "sitemap",
            Self::Unused => "unused",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
