//! Statistics-collecting observer
//!
//! [`ParseObserver`] implements [`RobotsParseHandler`](crate::handler::RobotsParseHandler)
//! and keeps:
//! - a count of directives the crawler acts on (user-agent, allow, disallow, sitemap)
//! - a count of directives it ignores, known or not
//! - one [`ParsedLineRecord`](crate::base::ParsedLineRecord) per reported line, in line order
//!
//! Lines must arrive in strictly increasing order; see [`OrderingPolicy`]
//! for what happens when they don't.

mod error;
mod observer;
mod options;

pub use error::ReportError;
pub use observer::{ParseObserver, ReportSummary};
pub use options::{ObserverOptions, OrderingPolicy};
