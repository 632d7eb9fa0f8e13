//! Scraper core for cinecrawl.
//!
//! Two components, composed linearly:
//! - [`listing`]: expand the paginated results listing until it stops
//!   growing, then harvest every result link as the worklist.
//! - [`extract::RecordExtractor`]: visit one link and read a fixed set of
//!   fields, each through an isolated lookup-or-default step.
//!
//! [`crawler::Crawler`] strings them together, rewriting the CSV output
//! after every record. The browser is driven strictly one step at a time;
//! there is no parallelism, no retry, and no cache.

pub mod crawler;
pub mod extract;
pub mod listing;
pub mod site;

#[cfg(test)]
pub(crate) mod testutil;

pub use crawler::Crawler;
pub use extract::RecordExtractor;
