//! Shared data model for cinecrawl.
//!
//! One entity lives here: [`MovieRecord`], the row shape every scraped movie
//! is normalized into, together with its sentinel defaults, its fixed CSV
//! column order, and the markup-stripping text cleaner applied to every
//! extracted value.

pub mod clean;
pub mod record;

pub use clean::clean;
pub use record::{
    CRITIC_REVIEW_SLOTS, MovieRecord, NOT_AVAILABLE, USER_REVIEW_SLOTS, ZERO_COUNT,
};
