//! Markup stripping for extracted text.

use once_cell::sync::Lazy;
use regex::Regex;

static TAGS: Lazy<Regex> = Lazy::new(|| Regex::new("<[^>]*>").expect("tag pattern is valid"));

/// Remove embedded markup tags and trim surrounding whitespace.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
pub fn clean(text: &str) -> String {
    TAGS.replace_all(text, "").trim().to_string()
}
