use std::time::Duration;

use thiserror::Error;

/// Failures surfaced by a browser session.
///
/// The scraper treats every variant the same way (log, fall back to the
/// field default), but keeping "not found" and "timed out" distinct makes
/// the log file say what actually happened.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("element not found: {0}")]
    NotFound(String),

    #[error("timed out after {timeout:?} waiting for {selector}")]
    Timeout { timeout: Duration, selector: String },

    #[error("webdriver command failed: {0}")]
    Command(#[from] fantoccini::error::CmdError),

    #[error("could not establish webdriver session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("could not serialize element reference: {0}")]
    ElementRef(#[from] serde_json::Error),
}

pub type DriverResult<T> = Result<T, DriverError>;
