use std::path::PathBuf;

use clap::Parser;

/// Browser-driven movie metadata scraper.
///
/// The listing URL, selectors, and wait durations are fixed; the flags here
/// only cover the environment the run executes in.
#[derive(Parser, Debug)]
#[command(name = "cinecrawl", version, about = "Browser-driven movie metadata scraper")]
pub struct Cli {
    /// WebDriver endpoint to attach to (a running chromedriver)
    #[arg(long, env = "CINECRAWL_WEBDRIVER_URL")]
    pub webdriver_url: Option<String>,

    /// Output CSV path (defaults to data/movies_complete_data.csv)
    #[arg(long, env = "CINECRAWL_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Run the browser with a visible window
    #[arg(long)]
    pub headed: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
