mod cli;
mod config;

use anyhow::Result;
use cinecrawl_browser::{WebDriverConfig, WebDriverPage};
use cinecrawl_core::{Crawler, site};
use cinecrawl_storage::CsvStore;
use clap::Parser;
use tracing::{Level, info};

const LOG_FILE: &str = "scraping.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = config::CliConfig::load();

    // One log file for the whole run: opened once, appended, never rotated.
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let webdriver_url = cli
        .webdriver_url
        .unwrap_or(config.browser.webdriver_url);
    let headless = if cli.headed {
        false
    } else {
        config.browser.headless
    };
    let output = cli.output.unwrap_or(config.output.csv_path);

    info!("starting cinecrawl against {webdriver_url}");
    let page = WebDriverPage::connect(&WebDriverConfig {
        webdriver_url,
        headless,
        page_load_timeout: site::PAGE_LOAD_TIMEOUT,
        ..WebDriverConfig::default()
    })
    .await?;

    let crawler = Crawler::new(Box::new(page), CsvStore::new(output));
    let records = crawler.run().await;
    info!("run finished with {} records", records.len());

    Ok(())
}
