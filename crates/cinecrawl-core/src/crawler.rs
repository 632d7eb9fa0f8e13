//! The sequential run loop.

use anyhow::Result;
use cinecrawl_browser::Page;
use cinecrawl_models::MovieRecord;
use cinecrawl_storage::CsvStore;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::extract::RecordExtractor;
use crate::listing;
use crate::site;

/// Owns the single browser session and the single in-memory table, and
/// drives the whole run: listing expansion, per-record extraction, and
/// incremental persistence.
pub struct Crawler {
    page: Box<dyn Page>,
    store: CsvStore,
    records: Vec<MovieRecord>,
}

impl Crawler {
    pub fn new(page: Box<dyn Page>, store: CsvStore) -> Self {
        Self {
            page,
            store,
            records: Vec::new(),
        }
    }

    /// Run to completion. However the crawl ends — worklist exhausted or an
    /// error escaping the loop — the browser session is released and a
    /// final write is performed, so the output file is always present and
    /// well-formed.
    pub async fn run(mut self) -> Vec<MovieRecord> {
        if let Err(err) = self.crawl().await {
            error!("run aborted: {err}");
        }

        if let Err(err) = self.page.close().await {
            warn!("failed to release the browser session: {err}");
        }
        match self.store.save(&self.records) {
            Ok(()) => info!(
                "scraping complete: {} records written to {}",
                self.records.len(),
                self.store.path().display()
            ),
            Err(err) => error!("final write failed: {err}"),
        }

        self.records
    }

    async fn crawl(&mut self) -> Result<()> {
        info!("navigating to {}", site::LISTING_URL);
        self.page.goto(site::LISTING_URL).await?;

        let worklist = listing::collect(self.page.as_ref()).await;

        for url in &worklist {
            let sequence_number = self.records.len() as u32 + 1;
            let mut record = RecordExtractor::new(self.page.as_ref())
                .extract(url, sequence_number)
                .await;
            record.source_url = url.clone();
            self.records.push(record);

            // Persist before moving on; a failed write must not stop the
            // crawl.
            if let Err(err) = self.store.save(&self.records) {
                warn!("could not persist after record {sequence_number}: {err}");
            }

            sleep(site::BETWEEN_RECORDS_DELAY).await;
        }
        Ok(())
    }
}
