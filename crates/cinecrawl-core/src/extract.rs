//! Per-page field extraction.

use std::collections::HashSet;
use std::future::Future;

use cinecrawl_browser::{DriverResult, Page, PageElement, Selector};
use cinecrawl_models::{
    CRITIC_REVIEW_SLOTS, MovieRecord, NOT_AVAILABLE, USER_REVIEW_SLOTS, ZERO_COUNT, clean,
};
use tracing::{error, warn};

use crate::site;

/// Reads one [`MovieRecord`] out of a movie's detail page, plus up to two
/// review pages.
///
/// Only the initial navigation and its heading wait are fatal to a record.
/// Every later lookup is isolated: on failure it is logged, the field keeps
/// its default, and extraction continues with the next field.
pub struct RecordExtractor<'a> {
    page: &'a dyn Page,
}

impl<'a> RecordExtractor<'a> {
    pub fn new(page: &'a dyn Page) -> Self {
        Self { page }
    }

    /// Visit `url` and fill a fresh record. The caller attaches
    /// `source_url` after this returns.
    pub async fn extract(&self, url: &str, sequence_number: u32) -> MovieRecord {
        let mut record = MovieRecord::new(sequence_number);

        if let Err(err) = self.open_detail_page(url).await {
            error!("skipping {url}: {err}");
            return record;
        }

        record.title = self
            .or_default("title", url, na(), self.clean_html(site::TITLE))
            .await;
        record.production_companies = self
            .or_default(
                "production companies",
                url,
                Vec::new(),
                self.production_companies(),
            )
            .await;
        record.year = self
            .or_default("year", url, na(), self.clean_html(site::YEAR))
            .await;
        record.genres = self
            .or_default("genres", url, Vec::new(), self.clean_html_all(site::GENRES))
            .await;
        record.director = self
            .or_default("director", url, Vec::new(), self.director())
            .await;
        record.writers = self
            .or_default(
                "writers",
                url,
                Vec::new(),
                self.clean_html_all(site::WRITERS),
            )
            .await;
        record.cast = self.or_default("cast", url, Vec::new(), self.cast()).await;
        record.metascore = self
            .or_default("metascore", url, na(), self.clean_html(site::METASCORE))
            .await;
        record.synopsis = self
            .or_default("synopsis", url, na(), self.clean_html(site::SYNOPSIS))
            .await;
        record.runtime = self
            .or_default("runtime", url, na(), self.clean_html(site::RUNTIME))
            .await;
        record.imdb_score = self
            .or_default("imdb score", url, na(), self.clean_html(site::IMDB_SCORE))
            .await;
        record.user_reviews_count = self
            .or_default(
                "user reviews count",
                url,
                zero(),
                self.clean_html(site::USER_REVIEWS_COUNT),
            )
            .await;
        record.critic_reviews_count = self
            .or_default(
                "critic reviews count",
                url,
                zero(),
                self.clean_html(site::CRITIC_REVIEWS_COUNT),
            )
            .await;

        match self.box_office_pairs().await {
            Ok(pairs) => apply_box_office(&mut record, &pairs),
            Err(err) => warn!("box office data not found for {url}: {err}"),
        }

        record.keywords = self
            .or_default(
                "keywords",
                url,
                Vec::new(),
                self.clean_html_all(site::KEYWORDS),
            )
            .await;

        // Review links must be read while the detail page is still loaded;
        // the excursions below navigate away from it.
        let user_reviews_url = self
            .review_link(site::USER_REVIEWS_LINK, "user reviews link", url)
            .await;
        let critic_reviews_url = self
            .review_link(site::CRITIC_REVIEWS_LINK, "critic reviews link", url)
            .await;

        if let Some(reviews_url) = user_reviews_url {
            match self.user_review_headings(&reviews_url).await {
                Ok(headings) => fill_slots(&mut record.user_reviews, headings),
                Err(err) => warn!("failed to fetch user reviews from {reviews_url}: {err}"),
            }
        }

        if let Some(reviews_url) = critic_reviews_url {
            match self.critic_review_composites(&reviews_url).await {
                Ok(composites) => fill_slots(&mut record.critic_reviews, composites),
                Err(err) => warn!("failed to fetch critic reviews from {reviews_url}: {err}"),
            }
        }

        record
    }

    /// Run one field lookup, falling back to `default` on any failure.
    async fn or_default<T, F>(&self, field: &str, url: &str, default: T, lookup: F) -> T
    where
        F: Future<Output = DriverResult<T>>,
    {
        match lookup.await {
            Ok(value) => value,
            Err(err) => {
                warn!("{field} not found for {url}: {err}");
                default
            }
        }
    }

    async fn open_detail_page(&self, url: &str) -> DriverResult<()> {
        self.page.goto(url).await?;
        self.page
            .wait_for(site::HEADING, site::PRESENCE_TIMEOUT)
            .await
    }

    async fn clean_html(&self, selector: Selector) -> DriverResult<String> {
        let element = self.page.find(selector).await?;
        Ok(clean(&element.inner_html().await?))
    }

    async fn clean_html_all(&self, selector: Selector) -> DriverResult<Vec<String>> {
        let elements = self.page.find_all(selector).await?;
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(clean(&element.inner_html().await?));
        }
        Ok(values)
    }

    async fn director(&self) -> DriverResult<Vec<String>> {
        Ok(vec![self.clean_html(site::DIRECTOR).await?])
    }

    /// Cast names are deduplicated, and the section heading the site
    /// exposes as a fake cast entry is dropped.
    async fn cast(&self) -> DriverResult<Vec<String>> {
        let names = self.clean_html_all(site::CAST).await?;
        let mut seen = HashSet::new();
        Ok(names
            .into_iter()
            .filter(|name| name != site::CAST_SECTION_LABEL && seen.insert(name.clone()))
            .collect())
    }

    async fn production_companies(&self) -> DriverResult<Vec<String>> {
        let elements = self.page.find_all(site::PRODUCTION_COMPANIES).await?;
        let mut companies = Vec::with_capacity(elements.len());
        for element in elements {
            companies.push(element.text().await?);
        }
        Ok(companies)
    }

    async fn box_office_pairs(&self) -> DriverResult<Vec<(String, String)>> {
        let section = self.page.find(site::BOX_OFFICE_SECTION).await?;
        let items = section.find_all(site::BOX_OFFICE_ITEM).await?;
        let mut pairs = Vec::with_capacity(items.len());
        for item in items {
            let label = clean(&item.find(site::BOX_OFFICE_LABEL).await?.inner_html().await?);
            let value = clean(&item.find(site::BOX_OFFICE_VALUE).await?.inner_html().await?);
            pairs.push((label, value));
        }
        Ok(pairs)
    }

    async fn review_link(&self, selector: Selector, what: &str, url: &str) -> Option<String> {
        let target = async { self.page.find(selector).await?.prop("href").await };
        match target.await {
            Ok(Some(href)) => Some(href),
            Ok(None) => None,
            Err(err) => {
                warn!("{what} not found for {url}: {err}");
                None
            }
        }
    }

    async fn user_review_headings(&self, reviews_url: &str) -> DriverResult<Vec<String>> {
        self.page.goto(reviews_url).await?;
        self.page
            .wait_for(site::REVIEW_CARD, site::PRESENCE_TIMEOUT)
            .await?;

        let cards = self.page.find_all(site::REVIEW_CARD).await?;
        let mut headings = Vec::new();
        for card in cards {
            if headings.len() == USER_REVIEW_SLOTS {
                break;
            }
            // A collapsed spoiler disqualifies the review.
            if !card.find_all(site::SPOILER_BUTTON).await?.is_empty() {
                continue;
            }
            let heading = card.find(site::REVIEW_HEADING).await?.inner_html().await?;
            headings.push(clean(&heading));
        }
        Ok(headings)
    }

    async fn critic_review_composites(&self, reviews_url: &str) -> DriverResult<Vec<String>> {
        self.page.goto(reviews_url).await?;
        self.page
            .wait_for(site::CRITIC_REVIEW_ITEM, site::PRESENCE_TIMEOUT)
            .await?;

        let items = self.page.find_all(site::CRITIC_REVIEW_ITEM).await?;
        let mut composites = Vec::new();
        for item in items.into_iter().take(CRITIC_REVIEW_SLOTS) {
            let score = clean(&item.find(site::CRITIC_SCORE).await?.inner_html().await?);
            let critic = clean(&item.find(site::CRITIC_NAME).await?.inner_html().await?);
            let review = clean(&item.find(site::CRITIC_TEXT).await?.inner_html().await?);
            composites.push(format!("Score: {score}\nCritic: {critic}\nReview: {review}"));
        }
        Ok(composites)
    }
}

/// Map labeled box-office pairs onto the three box-office fields. Labels
/// outside the three known ones are ignored; an absent label leaves the
/// field's default in place.
pub fn apply_box_office(record: &mut MovieRecord, pairs: &[(String, String)]) {
    for (label, value) in pairs {
        match label.as_str() {
            site::LABEL_BUDGET => record.box_office_budget = value.clone(),
            site::LABEL_OPENING_WEEKEND => record.box_office_usa_weekend = value.clone(),
            site::LABEL_GROSS_WORLDWIDE => record.box_office_worldwide = value.clone(),
            _ => {}
        }
    }
}

fn fill_slots(slots: &mut [String], values: Vec<String>) {
    for (slot, value) in slots.iter_mut().zip(values) {
        *slot = value;
    }
}

fn na() -> String {
    NOT_AVAILABLE.to_string()
}

fn zero() -> String {
    ZERO_COUNT.to_string()
}
