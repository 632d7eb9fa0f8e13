//! The site contract: the fixed listing URL, every structural selector the
//! scraper relies on, and the fixed wait durations.
//!
//! Nothing in this module is a run-time knob. The scrape targets one site,
//! the selectors are part of the extraction contract, and the timeouts are
//! constants by design.

use std::time::Duration;

use cinecrawl_browser::Selector;

/// Feature films, a two-day release window, US region, English language.
pub const LISTING_URL: &str = "https://www.imdb.com/search/title/?title_type=feature&release_date=2024-01-01,2024-01-02&countries=US&languages=en";

// ── Listing page ─────────────────────────────────────────────────────

pub const SEE_MORE_BUTTON: Selector = Selector::XPath(
    r#"//span[contains(@class, "ipc-see-more")]/button[contains(@class, "ipc-see-more__button")]"#,
);
pub const RESULT_LINK: Selector = Selector::Css("a.ipc-title-link-wrapper");

// ── Detail page ──────────────────────────────────────────────────────

pub const HEADING: Selector = Selector::Css("h1");
pub const TITLE: Selector = Selector::Css("span.hero__primary-text");
pub const PRODUCTION_COMPANIES: Selector = Selector::XPath(
    r#"//li[@data-testid="title-details-companies"]//div[@class="ipc-metadata-list-item__content-container"]//ul/li/a"#,
);
/// The sixth inherit-color link on the hero block is the release year.
pub const YEAR: Selector =
    Selector::XPath(r#"(//a[@class="ipc-link ipc-link--baseAlt ipc-link--inherit-color"])[6]"#);
pub const GENRES: Selector = Selector::Css("div.ipc-chip-list__scroller span.ipc-chip__text");
pub const DIRECTOR: Selector =
    Selector::XPath(r#"//li[@data-testid="title-pc-principal-credit"][1]//a"#);
pub const WRITERS: Selector =
    Selector::XPath(r#"//li[@data-testid="title-pc-principal-credit"][2]//a"#);
pub const CAST: Selector =
    Selector::XPath(r#"//li[@data-testid="title-pc-principal-credit"][3]//a"#);
pub const METASCORE: Selector = Selector::Css("span.sc-b0901df4-0");
pub const SYNOPSIS: Selector = Selector::Css(r#"span[data-testid="plot-xl"]"#);
pub const RUNTIME: Selector = Selector::Css(
    r#"li[data-testid="title-techspec_runtime"] .ipc-metadata-list-item__content-container"#,
);
pub const IMDB_SCORE: Selector = Selector::Css(
    r#"div[data-testid="hero-rating-bar__aggregate-rating__score"] span.sc-d541859f-1"#,
);
pub const USER_REVIEWS_COUNT: Selector =
    Selector::Css(r#"a.ipc-link--baseAlt[href*="/reviews/"] span.score"#);
pub const CRITIC_REVIEWS_COUNT: Selector =
    Selector::Css(r#"a.ipc-link--baseAlt[href*="/externalreviews/"] span.score"#);
pub const USER_REVIEWS_LINK: Selector = Selector::Css(r#"a.isReview[href*="/reviews/"]"#);
pub const CRITIC_REVIEWS_LINK: Selector = Selector::Css(r#"a.isReview[href*="/criticreviews/"]"#);
pub const KEYWORDS: Selector =
    Selector::Css(r#"div[data-testid="storyline-plot-keywords"] a.ipc-chip__text"#);

/// Section heading the site exposes as a fake cast entry.
pub const CAST_SECTION_LABEL: &str = "Stars";

// ── Box office ───────────────────────────────────────────────────────

pub const BOX_OFFICE_SECTION: Selector = Selector::Css(r#"section[data-testid="BoxOffice"]"#);
pub const BOX_OFFICE_ITEM: Selector = Selector::Css(r#"li[data-testid^="title-boxoffice-"]"#);
pub const BOX_OFFICE_LABEL: Selector = Selector::Css("span.ipc-metadata-list-item__label");
pub const BOX_OFFICE_VALUE: Selector =
    Selector::Css("span.ipc-metadata-list-item__list-content-item");

pub const LABEL_BUDGET: &str = "Budget";
pub const LABEL_OPENING_WEEKEND: &str = "Opening weekend US & Canada";
pub const LABEL_GROSS_WORLDWIDE: &str = "Gross worldwide";

// ── Review pages ─────────────────────────────────────────────────────

pub const REVIEW_CARD: Selector = Selector::Css(r#"div[data-testid="review-card-parent"]"#);
pub const SPOILER_BUTTON: Selector =
    Selector::XPath(r#".//button[contains(@aria-label, "Expand Spoiler")]"#);
pub const REVIEW_HEADING: Selector = Selector::Css("h3.ipc-title__text");
pub const CRITIC_REVIEW_ITEM: Selector = Selector::Css(r#"li[data-testid="list-item"]"#);
pub const CRITIC_SCORE: Selector = Selector::Css("div.sc-d8486f96-2");
pub const CRITIC_NAME: Selector = Selector::Css("span.sc-d8486f96-5");
pub const CRITIC_TEXT: Selector = Selector::Css("div.sc-d8486f96-3.blaUqS + div");

// ── Fixed waits ──────────────────────────────────────────────────────

/// Navigation ceiling, applied through WebDriver session capabilities.
pub const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(15);
pub const PRESENCE_TIMEOUT: Duration = Duration::from_secs(20);
pub const CLICKABLE_TIMEOUT: Duration = Duration::from_secs(30);
pub const POST_CLICK_DELAY: Duration = Duration::from_secs(5);
pub const BETWEEN_RECORDS_DELAY: Duration = Duration::from_secs(2);
