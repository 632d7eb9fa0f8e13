//! Scripted in-memory pages for driving the collector and extractor in
//! tests without a browser.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cinecrawl_browser::{DriverError, DriverResult, Page, PageElement, Selector};

use crate::site;

pub(crate) const DETAIL_URL: &str = "https://movies.example/title/tt0001/";
pub(crate) const USER_REVIEWS_URL: &str = "https://movies.example/title/tt0001/reviews/";
pub(crate) const CRITIC_REVIEWS_URL: &str = "https://movies.example/title/tt0001/criticreviews/";

/// Which elements each selector resolves to, in document order.
pub(crate) type MockDom = HashMap<Selector, Vec<MockElement>>;

#[derive(Debug, Clone, Default)]
pub(crate) struct MockElement {
    pub html: String,
    pub text: String,
    pub props: HashMap<&'static str, String>,
    pub children: MockDom,
}

impl MockElement {
    /// An element whose inner markup is `markup`.
    pub fn markup(markup: &str) -> Self {
        Self {
            html: markup.to_string(),
            ..Self::default()
        }
    }

    /// An element whose rendered text is `text`.
    pub fn rendered(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    /// An anchor resolving to `href`.
    pub fn link(href: &str) -> Self {
        let mut element = Self::default();
        element.props.insert("href", href.to_string());
        element
    }

    pub fn with_child(mut self, selector: Selector, child: MockElement) -> Self {
        self.children.entry(selector).or_default().push(child);
        self
    }
}

/// A scripted browser: a map of URL to a sequence of DOM states. Clicking
/// any element advances the current page to its next state, which is how
/// tests model the listing's "load more" behavior.
pub(crate) struct MockPage {
    pages: HashMap<String, Vec<MockDom>>,
    position: Arc<Mutex<Position>>,
    pub visited: Mutex<Vec<String>>,
    closed: Arc<Mutex<bool>>,
}

#[derive(Default)]
struct Position {
    url: String,
    state: usize,
}

impl MockPage {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            position: Arc::new(Mutex::new(Position::default())),
            visited: Mutex::new(Vec::new()),
            closed: Arc::new(Mutex::new(false)),
        }
    }

    /// A handle on the closed flag that survives moving the page into a
    /// crawler.
    pub fn closed_handle(&self) -> Arc<Mutex<bool>> {
        Arc::clone(&self.closed)
    }

    pub fn with_page(mut self, url: &str, dom: MockDom) -> Self {
        self.pages.insert(url.to_string(), vec![dom]);
        self
    }

    /// A page that steps through `states`, one click at a time.
    pub fn with_staged_page(mut self, url: &str, states: Vec<MockDom>) -> Self {
        self.pages.insert(url.to_string(), states);
        self
    }

    fn lookup(&self, selector: Selector) -> Vec<MockElement> {
        let position = self.position.lock().unwrap();
        self.pages
            .get(&position.url)
            .and_then(|states| states.get(position.state))
            .and_then(|dom| dom.get(&selector))
            .cloned()
            .unwrap_or_default()
    }

    fn handle(&self, element: MockElement) -> Box<dyn PageElement> {
        Box::new(MockHandle {
            element,
            position: Arc::clone(&self.position),
        })
    }
}

#[async_trait]
impl Page for MockPage {
    async fn goto(&self, url: &str) -> DriverResult<()> {
        self.visited.lock().unwrap().push(url.to_string());
        let mut position = self.position.lock().unwrap();
        position.url = url.to_string();
        position.state = 0;
        Ok(())
    }

    async fn find(&self, selector: Selector) -> DriverResult<Box<dyn PageElement>> {
        self.lookup(selector)
            .into_iter()
            .next()
            .map(|element| self.handle(element))
            .ok_or_else(|| DriverError::NotFound(selector.to_string()))
    }

    async fn find_all(&self, selector: Selector) -> DriverResult<Vec<Box<dyn PageElement>>> {
        Ok(self
            .lookup(selector)
            .into_iter()
            .map(|element| self.handle(element))
            .collect())
    }

    async fn wait_for(&self, selector: Selector, timeout: Duration) -> DriverResult<()> {
        if self.lookup(selector).is_empty() {
            Err(DriverError::Timeout {
                timeout,
                selector: selector.to_string(),
            })
        } else {
            Ok(())
        }
    }

    async fn wait_clickable(&self, selector: Selector, timeout: Duration) -> DriverResult<()> {
        self.wait_for(selector, timeout).await
    }

    async fn close(&self) -> DriverResult<()> {
        *self.closed.lock().unwrap() = true;
        Ok(())
    }
}

struct MockHandle {
    element: MockElement,
    position: Arc<Mutex<Position>>,
}

impl MockHandle {
    fn child_handle(&self, element: MockElement) -> Box<dyn PageElement> {
        Box::new(MockHandle {
            element,
            position: Arc::clone(&self.position),
        })
    }
}

#[async_trait]
impl PageElement for MockHandle {
    async fn inner_html(&self) -> DriverResult<String> {
        Ok(self.element.html.clone())
    }

    async fn text(&self) -> DriverResult<String> {
        Ok(self.element.text.clone())
    }

    async fn prop(&self, name: &str) -> DriverResult<Option<String>> {
        Ok(self.element.props.get(name).cloned())
    }

    async fn click(&self) -> DriverResult<()> {
        self.position.lock().unwrap().state += 1;
        Ok(())
    }

    async fn scroll_into_view(&self) -> DriverResult<()> {
        Ok(())
    }

    async fn find(&self, selector: Selector) -> DriverResult<Box<dyn PageElement>> {
        self.element
            .children
            .get(&selector)
            .and_then(|children| children.first().cloned())
            .map(|element| self.child_handle(element))
            .ok_or_else(|| DriverError::NotFound(selector.to_string()))
    }

    async fn find_all(&self, selector: Selector) -> DriverResult<Vec<Box<dyn PageElement>>> {
        Ok(self
            .element
            .children
            .get(&selector)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|element| self.child_handle(element))
            .collect())
    }
}

// ── Sample pages ─────────────────────────────────────────────────────

fn box_office_item(label: &str, value: &str) -> MockElement {
    MockElement::default()
        .with_child(site::BOX_OFFICE_LABEL, MockElement::markup(label))
        .with_child(site::BOX_OFFICE_VALUE, MockElement::markup(value))
}

fn review_card(heading: &str, spoiler: bool) -> MockElement {
    let mut card =
        MockElement::default().with_child(site::REVIEW_HEADING, MockElement::markup(heading));
    if spoiler {
        card = card.with_child(site::SPOILER_BUTTON, MockElement::default());
    }
    card
}

fn critic_item(score: &str, name: &str, text: &str) -> MockElement {
    MockElement::default()
        .with_child(site::CRITIC_SCORE, MockElement::markup(score))
        .with_child(site::CRITIC_NAME, MockElement::markup(name))
        .with_child(site::CRITIC_TEXT, MockElement::markup(text))
}

/// A detail page with every field present, including a duplicated cast
/// entry and the "Stars" section label the extractor must drop.
pub(crate) fn sample_detail_dom() -> MockDom {
    let mut dom = MockDom::new();
    dom.insert(site::HEADING, vec![MockElement::markup("Inception")]);
    dom.insert(site::TITLE, vec![MockElement::markup("<b>Inception</b>")]);
    dom.insert(
        site::PRODUCTION_COMPANIES,
        vec![
            MockElement::rendered("Warner Bros."),
            MockElement::rendered("Syncopy"),
        ],
    );
    dom.insert(site::YEAR, vec![MockElement::markup("2010")]);
    dom.insert(
        site::GENRES,
        vec![
            MockElement::markup("Action"),
            MockElement::markup("Sci-Fi"),
        ],
    );
    dom.insert(
        site::DIRECTOR,
        vec![MockElement::markup("Christopher Nolan")],
    );
    dom.insert(
        site::WRITERS,
        vec![MockElement::markup("Christopher Nolan")],
    );
    dom.insert(
        site::CAST,
        vec![
            MockElement::markup("Stars"),
            MockElement::markup("Leonardo DiCaprio"),
            MockElement::markup("Elliot Page"),
            MockElement::markup("Leonardo DiCaprio"),
        ],
    );
    dom.insert(site::METASCORE, vec![MockElement::markup("74")]);
    dom.insert(
        site::SYNOPSIS,
        vec![MockElement::markup(
            "A thief enters dreams to plant an idea.",
        )],
    );
    dom.insert(site::RUNTIME, vec![MockElement::markup("2h 28m")]);
    dom.insert(site::IMDB_SCORE, vec![MockElement::markup("8.8")]);
    dom.insert(site::USER_REVIEWS_COUNT, vec![MockElement::markup("2.1K")]);
    dom.insert(site::CRITIC_REVIEWS_COUNT, vec![MockElement::markup("480")]);
    dom.insert(
        site::BOX_OFFICE_SECTION,
        vec![
            MockElement::default()
                .with_child(
                    site::BOX_OFFICE_ITEM,
                    box_office_item(site::LABEL_BUDGET, "$160,000,000"),
                )
                .with_child(
                    site::BOX_OFFICE_ITEM,
                    box_office_item(site::LABEL_OPENING_WEEKEND, "$62,785,337"),
                )
                .with_child(
                    site::BOX_OFFICE_ITEM,
                    box_office_item(site::LABEL_GROSS_WORLDWIDE, "$839,030,630"),
                ),
        ],
    );
    dom.insert(
        site::KEYWORDS,
        vec![
            MockElement::markup("dream"),
            MockElement::markup("subconscious"),
        ],
    );
    dom.insert(
        site::USER_REVIEWS_LINK,
        vec![MockElement::link(USER_REVIEWS_URL)],
    );
    dom.insert(
        site::CRITIC_REVIEWS_LINK,
        vec![MockElement::link(CRITIC_REVIEWS_URL)],
    );
    dom
}

/// Four user reviews: one spoiler-collapsed (excluded) and three clean.
pub(crate) fn sample_user_reviews_dom() -> MockDom {
    let mut dom = MockDom::new();
    dom.insert(
        site::REVIEW_CARD,
        vec![
            review_card("Hidden twist ending", true),
            review_card("A modern classic", false),
            review_card("Dense but rewarding", false),
            review_card("Stunning visuals", false),
        ],
    );
    dom
}

/// Three critic reviews; only the first two fit the record.
pub(crate) fn sample_critic_reviews_dom() -> MockDom {
    let mut dom = MockDom::new();
    dom.insert(
        site::CRITIC_REVIEW_ITEM,
        vec![
            critic_item("90", "The Gazette", "Bold and intricate."),
            critic_item("80", "Daily Screen", "Ambitious to a fault."),
            critic_item("70", "Cinema Weekly", "Overlong."),
        ],
    );
    dom
}
