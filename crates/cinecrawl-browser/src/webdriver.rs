//! fantoccini-backed [`Page`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder};
use serde_json::{Value, json, map::Map};
use tokio::time::Instant;
use tracing::debug;

use crate::error::{DriverError, DriverResult};
use crate::page::{Page, PageElement};
use crate::selector::Selector;

/// User agent the target site is scraped with.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

const CLICKABLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Connection settings for an externally provisioned WebDriver endpoint.
///
/// These cover environment concerns only — which endpoint to attach to and
/// how the browser window is provisioned. Nothing here changes extraction
/// semantics.
#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    /// WebDriver endpoint, e.g. a running chromedriver.
    pub webdriver_url: String,
    pub headless: bool,
    pub user_agent: String,
    /// Session-wide navigation ceiling, applied through WebDriver
    /// capabilities.
    pub page_load_timeout: Duration,
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:4444".to_string(),
            headless: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_load_timeout: Duration::from_secs(15),
        }
    }
}

/// The production [`Page`]: one WebDriver session, visited serially.
pub struct WebDriverPage {
    client: Client,
}

impl WebDriverPage {
    /// Establish a session against `config.webdriver_url`.
    pub async fn connect(config: &WebDriverConfig) -> DriverResult<Self> {
        let client = ClientBuilder::native()
            .capabilities(build_capabilities(config))
            .connect(&config.webdriver_url)
            .await?;
        debug!("webdriver session established at {}", config.webdriver_url);
        Ok(Self { client })
    }

    fn wrap(&self, element: Element) -> Box<dyn PageElement> {
        Box::new(WebDriverElement {
            client: self.client.clone(),
            element,
        })
    }
}

fn build_capabilities(config: &WebDriverConfig) -> Map<String, Value> {
    let mut args = vec![
        format!("user-agent={}", config.user_agent),
        "--disable-gpu".to_string(),
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
    ];
    if config.headless {
        args.push("--headless=new".to_string());
    }

    let mut capabilities = Map::new();
    capabilities.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    capabilities.insert(
        "timeouts".to_string(),
        json!({ "pageLoad": config.page_load_timeout.as_millis() as u64 }),
    );
    capabilities
}

fn find_error(selector: Selector, err: CmdError) -> DriverError {
    if err.is_no_such_element() {
        DriverError::NotFound(selector.to_string())
    } else {
        DriverError::Command(err)
    }
}

fn wait_error(selector: Selector, timeout: Duration, err: CmdError) -> DriverError {
    match err {
        CmdError::WaitTimeout => DriverError::Timeout {
            timeout,
            selector: selector.to_string(),
        },
        other => DriverError::Command(other),
    }
}

#[async_trait]
impl Page for WebDriverPage {
    async fn goto(&self, url: &str) -> DriverResult<()> {
        self.client.goto(url).await?;
        Ok(())
    }

    async fn find(&self, selector: Selector) -> DriverResult<Box<dyn PageElement>> {
        let element = self
            .client
            .find(selector.locator())
            .await
            .map_err(|err| find_error(selector, err))?;
        Ok(self.wrap(element))
    }

    async fn find_all(&self, selector: Selector) -> DriverResult<Vec<Box<dyn PageElement>>> {
        let elements = self.client.find_all(selector.locator()).await?;
        Ok(elements.into_iter().map(|e| self.wrap(e)).collect())
    }

    async fn wait_for(&self, selector: Selector, timeout: Duration) -> DriverResult<()> {
        self.client
            .wait()
            .at_most(timeout)
            .for_element(selector.locator())
            .await
            .map(drop)
            .map_err(|err| wait_error(selector, timeout, err))
    }

    async fn wait_clickable(&self, selector: Selector, timeout: Duration) -> DriverResult<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Ok(element) = self.client.find(selector.locator()).await {
                let displayed = element.is_displayed().await.unwrap_or(false);
                let enabled = element.is_enabled().await.unwrap_or(false);
                if displayed && enabled {
                    return Ok(());
                }
            }
            if Instant::now() >= deadline {
                return Err(DriverError::Timeout {
                    timeout,
                    selector: selector.to_string(),
                });
            }
            tokio::time::sleep(CLICKABLE_POLL_INTERVAL).await;
        }
    }

    async fn close(&self) -> DriverResult<()> {
        self.client.clone().close().await?;
        Ok(())
    }
}

struct WebDriverElement {
    client: Client,
    element: Element,
}

impl WebDriverElement {
    fn wrap(&self, element: Element) -> Box<dyn PageElement> {
        Box::new(WebDriverElement {
            client: self.client.clone(),
            element,
        }) as Box<dyn PageElement>
    }
}

#[async_trait]
impl PageElement for WebDriverElement {
    async fn inner_html(&self) -> DriverResult<String> {
        Ok(self.element.html(true).await?)
    }

    async fn text(&self) -> DriverResult<String> {
        Ok(self.element.text().await?)
    }

    async fn prop(&self, name: &str) -> DriverResult<Option<String>> {
        Ok(self.element.prop(name).await?)
    }

    async fn click(&self) -> DriverResult<()> {
        self.element.click().await?;
        Ok(())
    }

    async fn scroll_into_view(&self) -> DriverResult<()> {
        let reference = serde_json::to_value(&self.element)?;
        self.client
            .execute(
                "arguments[0].scrollIntoView({block: 'center'});",
                vec![reference],
            )
            .await?;
        Ok(())
    }

    async fn find(&self, selector: Selector) -> DriverResult<Box<dyn PageElement>> {
        let element = self
            .element
            .find(selector.locator())
            .await
            .map_err(|err| find_error(selector, err))?;
        Ok(self.wrap(element))
    }

    async fn find_all(&self, selector: Selector) -> DriverResult<Vec<Box<dyn PageElement>>> {
        let elements = self.element.find_all(selector.locator()).await?;
        Ok(elements.into_iter().map(|e| self.wrap(e)).collect())
    }
}
