use std::time::Duration;

use async_trait::async_trait;

use crate::error::DriverResult;
use crate::selector::Selector;

/// One exclusively-owned browser page, driven strictly one step at a time.
///
/// The only suspension points in the whole scraper are the timed waits
/// declared here; there is no parallel navigation and no retry.
#[async_trait]
pub trait Page: Send + Sync {
    /// Navigate to `url`. The page-load ceiling is a session-level setting
    /// of the implementation, not a per-call argument.
    async fn goto(&self, url: &str) -> DriverResult<()>;

    /// Locate the first element matching `selector`.
    async fn find(&self, selector: Selector) -> DriverResult<Box<dyn PageElement>>;

    /// Locate every element matching `selector`, in document order.
    /// An empty result is not an error.
    async fn find_all(&self, selector: Selector) -> DriverResult<Vec<Box<dyn PageElement>>>;

    /// Block until at least one element matches `selector`, or time out.
    async fn wait_for(&self, selector: Selector, timeout: Duration) -> DriverResult<()>;

    /// Block until the first element matching `selector` is visible and
    /// enabled, or time out.
    async fn wait_clickable(&self, selector: Selector, timeout: Duration) -> DriverResult<()>;

    /// Release the underlying browser session.
    async fn close(&self) -> DriverResult<()>;
}

/// A located element. Handles stay valid only while the page they were
/// found on is still loaded.
#[async_trait]
pub trait PageElement: Send + Sync {
    /// The element's inner markup, exactly as the site serves it.
    async fn inner_html(&self) -> DriverResult<String>;

    /// The element's rendered text.
    async fn text(&self) -> DriverResult<String>;

    /// A live DOM property. `prop("href")` on an anchor resolves to an
    /// absolute URL, unlike the raw attribute.
    async fn prop(&self, name: &str) -> DriverResult<Option<String>>;

    async fn click(&self) -> DriverResult<()>;

    async fn scroll_into_view(&self) -> DriverResult<()>;

    /// First descendant matching `selector`.
    async fn find(&self, selector: Selector) -> DriverResult<Box<dyn PageElement>>;

    /// Every descendant matching `selector`, in document order.
    async fn find_all(&self, selector: Selector) -> DriverResult<Vec<Box<dyn PageElement>>>;
}
