//! Browser-session seam for cinecrawl.
//!
//! The scraper core never talks to a concrete driver. It sees two traits:
//! - [`Page`]: one exclusively-owned browser page — navigate, locate
//!   elements, timed waits, close.
//! - [`PageElement`]: a located element — read text/markup/properties,
//!   click, scroll into view, scoped sub-queries.
//!
//! [`WebDriverPage`] is the production implementation over a WebDriver
//! endpoint (fantoccini), provisioned with the Chrome arguments and the
//! fixed page-load ceiling the target site is scraped with. Tests implement
//! the traits directly with scripted pages instead.

pub mod error;
pub mod page;
pub mod selector;
pub mod webdriver;

pub use error::{DriverError, DriverResult};
pub use page::{Page, PageElement};
pub use selector::Selector;
pub use webdriver::{DEFAULT_USER_AGENT, WebDriverConfig, WebDriverPage};
