//! Listing expansion and harvest.

use cinecrawl_browser::{DriverResult, Page, PageElement};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::site;

/// Expand the paginated listing until the "load more" control stops
/// cooperating, then harvest every result link in document order.
///
/// "No more pages" and "the page broke" are indistinguishable here; either
/// way the listing is done growing. The worklist is not deduplicated.
pub async fn collect(page: &dyn Page) -> Vec<String> {
    loop {
        match expand_once(page).await {
            Ok(()) => debug!("listing expanded by one batch"),
            Err(err) => {
                info!("listing expansion stopped: {err}");
                break;
            }
        }
    }
    harvest(page).await
}

async fn expand_once(page: &dyn Page) -> DriverResult<()> {
    let button = page.find(site::SEE_MORE_BUTTON).await?;
    button.scroll_into_view().await?;
    page.wait_clickable(site::SEE_MORE_BUTTON, site::CLICKABLE_TIMEOUT)
        .await?;
    button.click().await?;
    debug!("clicked the load-more control");

    // Give the site a beat to fire its request before polling the DOM.
    sleep(site::POST_CLICK_DELAY).await;
    page.wait_for(site::RESULT_LINK, site::PRESENCE_TIMEOUT)
        .await
}

async fn harvest(page: &dyn Page) -> Vec<String> {
    let links = match page.find_all(site::RESULT_LINK).await {
        Ok(links) => links,
        Err(err) => {
            warn!("could not read result links: {err}");
            return Vec::new();
        }
    };

    let mut urls = Vec::new();
    for link in links {
        match link.prop("href").await {
            Ok(Some(href)) => urls.push(href),
            Ok(None) => {}
            Err(err) => warn!("could not read a result link target: {err}"),
        }
    }
    info!("harvested {} result links from the listing", urls.len());
    urls
}
