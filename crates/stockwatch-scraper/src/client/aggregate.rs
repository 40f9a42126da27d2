//! Multi-page inventory collection for `PageClient`.

use stockwatch_core::Inventory;

use crate::error::ScraperError;
use crate::parse::parse_cards;

use super::PageClient;

impl PageClient {
    /// Fetches every URL in order and merges the parsed cards into one
    /// inventory. A product listed on several pages keeps the count from the
    /// last page that lists it.
    ///
    /// **All-or-nothing semantics**: the first failing page aborts the whole
    /// collection and inventory parsed from earlier pages is discarded, since
    /// a partial snapshot would show the missing products as sold out.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Self::fetch_page`].
    pub async fn fetch_inventory(&self, urls: &[String]) -> Result<Inventory, ScraperError> {
        let mut total = Inventory::new();

        for url in urls {
            let body = self.fetch_page(url).await?;
            let part = parse_cards(&body);
            tracing::info!(url = %url, count = part.len(), "parsed listing page");
            total.extend(part);
        }

        Ok(total)
    }
}
