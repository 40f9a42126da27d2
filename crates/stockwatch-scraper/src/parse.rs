//! Extraction of product cards from cart listing pages.
//!
//! A listing page repeats one `div.card.cartitem` per product. The product
//! name is the card's first `h4`, and the stock line is its first
//! `p.card-text` (e.g. `库存：12`). Update the selectors below when the page
//! markup changes.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use stockwatch_core::Inventory;

static CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.card.cartitem").expect("valid card selector"));

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h4").expect("valid title selector"));

static STOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.card-text").expect("valid stock selector"));

/// Extracts a name to stock-count map from a listing page.
///
/// Cards without a title, without a stock line, or whose stock line holds no
/// digits are skipped. When two cards share a name, the later card wins.
#[must_use]
pub fn parse_cards(html: &str) -> Inventory {
    let document = Html::parse_document(html);
    let mut inventory = Inventory::new();

    for card in document.select(&CARD) {
        let Some(name) = first_text(card, &TITLE).filter(|n| !n.is_empty()) else {
            tracing::debug!("skipping card without a title");
            continue;
        };

        let Some(stock_text) = first_text(card, &STOCK) else {
            tracing::debug!(name = %name, "skipping card without a stock line");
            continue;
        };

        let Some(count) = parse_stock_count(&stock_text) else {
            tracing::debug!(name = %name, stock_text = %stock_text, "skipping card with no stock count");
            continue;
        };

        inventory.insert(name, count);
    }

    inventory
}

/// Text of the first element matching `selector` under `card`, with each
/// text node trimmed before joining.
fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().map(str::trim).collect::<String>())
}

/// Keeps every ASCII digit in `text` and parses the result.
///
/// `"库存：1 2"` yields 12. Returns `None` when there are no digits or the
/// digit run does not fit in a `u64`.
pub(crate) fn parse_stock_count(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
