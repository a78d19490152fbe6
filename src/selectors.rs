//! CSS selectors for the Amazon pages this crate parses.
//!
//! Kept in one place so a markup change on the site is a one-file fix.

use scraper::Selector;
use std::sync::LazyLock;

/// Product-card link on a search-results page.
pub static PRODUCT_CARD_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.a-link-normal.s-no-outline").unwrap());

/// Product title on a detail page.
pub static PRODUCT_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#productTitle").unwrap());

/// Regular price block.
pub static PRICE_OUR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#priceblock_ourprice").unwrap());

/// Deal price block.
pub static PRICE_DEAL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#priceblock_dealprice").unwrap());

/// Sale price block.
pub static PRICE_SALE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#priceblock_saleprice").unwrap());

/// Whole part of a split price.
pub static PRICE_WHOLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".a-price-whole").unwrap());

/// Fractional part of a split price.
pub static PRICE_FRACTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".a-price-fraction").unwrap());

/// Star-rating text, e.g. "4.2 out of 5 stars".
pub static RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-icon-alt").unwrap());

/// Seller profile link.
pub static SELLER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a#sellerProfileTriggerId").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_compile() {
        let _ = &*PRODUCT_CARD_LINK;
        let _ = &*PRODUCT_TITLE;
        let _ = &*PRICE_OUR;
        let _ = &*PRICE_DEAL;
        let _ = &*PRICE_SALE;
        let _ = &*PRICE_WHOLE;
        let _ = &*PRICE_FRACTION;
        let _ = &*RATING;
        let _ = &*SELLER;
    }
}
