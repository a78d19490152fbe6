//! Scrape Amazon product listings and product details.
//!
//! `ProductLinks` can collect product detail-page links from a
//! search-results page and `ProductRecord` can extract the
//! name, price, rating and seller of a single product page.
//! `ResultTable` accumulates records and writes them out as CSV.
//!
//! Feature Flags:
//! - `serde_io`: Enables serde support for the structs. (default)

mod export;
mod product_details;
mod search;
pub mod selectors;

use eyre::{bail, eyre, Result};
pub use export::{ResultTable, CSV_HEADER};
use header::{HeaderMap, HeaderValue};
pub use product_details::{
    ProductRecord, PRICE_SENTINEL, RATING_SENTINEL, SELLER_SENTINEL, TITLE_SENTINEL,
};
use reqwest::header;
pub use search::ProductLinks;
pub use url::Url;

/// Origin prefixed to relative product links.
pub const BASE_URL: &str = "https://www.amazon.in";

/// Search-results page the orchestrator binary scrapes.
pub const SEARCH_URL: &str =
    "https://www.amazon.in/s?rh=n%3A6612025031&fs=true&ref=lp_6612025031_sar";

/// Path fragment that marks an anchor as a product detail page.
pub(crate) const PRODUCT_PATH_MARKER: &str = "/dp/";

/// Builds the default headers for the client.
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/80.0.3987.162 Safari/537.36",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US, en;q=0.5"),
    );
    headers
}

/// Rejects URLs that do not point at an Amazon storefront.
pub(crate) fn ensure_supported_domain(url: &Url) -> Result<()> {
    if !url
        .domain()
        .ok_or_else(|| eyre!("Domain name invalid."))?
        .contains("amazon.")
    {
        bail!("Only amazon storefront URLs are supported");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_domain_guard() {
        let amazon = Url::parse("https://www.amazon.in/dp/B0ABC123").unwrap();
        assert!(ensure_supported_domain(&amazon).is_ok());

        let elsewhere = Url::parse("https://example.com/dp/B0ABC123").unwrap();
        assert!(ensure_supported_domain(&elsewhere).is_err());
    }
}
