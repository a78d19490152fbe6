use crate::product_details::{first_match, trimmed_text, Step};
use crate::selectors;
use eyre::{bail, Result};
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Shown in place of a missing product name.
pub const TITLE_SENTINEL: &str = "Title not found";
/// Shown in place of a missing price.
pub const PRICE_SENTINEL: &str = "Price not found";
/// Shown in place of a missing rating.
pub const RATING_SENTINEL: &str = "Rating not found";
/// Shown in place of a missing seller name.
pub const SELLER_SENTINEL: &str = "Unknown Seller";

#[cfg_attr(feature = "serde_io", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Debug, Clone, PartialEq, Eq)]
/// The fields scraped from one Amazon product page.
///
/// Use the `ProductRecord::fetch` method to download and extract a
/// product page, or `ProductRecord::extract` when the markup is
/// already parsed. Fields stay `None` when no extraction strategy
/// matched; the `display_*` accessors render the sentinel strings the
/// exported table uses.
pub struct ProductRecord {
    /// Product name.
    pub name: Option<String>,
    /// Price as shown on the page, never parsed numeric.
    pub price: Option<String>,
    /// Rating in its textual form, e.g. "4.2 out of 5 stars".
    pub rating: Option<String>,
    /// Name of the primary seller.
    pub seller: Option<String>,
}

impl ProductRecord {
    /// Extracts a record from an already-parsed product page.
    ///
    /// Pure over the document; every field is best-effort and an
    /// unmatched field is `None`, never an error.
    pub fn extract(document: &Html) -> Self {
        ProductRecord {
            name: extract_name(document),
            price: extract_price(document),
            rating: extract_rating(document),
            seller: extract_seller(document),
        }
    }

    /// Fetches a product page from the given url and extracts its record.
    pub async fn fetch(url: Url) -> Result<Self> {
        crate::ensure_supported_domain(&url)?;

        let client = Client::builder()
            .default_headers(crate::build_headers())
            .timeout(Duration::from_secs(30))
            .build()?;

        debug!("fetching product page {url}");
        let webpage = client.get(url).send().await?.error_for_status()?;
        let body = webpage.text().await?;
        if is_robot_check(&body) {
            bail!("Served a robot-check interstitial instead of a product page");
        }
        let document = Html::parse_document(&body);

        Ok(Self::extract(&document))
    }

    /// Name, or its sentinel when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(TITLE_SENTINEL)
    }

    /// Price, or its sentinel when absent.
    pub fn display_price(&self) -> &str {
        self.price.as_deref().unwrap_or(PRICE_SENTINEL)
    }

    /// Rating, or its sentinel when absent.
    pub fn display_rating(&self) -> &str {
        self.rating.as_deref().unwrap_or(RATING_SENTINEL)
    }

    /// Seller name, or its sentinel when absent.
    pub fn display_seller(&self) -> &str {
        self.seller.as_deref().unwrap_or(SELLER_SENTINEL)
    }
}

fn extract_name(document: &Html) -> Option<String> {
    first_match(document, &[Step::text(&selectors::PRODUCT_TITLE)])
}

/// The three identifier-based price blocks are returned verbatim
/// (trimmed only, currency symbol and grouping kept); only the split
/// whole/fraction fallback is cleaned to a bare numeric string.
fn extract_price(document: &Html) -> Option<String> {
    first_match(
        document,
        &[
            Step::text(&selectors::PRICE_OUR),
            Step::text(&selectors::PRICE_DEAL),
            Step::text(&selectors::PRICE_SALE),
            Step::Document(split_price),
        ],
    )
}

fn extract_rating(document: &Html) -> Option<String> {
    first_match(document, &[Step::text(&selectors::RATING)])
}

fn extract_seller(document: &Html) -> Option<String> {
    first_match(document, &[Step::text(&selectors::SELLER)])
}

/// Captcha interstitial served in place of the product page.
fn is_robot_check(body: &str) -> bool {
    body.contains("Robot Check") || body.contains("api-services-support@amazon.com")
}

/// Price assembled from the separate whole and fraction nodes.
///
/// Both nodes must be present and non-blank or the step fails and the
/// chain falls through to the sentinel.
fn split_price(document: &Html) -> Option<String> {
    let whole = document
        .select(&selectors::PRICE_WHOLE)
        .next()
        .and_then(trimmed_text)?;
    let fraction = document
        .select(&selectors::PRICE_FRACTION)
        .next()
        .and_then(trimmed_text)?;
    Some(clean_price(&format!("{whole}.{fraction}")))
}

/// Strips everything but digits and decimal points, then drops leading
/// decimal points until at most one remains. When the concatenation
/// produces several points the last one is kept, so "12.99" + "." + "00"
/// becomes "1299.00".
fn clean_price(raw: &str) -> String {
    let mut price: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    while price.matches('.').count() > 1 {
        if let Some(idx) = price.find('.') {
            price.remove(idx);
        }
    }
    price
}
