use std::collections::HashSet;
use std::time::Duration;

use eyre::Result;
use reqwest::Client;
use scraper::Html;
use tracing::debug;
use url::Url;

use crate::selectors;

#[cfg_attr(feature = "serde_io", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default)]
/// Product detail-page links found on a search-results page.
///
/// Use the `ProductLinks::fetch` method to download and scan a search
/// page, or `ProductLinks::collect` when the markup is already parsed.
pub struct ProductLinks {
    /// URL of the search page the links came from, when fetched.
    pub source_url: Option<String>,
    /// Absolute product URLs, deduplicated by exact string equality.
    pub links: HashSet<String>,
}

impl ProductLinks {
    /// Collects every unique product link on a parsed search page.
    ///
    /// Anchors outside the product-card signature and hrefs without the
    /// product path marker are ignored; relative hrefs are absolutized
    /// against the site origin. A page with no matches yields an empty
    /// set, never an error.
    pub fn collect(document: &Html) -> Self {
        let links = document
            .select(&selectors::PRODUCT_CARD_LINK)
            .filter_map(|anchor| anchor.value().attr("href"))
            .filter(|href| href.contains(crate::PRODUCT_PATH_MARKER))
            .map(|href| {
                if href.starts_with('/') {
                    String::from(crate::BASE_URL) + href
                } else {
                    href.into()
                }
            })
            .collect();

        ProductLinks {
            source_url: None,
            links,
        }
    }

    /// Downloads a search-results page and collects its product links.
    pub async fn fetch(url: Url) -> Result<Self> {
        crate::ensure_supported_domain(&url)?;

        let client = Client::builder()
            .default_headers(crate::build_headers())
            .timeout(Duration::from_secs(30))
            .build()?;

        debug!("fetching search page {url}");
        let webpage = client.get(url.to_owned()).send().await?.error_for_status()?;
        let body = webpage.text().await?;
        let document = Html::parse_document(&body);

        let mut collected = Self::collect(&document);
        collected.source_url = Some(url.into());
        Ok(collected)
    }

    /// Number of unique links collected.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the page yielded no product links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl IntoIterator for ProductLinks {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_page(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn page_without_product_anchors_yields_empty_set() {
        let document = search_page(r#"<a href="/gp/help">Help</a><p>No results</p>"#);
        let collected = ProductLinks::collect(&document);
        assert!(collected.is_empty());
    }

    #[test]
    fn relative_links_are_absolutized() {
        let document = search_page(
            r#"<a class="a-link-normal s-no-outline" href="/dp/B0ABC123?ref=sr_1">x</a>"#,
        );
        let collected = ProductLinks::collect(&document);
        assert!(collected
            .links
            .contains("https://www.amazon.in/dp/B0ABC123?ref=sr_1"));
    }

    #[test]
    fn identical_hrefs_collapse_to_one_entry() {
        let document = search_page(
            r#"<a class="a-link-normal s-no-outline" href="/dp/B0ABC123?ref=x">img</a>
               <a class="a-link-normal s-no-outline" href="/dp/B0ABC123?ref=x">title</a>
               <a class="a-link-normal s-no-outline" href="/dp/B0ABC123?ref=x">price</a>"#,
        );
        assert_eq!(ProductLinks::collect(&document).len(), 1);
    }

    #[test]
    fn dedup_is_by_exact_string_not_product_id() {
        let document = search_page(
            r#"<a class="a-link-normal s-no-outline" href="/dp/B0ABC123?ref=x">a</a>
               <a class="a-link-normal s-no-outline" href="/dp/B0ABC123?ref=y">b</a>"#,
        );
        assert_eq!(ProductLinks::collect(&document).len(), 2);
    }

    #[test]
    fn anchors_without_the_product_marker_are_skipped() {
        let document = search_page(
            r#"<a class="a-link-normal s-no-outline" href="/gp/bestsellers">charts</a>
               <a class="a-link-normal s-no-outline" href="/dp/B0XYZ789">product</a>"#,
        );
        let collected = ProductLinks::collect(&document);
        assert_eq!(collected.len(), 1);
        assert!(collected.links.contains("https://www.amazon.in/dp/B0XYZ789"));
    }

    #[test]
    fn anchors_outside_the_card_signature_are_skipped() {
        let document = search_page(r#"<a class="a-link-normal" href="/dp/B0XYZ789">p</a>"#);
        assert!(ProductLinks::collect(&document).is_empty());
    }

    #[test]
    fn absolute_hrefs_are_kept_as_is() {
        let document = search_page(
            r#"<a class="a-link-normal s-no-outline"
                  href="https://www.amazon.in/dp/B0DEF456">p</a>"#,
        );
        let collected = ProductLinks::collect(&document);
        assert!(collected.links.contains("https://www.amazon.in/dp/B0DEF456"));
    }
}
