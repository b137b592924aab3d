//! DuckDuckGo provider implementation.
//!
//! Web search goes through the server-rendered HTML endpoint; image search
//! uses the two-step token flow (fetch the search page for a `vqd` token,
//! then query the JSON image endpoint with it).

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Deserialize;
use url::Url;

use super::{Provider, RawImageRecord, RawRecord};
use crate::{ImageSize, Result, SearchError, SearchQuery};

const DEFAULT_BASE_URL: &str = "https://duckduckgo.com";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; duckterm/0.1)";

/// DuckDuckGo search provider.
pub struct DuckDuckGo {
    client: Client,
    base_url: String,
}

impl DuckDuckGo {
    /// Creates a new DuckDuckGo provider.
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the base URL. Used to point the provider at a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Creates a provider with a custom reqwest client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn html_search_url(&self, query: &SearchQuery) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?.join("html/")?;
        url.query_pairs_mut()
            .append_pair("q", &query.text)
            .append_pair("kl", &query.region)
            .append_pair("kp", query.safe_search.as_provider_param());
        Ok(url)
    }

    fn token_url(&self, query: &SearchQuery) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut()
            .append_pair("q", &query.text)
            .append_pair("iax", "images")
            .append_pair("ia", "images");
        Ok(url)
    }

    fn image_search_url(
        &self,
        query: &SearchQuery,
        vqd: &str,
        size: Option<ImageSize>,
    ) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?.join("i.js")?;
        let filter = size
            .map(|s| format!("size:{}", s.as_provider_param()))
            .unwrap_or_default();
        url.query_pairs_mut()
            .append_pair("q", &query.text)
            .append_pair("o", "json")
            .append_pair("l", &query.region)
            .append_pair("p", query.safe_search.as_provider_param())
            .append_pair("vqd", vqd)
            .append_pair("f", &filter);
        Ok(url)
    }

    fn parse_html_results(&self, html: &str) -> Result<Vec<RawRecord>> {
        let document = Html::parse_document(html);
        let result_selector = Selector::parse(".result")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;
        let title_selector = Selector::parse(".result__title a")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;
        let snippet_selector = Selector::parse(".result__snippet")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;

        let mut records = Vec::new();

        for element in document.select(&result_selector) {
            let title_elem = element.select(&title_selector).next();
            let snippet_elem = element.select(&snippet_selector).next();

            let title = title_elem.map(|e| e.text().collect::<String>().trim().to_string());
            let href = title_elem
                .and_then(|e| e.value().attr("href"))
                .map(|href| {
                    if href.starts_with("//duckduckgo.com/l/") {
                        extract_redirect_url(href).unwrap_or_else(|| href.to_string())
                    } else {
                        href.to_string()
                    }
                });
            let body = snippet_elem.map(|e| e.text().collect::<String>().trim().to_string());

            // Skip decoration blocks that carry no result at all.
            if title.is_none() && href.is_none() && body.is_none() {
                continue;
            }

            records.push(RawRecord { title, body, href });
        }

        Ok(records)
    }
}

impl Default for DuckDuckGo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for DuckDuckGo {
    fn name(&self) -> &str {
        "DuckDuckGo"
    }

    async fn text_search(&self, query: &SearchQuery) -> Result<Vec<RawRecord>> {
        let url = self.html_search_url(query)?;
        let response = self.client.get(url).send().await?;
        let html = response.error_for_status()?.text().await?;
        self.parse_html_results(&html)
    }

    async fn image_search(
        &self,
        query: &SearchQuery,
        size: Option<ImageSize>,
    ) -> Result<Vec<RawImageRecord>> {
        let token_url = self.token_url(query)?;
        let page = self
            .client
            .get(token_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let vqd = extract_vqd(&page)
            .ok_or_else(|| SearchError::Provider("missing vqd token in search page".into()))?;

        let url = self.image_search_url(query, &vqd, size)?;
        let payload: ImagePayload = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(payload.results)
    }
}

/// JSON envelope returned by the image endpoint.
#[derive(Debug, Deserialize)]
struct ImagePayload {
    #[serde(default)]
    results: Vec<RawImageRecord>,
}

/// Extracts the `vqd` request token from a search page.
fn extract_vqd(page: &str) -> Option<String> {
    let re = Regex::new(r#"vqd=["']?([\d-]+)"#).ok()?;
    re.captures(page)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Unwraps a `duckduckgo.com/l/?uddg=` redirect link to its target URL.
fn extract_redirect_url(url: &str) -> Option<String> {
    let url = url.trim_start_matches("//duckduckgo.com/l/?uddg=");
    let decoded = urlencoding::decode(url).ok()?;
    let end = decoded.find('&').unwrap_or(decoded.len());
    Some(decoded[..end].to_string())
}
