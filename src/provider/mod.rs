//! Search provider abstraction.

mod duckduckgo;

pub use duckduckgo::DuckDuckGo;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{ImageSize, Result, SearchQuery};

/// A loosely-typed web result record as the provider returns it.
///
/// Every field is optional; missing keys are tolerated here and mapped to
/// placeholders at the client boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    /// Result title.
    #[serde(default)]
    pub title: Option<String>,
    /// Result snippet.
    #[serde(default)]
    pub body: Option<String>,
    /// Result link.
    #[serde(default)]
    pub href: Option<String>,
}

/// A loosely-typed image record as the provider returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawImageRecord {
    /// Image title.
    #[serde(default)]
    pub title: Option<String>,
    /// Full-size image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Page the image was found on.
    #[serde(default)]
    pub url: Option<String>,
    /// Image height in pixels.
    #[serde(default)]
    pub height: Option<u32>,
    /// Image width in pixels.
    #[serde(default)]
    pub width: Option<u32>,
    /// Site the image came from.
    #[serde(default)]
    pub source: Option<String>,
}

/// Trait for search providers.
///
/// Implementations issue one outbound request per call and return records in
/// provider relevance order, untruncated. Ranking, truncation, and field
/// normalization are the client's job.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider display name.
    fn name(&self) -> &str;

    /// Performs a web search and returns raw result records.
    async fn text_search(&self, query: &SearchQuery) -> Result<Vec<RawRecord>>;

    /// Performs an image search, optionally filtered by size.
    async fn image_search(
        &self,
        query: &SearchQuery,
        size: Option<ImageSize>,
    ) -> Result<Vec<RawImageRecord>>;
}
