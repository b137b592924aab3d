//! Search result types and placeholder substitution.

use serde::{Deserialize, Serialize};

/// Placeholder used when the provider omits a result title.
pub const NO_TITLE: &str = "No title";
/// Placeholder used when the provider omits a result snippet.
pub const NO_BODY: &str = "No description available";
/// Placeholder used when the provider omits a result URL.
pub const NO_URL: &str = "No URL available";

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => placeholder.to_string(),
    }
}

/// A single web search result, in provider relevance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title.
    pub title: String,
    /// Result description/snippet.
    pub body: String,
    /// Result URL.
    pub url: String,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(title: impl Into<String>, body: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            url: url.into(),
        }
    }

    /// Maps a loosely-typed provider record into a result, substituting a
    /// fixed placeholder for each missing or empty field.
    pub fn from_parts(title: Option<String>, body: Option<String>, url: Option<String>) -> Self {
        Self {
            title: or_placeholder(title, NO_TITLE),
            body: or_placeholder(body, NO_BODY),
            url: or_placeholder(url, NO_URL),
        }
    }
}

/// A single image search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResult {
    /// Image title.
    pub title: String,
    /// Full-size image URL.
    pub image_url: String,
    /// Thumbnail URL.
    pub thumbnail_url: String,
    /// URL of the page the image was found on.
    pub source_url: String,
    /// Image height in pixels.
    pub height: u32,
    /// Image width in pixels.
    pub width: u32,
    /// Site the image came from.
    pub source_site: String,
}

impl ImageResult {
    /// Maps a loosely-typed provider record into an image result.
    ///
    /// Missing string fields get the same placeholder treatment as web
    /// results; missing dimensions default to 0.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        title: Option<String>,
        image_url: Option<String>,
        thumbnail_url: Option<String>,
        source_url: Option<String>,
        height: Option<u32>,
        width: Option<u32>,
        source_site: Option<String>,
    ) -> Self {
        Self {
            title: or_placeholder(title, NO_TITLE),
            image_url: or_placeholder(image_url, NO_URL),
            thumbnail_url: or_placeholder(thumbnail_url, NO_URL),
            source_url: or_placeholder(source_url, NO_URL),
            height: height.unwrap_or(0),
            width: width.unwrap_or(0),
            source_site: or_placeholder(source_site, "Unknown source"),
        }
    }
}
