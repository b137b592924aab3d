//! Search query representation.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Safe search level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    /// No filtering.
    Off,
    /// Moderate filtering.
    #[default]
    Moderate,
    /// Strict filtering.
    Strict,
}

impl SafeSearch {
    /// Returns the provider's `kp` parameter value for this level.
    pub fn as_provider_param(&self) -> &'static str {
        match self {
            SafeSearch::Off => "-1",
            SafeSearch::Moderate => "-2",
            SafeSearch::Strict => "1",
        }
    }
}

/// Image size filter for image searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
    Wallpaper,
}

impl ImageSize {
    /// Returns the provider's size filter token.
    pub fn as_provider_param(&self) -> &'static str {
        match self {
            ImageSize::Small => "Small",
            ImageSize::Medium => "Medium",
            ImageSize::Large => "Large",
            ImageSize::Wallpaper => "Wallpaper",
        }
    }
}

/// A search query with all parameters.
///
/// Constructed per invocation and discarded after use. An empty `text`
/// is a no-op at the client, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search terms.
    pub text: String,
    /// Maximum number of results to return.
    pub max_results: usize,
    /// Region/locale code (e.g., "us-en"); "wt-wt" means no region restriction.
    pub region: String,
    /// Safe search level.
    pub safe_search: SafeSearch,
}

impl SearchQuery {
    /// Creates a new search query with the given terms and default options.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_results: 5,
            region: "wt-wt".to_string(),
            safe_search: SafeSearch::Moderate,
        }
    }

    /// Sets the maximum number of results.
    pub fn with_limit(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets the region/locale code.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the safe search level.
    pub fn with_safe_search(mut self, level: SafeSearch) -> Self {
        self.safe_search = level;
        self
    }

    /// Returns true when the query has no searchable text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
