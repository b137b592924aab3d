//! Search client: the strongly-typed boundary over a provider.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info};

use crate::provider::Provider;
use crate::{ImageResult, ImageSize, Result, SearchError, SearchQuery, SearchResult};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client that issues one provider request per call and normalizes the
/// loosely-typed response into [`SearchResult`]/[`ImageResult`] values.
///
/// Provider relevance order is preserved verbatim; the client performs no
/// re-sorting, deduplication, or filtering beyond truncation to the query's
/// `max_results`. Each call produces a fresh, independent list with no
/// caching.
pub struct SearchClient {
    provider: Arc<dyn Provider>,
    timeout: Duration,
}

impl SearchClient {
    /// Creates a client over the given provider.
    pub fn new(provider: impl Provider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Performs a web search.
    ///
    /// An empty query returns `Ok(vec![])` immediately without contacting
    /// the provider. Provider failures surface as `Err`; an `Ok` empty list
    /// always means a genuine lack of matches.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        if query.is_empty() {
            debug!("Empty search query, skipping provider call");
            return Ok(Vec::new());
        }

        debug!(
            query = %query.text,
            region = %query.region,
            max_results = query.max_results,
            "Searching"
        );

        let records = timeout(self.timeout, self.provider.text_search(query))
            .await
            .map_err(|_| SearchError::Timeout)??;

        let results: Vec<SearchResult> = records
            .into_iter()
            .take(query.max_results)
            .map(|r| SearchResult::from_parts(r.title, r.body, r.href))
            .collect();

        info!("Found {} results for query: {}", results.len(), query.text);
        Ok(results)
    }

    /// Performs an image search, optionally filtered by size.
    ///
    /// Same contract as [`search`](Self::search): empty query short-circuits,
    /// provider failures surface as `Err`.
    pub async fn image_search(
        &self,
        query: &SearchQuery,
        size: Option<ImageSize>,
    ) -> Result<Vec<ImageResult>> {
        if query.is_empty() {
            debug!("Empty image search query, skipping provider call");
            return Ok(Vec::new());
        }

        debug!(query = %query.text, max_results = query.max_results, "Searching images");

        let records = timeout(self.timeout, self.provider.image_search(query, size))
            .await
            .map_err(|_| SearchError::Timeout)??;

        let results: Vec<ImageResult> = records
            .into_iter()
            .take(query.max_results)
            .map(|r| {
                ImageResult::from_parts(
                    r.title,
                    r.image,
                    r.thumbnail,
                    r.url,
                    r.height,
                    r.width,
                    r.source,
                )
            })
            .collect();

        info!(
            "Found {} image results for query: {}",
            results.len(),
            query.text
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{RawImageRecord, RawRecord};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider double returning scripted records and counting calls.
    struct MockProvider {
        records: Vec<RawRecord>,
        images: Vec<RawImageRecord>,
        calls: AtomicUsize,
    }

    impl MockProvider {
        fn new(records: Vec<RawRecord>) -> Self {
            Self {
                records,
                images: Vec::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn with_images(mut self, images: Vec<RawImageRecord>) -> Self {
            self.images = images;
            self
        }
    }

    #[async_trait]
    impl Provider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn text_search(&self, _query: &SearchQuery) -> Result<Vec<RawRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }

        async fn image_search(
            &self,
            _query: &SearchQuery,
            _size: Option<ImageSize>,
        ) -> Result<Vec<RawImageRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.images.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl Provider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn text_search(&self, _query: &SearchQuery) -> Result<Vec<RawRecord>> {
            Err(SearchError::Provider("connection refused".into()))
        }

        async fn image_search(
            &self,
            _query: &SearchQuery,
            _size: Option<ImageSize>,
        ) -> Result<Vec<RawImageRecord>> {
            Err(SearchError::Provider("connection refused".into()))
        }
    }

    struct HangingProvider;

    #[async_trait]
    impl Provider for HangingProvider {
        fn name(&self) -> &str {
            "hanging"
        }

        async fn text_search(&self, _query: &SearchQuery) -> Result<Vec<RawRecord>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Vec::new())
        }

        async fn image_search(
            &self,
            _query: &SearchQuery,
            _size: Option<ImageSize>,
        ) -> Result<Vec<RawImageRecord>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Vec::new())
        }
    }

    fn record(title: &str, body: &str, href: &str) -> RawRecord {
        RawRecord {
            title: Some(title.to_string()),
            body: Some(body.to_string()),
            href: Some(href.to_string()),
        }
    }

    #[tokio::test]
    async fn test_empty_query_skips_provider() {
        let provider = MockProvider::new(vec![record("T", "B", "https://e.com")]);
        let client = SearchClient::new(provider);

        let results = client.search(&SearchQuery::new("")).await.unwrap();
        assert!(results.is_empty());

        let results = client.search(&SearchQuery::new("  \t ")).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_empty_query_call_count_is_zero() {
        let provider = Arc::new(MockProvider::new(vec![record("T", "B", "u")]));
        let counted = Arc::clone(&provider);

        struct Shared(Arc<MockProvider>);

        #[async_trait]
        impl Provider for Shared {
            fn name(&self) -> &str {
                self.0.name()
            }
            async fn text_search(&self, query: &SearchQuery) -> Result<Vec<RawRecord>> {
                self.0.text_search(query).await
            }
            async fn image_search(
                &self,
                query: &SearchQuery,
                size: Option<ImageSize>,
            ) -> Result<Vec<RawImageRecord>> {
                self.0.image_search(query, size).await
            }
        }

        let client = SearchClient::new(Shared(provider));
        client.search(&SearchQuery::new("")).await.unwrap();
        client
            .image_search(&SearchQuery::new(""), None)
            .await
            .unwrap();
        assert_eq!(counted.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_preserves_order() {
        let provider = MockProvider::new(vec![
            record("First", "b1", "https://e.com/1"),
            record("Second", "b2", "https://e.com/2"),
            record("Third", "b3", "https://e.com/3"),
        ]);
        let client = SearchClient::new(provider);

        let results = client.search(&SearchQuery::new("test")).await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "First");
        assert_eq!(results[1].title, "Second");
        assert_eq!(results[2].title, "Third");
    }

    #[tokio::test]
    async fn test_search_truncates_to_limit() {
        let records: Vec<_> = (0..10)
            .map(|i| record(&format!("R{}", i), "b", "u"))
            .collect();
        let client = SearchClient::new(MockProvider::new(records));

        let results = client
            .search(&SearchQuery::new("test").with_limit(4))
            .await
            .unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[3].title, "R3");
    }

    #[tokio::test]
    async fn test_search_placeholder_only_on_missing_fields() {
        let provider = MockProvider::new(vec![RawRecord {
            title: Some("Present".into()),
            body: None,
            href: Some("https://e.com".into()),
        }]);
        let client = SearchClient::new(provider);

        let results = client.search(&SearchQuery::new("test")).await.unwrap();
        assert_eq!(results[0].title, "Present");
        assert_eq!(results[0].body, crate::result::NO_BODY);
        assert_eq!(results[0].url, "https://e.com");
    }

    #[tokio::test]
    async fn test_search_provider_failure_is_err() {
        let client = SearchClient::new(FailingProvider);
        let err = client.search(&SearchQuery::new("test")).await.unwrap_err();
        assert!(matches!(err, SearchError::Provider(_)));
    }

    #[tokio::test]
    async fn test_search_times_out() {
        let client =
            SearchClient::new(HangingProvider).with_timeout(Duration::from_millis(50));
        let err = client.search(&SearchQuery::new("test")).await.unwrap_err();
        assert!(matches!(err, SearchError::Timeout));
    }

    #[tokio::test]
    async fn test_image_search_maps_records() {
        let provider = MockProvider::new(Vec::new()).with_images(vec![RawImageRecord {
            title: Some("Duck".into()),
            image: Some("https://e.com/d.jpg".into()),
            thumbnail: Some("https://e.com/d_t.jpg".into()),
            url: Some("https://e.com/page".into()),
            height: Some(480),
            width: Some(640),
            source: Some("example.com".into()),
        }]);
        let client = SearchClient::new(provider);

        let results = client
            .image_search(&SearchQuery::new("duck"), Some(ImageSize::Large))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].image_url, "https://e.com/d.jpg");
        assert_eq!(results[0].width, 640);
    }

    #[tokio::test]
    async fn test_image_search_failure_is_err() {
        let client = SearchClient::new(FailingProvider);
        let err = client
            .image_search(&SearchQuery::new("duck"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Provider(_)));
    }

    #[tokio::test]
    async fn test_scenario_python_best_practices() {
        let provider = MockProvider::new(vec![record(
            "Best Practices",
            "Use virtual environments",
            "https://example.com/1",
        )]);
        let client = SearchClient::new(provider);

        let query = SearchQuery::new("python best practices").with_limit(5);
        let results = client.search(&query).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0],
            SearchResult::new(
                "Best Practices",
                "Use virtual environments",
                "https://example.com/1"
            )
        );
    }
}
