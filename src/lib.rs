//! # duckterm
//!
//! A terminal DuckDuckGo client: web and image search plus a template-based
//! chat reply assembled from search snippets.
//!
//! The library is two small pieces:
//!
//! - [`SearchClient`] issues one request per call through a [`provider::Provider`]
//!   and normalizes the loosely-typed response into strongly-typed results
//!   with fixed placeholders for missing fields.
//! - [`format`] renders result lists as text. Pure functions, no I/O.
//!
//! ## Example
//!
//! ```rust,no_run
//! use duckterm::{provider::DuckDuckGo, SearchClient, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SearchClient::new(DuckDuckGo::new());
//!
//!     let query = SearchQuery::new("rust programming").with_limit(5);
//!     let results = client.search(&query).await?;
//!
//!     print!("{}", duckterm::format::render(&results, &query.text));
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod query;
mod result;

pub mod format;
pub mod provider;

pub use client::SearchClient;
pub use error::{Result, SearchError};
pub use query::{ImageSize, SafeSearch, SearchQuery};
pub use result::{ImageResult, SearchResult};
