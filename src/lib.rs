//! # serp-scout
//!
//! Issues a single Google search over HTTP and extracts the organic results
//! (URL, title, snippet) from the returned page.
//!
//! - Request shaping: rotating text-browser user agent, consent cookie,
//!   optional proxy, timeout and redirect cap
//! - Layout-tolerant extraction across several result-page variants
//! - Redirect-wrapper URL decoding and optional deduplication
//!
//! ## Example
//!
//! ```rust,no_run
//! use serp_scout::{search, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let options = SearchOptions::new().with_num_results(5).with_unique(true);
//!     let results = search("rust programming", &options).await?;
//!
//!     for result in &results {
//!         println!("{}: {}", result.title, result.url);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod options;
mod result;

pub mod extract;
pub mod proxy;
pub mod request;
pub mod user_agent;

pub use error::{Result, SearchError};
pub use extract::{BlockLocator, Extractor, Layout};
pub use options::{SafeSearch, SearchOptions};
pub use result::SearchResult;

use tracing::{debug, warn};

/// Searches Google for `term` and returns the organic results in page order.
///
/// Fails only when the request fails. A page that yields nothing usable
/// gives an empty list.
pub async fn search(term: &str, options: &SearchOptions) -> Result<Vec<SearchResult>> {
    search_with_endpoint(request::GOOGLE_SEARCH_URL, term, options).await
}

/// Same as [`search`], against a different endpoint (a mirror or a test server).
pub async fn search_with_endpoint(
    endpoint: &str,
    term: &str,
    options: &SearchOptions,
) -> Result<Vec<SearchResult>> {
    let html = request::execute_at(endpoint, term, options).await?;

    if extract::looks_blocked(&html) {
        warn!("Result page looks like a bot check; expect few or no results");
    }

    let mut results = extract::extract(&html, options.unique);
    results.truncate(options.requested_count());
    debug!("Search for {:?} returned {} results", term, results.len());
    Ok(results)
}
