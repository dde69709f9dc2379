//! Error types for the search library.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during a search.
///
/// Page-structure problems are never reported here: a page that cannot be
/// understood simply yields fewer (or zero) results.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Anything between issuing the request and holding a decoded 200 body:
    /// network failure, timeout, non-200 status, redirect cap, proxy setup.
    #[error("Google search request failed: {0}")]
    Request(String),

    /// A custom layout selector could not be compiled.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl SearchError {
    /// Wraps a transport-level failure.
    pub(crate) fn request(err: impl std::fmt::Display) -> Self {
        Self::Request(err.to_string())
    }

    /// Returns true for failures raised by the HTTP exchange.
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        Self::request(err)
    }
}
