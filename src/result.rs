//! Search result type.

use serde::{Deserialize, Serialize};

/// A single organic search result, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Absolute destination URL.
    pub url: String,
    /// Result title, trimmed. May be empty.
    pub title: String,
    /// Result snippet, trimmed. Empty when the block had none.
    pub description: String,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}
