//! Search options.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Safe search mode sent as the `safe` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    /// Filter explicit results.
    #[default]
    Active,
    /// No filtering.
    Off,
}

impl SafeSearch {
    /// Returns the query parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Off => "off",
        }
    }
}

impl FromStr for SafeSearch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Active, Self::Off]
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown safe search mode '{}' (expected active or off)", s))
    }
}

/// Options for a single search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Desired number of results.
    #[serde(default = "default_num_results")]
    pub num_results: usize,
    /// Interface language (`hl`).
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Proxy URL, e.g. `http://127.0.0.1:8080`.
    #[serde(default)]
    pub proxy: Option<String>,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Safe search mode.
    #[serde(default)]
    pub safe: SafeSearch,
    /// Country code (`gl`). Omitted from the query when unset.
    #[serde(default)]
    pub region: Option<String>,
    /// Pagination offset.
    #[serde(default)]
    pub start: usize,
    /// Drop results whose URL was already seen.
    #[serde(default)]
    pub unique: bool,
}

fn default_num_results() -> usize {
    10
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_timeout() -> u64 {
    5000
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            num_results: default_num_results(),
            lang: default_lang(),
            proxy: None,
            timeout: default_timeout(),
            safe: SafeSearch::default(),
            region: None,
            start: 0,
            unique: false,
        }
    }
}

impl SearchOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the desired number of results.
    pub fn with_num_results(mut self, num_results: usize) -> Self {
        self.num_results = num_results;
        self
    }

    /// Sets the interface language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Routes the request through a proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Sets the timeout in milliseconds.
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = timeout_ms;
        self
    }

    /// Sets the safe search mode.
    pub fn with_safe(mut self, safe: SafeSearch) -> Self {
        self.safe = safe;
        self
    }

    /// Sets the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the pagination offset.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Enables or disables URL deduplication.
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Number of results asked of the server. Two more than desired, since
    /// some returned blocks are filtered out during extraction.
    pub fn requested_count(&self) -> usize {
        self.num_results.saturating_add(2)
    }

    /// Timeout as a [`Duration`].
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_options_default() {
        let options = SearchOptions::default();
        assert_eq!(options.num_results, 10);
        assert_eq!(options.lang, "en");
        assert!(options.proxy.is_none());
        assert_eq!(options.timeout, 5000);
        assert_eq!(options.safe, SafeSearch::Active);
        assert!(options.region.is_none());
        assert_eq!(options.start, 0);
        assert!(!options.unique);
    }

    #[test]
    fn test_search_options_builder_chain() {
        let options = SearchOptions::new()
            .with_num_results(5)
            .with_lang("de")
            .with_proxy("http://127.0.0.1:8080")
            .with_timeout(1500)
            .with_safe(SafeSearch::Off)
            .with_region("DE")
            .with_start(20)
            .with_unique(true);

        assert_eq!(options.num_results, 5);
        assert_eq!(options.lang, "de");
        assert_eq!(options.proxy.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(options.timeout, 1500);
        assert_eq!(options.safe, SafeSearch::Off);
        assert_eq!(options.region.as_deref(), Some("DE"));
        assert_eq!(options.start, 20);
        assert!(options.unique);
    }

    #[test]
    fn test_requested_count_overfetches_by_two() {
        assert_eq!(SearchOptions::default().requested_count(), 12);
        assert_eq!(SearchOptions::new().with_num_results(0).requested_count(), 2);
    }

    #[test]
    fn test_requested_count_saturates() {
        let options = SearchOptions::new().with_num_results(usize::MAX);
        assert_eq!(options.requested_count(), usize::MAX);
        let options = SearchOptions::new().with_num_results(usize::MAX - 1);
        assert_eq!(options.requested_count(), usize::MAX);
    }

    #[test]
    fn test_timeout_duration() {
        let options = SearchOptions::new().with_timeout(250);
        assert_eq!(options.timeout_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_safe_search_as_str() {
        assert_eq!(SafeSearch::Active.as_str(), "active");
        assert_eq!(SafeSearch::Off.as_str(), "off");
    }

    #[test]
    fn test_safe_search_from_str() {
        assert_eq!("active".parse::<SafeSearch>(), Ok(SafeSearch::Active));
        assert_eq!("off".parse::<SafeSearch>(), Ok(SafeSearch::Off));
        assert!("strict".parse::<SafeSearch>().is_err());
    }

    #[test]
    fn test_safe_search_serialization() {
        assert_eq!(serde_json::to_string(&SafeSearch::Off).unwrap(), "\"off\"");
        let safe: SafeSearch = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(safe, SafeSearch::Active);
    }

    #[test]
    fn test_search_options_deserialization_fills_defaults() {
        let json = r#"{"num_results":3,"region":"us"}"#;
        let options: SearchOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.num_results, 3);
        assert_eq!(options.region.as_deref(), Some("us"));
        assert_eq!(options.lang, "en");
        assert_eq!(options.timeout, 5000);
        assert_eq!(options.safe, SafeSearch::Active);
    }

    #[test]
    fn test_search_options_empty_json_is_default() {
        let options: SearchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SearchOptions::default());
    }
}
