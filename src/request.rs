//! Request building and execution.
//!
//! One GET per call, with a fresh client so that nothing (cookies, pooled
//! connections, proxy choice) carries over between searches.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE, USER_AGENT};
use reqwest::{redirect, Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::proxy::ProxyConfig;
use crate::user_agent::random_user_agent;
use crate::{Result, SearchError, SearchOptions};

/// Default search endpoint.
pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";

/// Pre-accepted consent state, skips the cookie interstitial.
pub const CONSENT_COOKIE: &str = "CONSENT=PENDING+987; SOCS=CAESHAgBEhIaAB";

/// Maximum number of redirects followed.
pub const MAX_REDIRECTS: usize = 5;

/// Builds the search URL for `term` against `endpoint`.
pub fn build_url(endpoint: &str, term: &str, options: &SearchOptions) -> Result<Url> {
    let mut params: Vec<(&str, String)> = vec![
        ("q", term.to_string()),
        ("num", options.requested_count().to_string()),
        ("hl", options.lang.clone()),
        ("start", options.start.to_string()),
        ("safe", options.safe.as_str().to_string()),
    ];
    if let Some(region) = &options.region {
        params.push(("gl", region.clone()));
    }

    Ok(Url::parse_with_params(endpoint, &params)?)
}

/// Builds the request headers, with a freshly generated user agent.
pub fn build_headers() -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&random_user_agent()).map_err(SearchError::request)?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(COOKIE, HeaderValue::from_static(CONSENT_COOKIE));
    Ok(headers)
}

/// Builds an HTTP client honouring the timeout and proxy in `options`.
pub fn build_client(options: &SearchOptions) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(options.timeout_duration())
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .deflate(true)
        .brotli(true);

    if let Some(proxy) = &options.proxy {
        let proxy_config = ProxyConfig::parse(proxy)?;
        debug!("Using proxy: {}:{}", proxy_config.host, proxy_config.port);
        builder = builder.proxy(proxy_config.to_reqwest()?);
    }

    builder
        .build()
        .map_err(|e| SearchError::Request(format!("failed to create HTTP client: {}", e)))
}

/// Fetches the result page for `term` from the default endpoint.
pub async fn execute(term: &str, options: &SearchOptions) -> Result<String> {
    execute_at(GOOGLE_SEARCH_URL, term, options).await
}

/// Fetches the result page for `term` from `endpoint`.
///
/// Only a 200 response counts as success. Nothing is retried.
pub async fn execute_at(endpoint: &str, term: &str, options: &SearchOptions) -> Result<String> {
    let url = build_url(endpoint, term, options)?;
    let client = build_client(options)?;
    let headers = build_headers()?;

    debug!("GET {}", url);
    let response = client.get(url).headers(headers).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(SearchError::Request(format!(
            "Request failed with status code {}",
            status.as_u16()
        )));
    }

    let html = response.text().await?;
    debug!("Fetched {} bytes", html.len());
    Ok(html)
}
