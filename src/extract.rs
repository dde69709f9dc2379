//! Result extraction from a fetched result page.
//!
//! Result blocks are located through a set of layout patterns, since the
//! page markup differs between client types and changes over time. All
//! patterns are queried as one union, so blocks come back in document order
//! regardless of which pattern matched them.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::{Result, SearchError, SearchResult};

/// Prefix of links that wrap the real destination in a `q` parameter.
pub const REDIRECT_PREFIX: &str = "/url?q=";

const LINK_SELECTOR: &str = "a[href]";
const TITLE_SELECTOR: &str = "h3, span.CVA68e";
const DESCRIPTION_SELECTOR: &str = "div.VwiC3b, span.FrIlee, div.s";

/// Something that can locate result blocks on a page.
pub trait BlockLocator {
    /// CSS selector matching one result block.
    fn selector(&self) -> &str;
}

/// A known result-page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Short label, used in logs.
    pub name: &'static str,
    /// CSS selector for a result block in this layout.
    pub block: &'static str,
}

impl Layout {
    /// Creates a layout pattern.
    pub const fn new(name: &'static str, block: &'static str) -> Self {
        Self { name, block }
    }
}

impl BlockLocator for Layout {
    fn selector(&self) -> &str {
        self.block
    }
}

impl BlockLocator for &str {
    fn selector(&self) -> &str {
        self
    }
}

impl BlockLocator for String {
    fn selector(&self) -> &str {
        self.as_str()
    }
}

/// Layouts recognised out of the box.
pub const DEFAULT_LAYOUTS: [Layout; 3] = [
    Layout::new("desktop", "div.g"),
    Layout::new("basic", "div.ezO2md"),
    Layout::new("grouped", "div.MjjYud"),
];

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SearchError::InvalidSelector(format!("{}: {:?}", css, e)))
}

/// Compiled selectors for pulling results out of a page.
#[derive(Debug, Clone)]
pub struct Extractor {
    blocks: Selector,
    link: Selector,
    title: Selector,
    description: Selector,
}

impl Extractor {
    /// Creates an extractor for the [`DEFAULT_LAYOUTS`].
    pub fn new() -> Result<Self> {
        Self::with_layouts(&DEFAULT_LAYOUTS)
    }

    /// Creates an extractor for the given block locators.
    pub fn with_layouts<L: BlockLocator>(layouts: &[L]) -> Result<Self> {
        let blocks = layouts
            .iter()
            .map(|l| l.selector())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Self {
            blocks: parse_selector(&blocks)?,
            link: parse_selector(LINK_SELECTOR)?,
            title: parse_selector(TITLE_SELECTOR)?,
            description: parse_selector(DESCRIPTION_SELECTOR)?,
        })
    }

    /// Extracts results from `html` in page order.
    ///
    /// With `unique`, a block whose decoded URL was already seen is skipped.
    pub fn extract(&self, html: &str, unique: bool) -> Vec<SearchResult> {
        let document = Html::parse_document(html);
        let mut seen_urls: HashSet<String> = HashSet::new();
        let mut results = Vec::new();
        let mut blocks = 0usize;

        for block in document.select(&self.blocks) {
            blocks += 1;

            let (Some(link), Some(title)) = (
                block.select(&self.link).next(),
                block.select(&self.title).next(),
            ) else {
                continue;
            };

            let raw = link.value().attr("href").unwrap_or_default();
            if raw.is_empty() {
                continue;
            }
            let Some(url) = decode_href(raw) else {
                debug!("Skipping undecodable link: {}", raw);
                continue;
            };

            if unique && seen_urls.contains(&url) {
                continue;
            }
            seen_urls.insert(url.clone());

            if !is_http(&url) {
                continue;
            }

            let description = block
                .select(&self.description)
                .next()
                .map(|el| element_text(&el))
                .unwrap_or_default();

            results.push(SearchResult::new(url, element_text(&title), description));
        }

        debug!("Extracted {} results from {} blocks", results.len(), blocks);
        results
    }
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn is_http(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Resolves a raw link target to its destination URL.
///
/// Redirect-wrapped links lose the wrapper and everything from the first
/// `&` on. The remainder is percent-decoded; `None` if that fails.
pub fn decode_href(raw: &str) -> Option<String> {
    let target = match raw.strip_prefix(REDIRECT_PREFIX) {
        Some(rest) => rest.split('&').next().unwrap_or(rest),
        None => raw,
    };
    urlencoding::decode(target).ok().map(|s| s.into_owned())
}

/// Extracts results from `html` using the default layouts. Never fails.
pub fn extract(html: &str, unique: bool) -> Vec<SearchResult> {
    match Extractor::new() {
        Ok(extractor) => extractor.extract(html, unique),
        Err(e) => {
            warn!("Result extractor unavailable: {}", e);
            Vec::new()
        }
    }
}

/// Whether the page looks like a bot-check interstitial rather than results.
pub fn looks_blocked(html: &str) -> bool {
    html.contains("/sorry/index") || html.contains("recaptcha")
}
