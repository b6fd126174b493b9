// src/page/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Resolve relative URLs to absolute URLs
// - Drop the #fragment part so "/page#top" and "/page" are the same link
//
// Rust concepts:
// - BTreeSet: A sorted set, so links come out in a stable order
// - Iterators: For processing collections
// =============================================================================

use scraper::{Html, Selector};
use std::collections::BTreeSet;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Turns a page body plus the URL it came from into absolute links.
pub trait LinkExtractor: Send + Sync {
    fn extract(&self, body: &str, base_url: &str) -> Result<BTreeSet<String>, ExtractError>;
}

// Extracts every <a href> from an HTML document
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract(&self, body: &str, base_url: &str) -> Result<BTreeSet<String>, ExtractError> {
        let base = Url::parse(base_url).map_err(|source| ExtractError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        let document = Html::parse_document(body);

        // "a[href]" is a constant selector and known to be valid
        let selector = Selector::parse("a[href]").expect("a[href] is a valid selector");

        let links = document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .filter_map(|href| resolve_url(&base, href))
            .collect();

        Ok(links)
    }
}

// Resolves a possibly-relative href against the page URL
//
// Returns None for hrefs that don't resolve, or that resolve to something
// other than http/https (mailto:, tel:, javascript:, ...).
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    let mut url = base.join(href.trim()).ok()?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    url.set_fragment(None);
    Some(url.to_string())
}

// Drops everything from the first '#' onwards
//
// Used on URLs that did not come through the extractor (like the seed URL),
// so that every visited-set entry is fragment-free.
pub fn strip_fragment(url: &str) -> &str {
    url.split('#').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str, base: &str) -> Vec<String> {
        HtmlLinkExtractor
            .extract(html, base)
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_extract_absolute_link() {
        let links = extract(
            r#"<a href="https://www.rust-lang.org">Rust</a>"#,
            "https://example.com",
        );
        assert_eq!(links, vec!["https://www.rust-lang.org/"]);
    }

    #[test]
    fn test_resolve_relative_link() {
        let links = extract(r#"<a href="/docs">Docs</a>"#, "https://example.com/page");
        assert_eq!(links, vec!["https://example.com/docs"]);
    }

    #[test]
    fn test_strips_fragments_and_dedups() {
        let html = r##"
            <a href="/catalogue/a.html#reviews">A</a>
            <a href="/catalogue/a.html">A again</a>
            <a href="#top">Top</a>
        "##;
        let links = extract(html, "https://example.com/index.html");
        assert_eq!(
            links,
            vec![
                "https://example.com/catalogue/a.html",
                "https://example.com/index.html",
            ]
        );
    }

    #[test]
    fn test_skip_non_http_schemes() {
        let html = r#"
            <a href="mailto:test@example.com">Email</a>
            <a href="javascript:void(0)">JS</a>
            <a href="tel:+123">Call</a>
        "#;
        assert!(extract(html, "https://example.com").is_empty());
    }

    #[test]
    fn test_anchor_without_href_is_ignored() {
        let links = extract(r#"<a name="x">no link</a><p>text</p>"#, "https://example.com");
        assert!(links.is_empty());
    }

    #[test]
    fn test_invalid_base_url_is_an_error() {
        let result = HtmlLinkExtractor.extract("<a href='/x'>x</a>", "not a url");
        assert!(matches!(result, Err(ExtractError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_strip_fragment() {
        assert_eq!(strip_fragment("https://a.com/p#x"), "https://a.com/p");
        assert_eq!(strip_fragment("https://a.com/p"), "https://a.com/p");
    }
}
