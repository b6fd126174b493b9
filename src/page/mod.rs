// src/page/mod.rs
// =============================================================================
// This module turns a URL into the links found on that page.
//
// Submodules:
// - http: Fetches a page body over HTTP (the Fetcher trait + reqwest impl)
// - html: Extracts absolute links from an HTML body (the LinkExtractor trait)
//
// The crawler depends only on the two traits, so tests can replace the
// network and the parser with in-memory fakes.
// =============================================================================

mod html;
mod http;

pub use html::{strip_fragment, ExtractError, HtmlLinkExtractor, LinkExtractor};
pub use http::{FetchError, Fetcher, HttpFetcher};
