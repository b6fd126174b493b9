// src/page/http.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// Key functionality:
// - The Fetcher trait: "give me the body of this URL, or tell me why not"
// - HttpFetcher: the real implementation built on reqwest
// - FetchError: every way a fetch can fail, as a typed enum
//
// The crawler only ever sees Result<String, FetchError>, so a failed page is
// a value it can match on instead of an exception it has to catch.
//
// Rust concepts:
// - Traits: Let tests swap in a fake fetcher with no network access
// - async-trait: Allows `async fn` inside a trait used as `dyn Fetcher`
// - Result<T, E>: For error handling
// =============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

// Why a page could not be fetched
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request took longer than the per-request timeout
    #[error("request timed out")]
    Timeout,
    /// Server answered with something other than 200 OK
    #[error("HTTP {0}")]
    Status(u16),
    /// Could not connect (DNS failure, refused connection, ...)
    #[error("connection failed: {0}")]
    Connect(String),
    /// Any other transport or body-decoding failure
    #[error("request failed: {0}")]
    Request(String),
}

/// Performs a GET and hands back the page body.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// Fetches pages with a shared reqwest client
//
// The client is reused for every request (connection pooling), and carries
// the identifying User-Agent header and the per-request timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(categorize_error)?;

        // Only a plain 200 counts; redirects are followed by reqwest already
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(categorize_error)
    }
}

// Maps reqwest's error kinds onto our smaller FetchError enum
fn categorize_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else {
        FetchError::Request(error.to_string())
    }
}
