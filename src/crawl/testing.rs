// In-memory collaborators for crawler tests: no network, fully scripted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::classifier::ProductClassifier;
use super::domain::CrawlContext;
use crate::config::CrawlConfig;
use crate::page::{FetchError, Fetcher, HtmlLinkExtractor};

enum Scripted {
    Body(String),
    Fail(FetchError),
    Slow(Duration),
    Panic,
}

// Records every URL passed to fetch(), in call order
#[derive(Clone, Default)]
pub struct FetchLog(Arc<Mutex<Vec<String>>>);

impl FetchLog {
    pub fn urls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn record(&self, url: &str) {
        self.0.lock().unwrap().push(url.to_string());
    }
}

// Serves pages from a map; unknown URLs answer 404
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, Scripted>,
    log: FetchLog,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages
            .insert(url.to_string(), Scripted::Body(body.to_string()));
        self
    }

    pub fn failing(mut self, url: &str, error: FetchError) -> Self {
        self.pages.insert(url.to_string(), Scripted::Fail(error));
        self
    }

    // Sleeps for `delay` and then answers with an empty page
    pub fn slow(mut self, url: &str, delay: Duration) -> Self {
        self.pages.insert(url.to_string(), Scripted::Slow(delay));
        self
    }

    pub fn panicking(mut self, url: &str) -> Self {
        self.pages.insert(url.to_string(), Scripted::Panic);
        self
    }

    pub fn log(&self) -> FetchLog {
        self.log.clone()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.log.record(url);
        match self.pages.get(url) {
            Some(Scripted::Body(body)) => Ok(body.clone()),
            Some(Scripted::Fail(error)) => Err(error.clone()),
            Some(Scripted::Slow(delay)) => {
                tokio::time::sleep(*delay).await;
                Ok(String::new())
            }
            Some(Scripted::Panic) => panic!("scripted panic fetching {}", url),
            None => Err(FetchError::Status(404)),
        }
    }
}

pub fn context(fetcher: impl Fetcher + 'static, config: CrawlConfig) -> CrawlContext {
    CrawlContext::new(
        config,
        Arc::new(fetcher),
        Arc::new(HtmlLinkExtractor),
        ProductClassifier::default(),
    )
}
