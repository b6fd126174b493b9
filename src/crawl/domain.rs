// src/crawl/domain.rs
// =============================================================================
// Crawls a single domain breadth-first, collecting product URLs.
//
// How it works:
// 1. Seed the frontier with https://<domain> at depth 0
// 2. Pop the next task; stop when the queue is empty or the page budget is
//    spent
// 3. Skip tasks that are too deep or already visited
// 4. Mark the URL visited and fetch it (with a timeout)
// 5. Extract the page's links and sort each one into:
//    - already visited  -> ignored
//    - product URL      -> recorded, NOT crawled further
//    - same domain      -> queued at depth + 1
//    - anything else    -> dropped
//
// A failed fetch or unparseable page is a dead end for that one URL only:
// it is logged and the crawl moves on to the next task.
//
// Rust concepts:
// - Arc<dyn Trait>: Shared, swappable collaborators (real or fake)
// - enum state machine: Idle -> Running -> Done
// - tokio::time::timeout: Bound how long a single fetch may take
// =============================================================================

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::classifier::ProductClassifier;
use super::frontier::{CrawlTask, Frontier};
use super::result::DomainResult;
use crate::config::CrawlConfig;
use crate::page::{strip_fragment, FetchError, Fetcher, LinkExtractor};

// Everything a domain crawler needs that is shared between domains.
// All fields are read-only; cloning only bumps reference counts.
#[derive(Clone)]
pub struct CrawlContext {
    pub config: Arc<CrawlConfig>,
    pub fetcher: Arc<dyn Fetcher>,
    pub extractor: Arc<dyn LinkExtractor>,
    pub classifier: Arc<ProductClassifier>,
}

impl CrawlContext {
    pub fn new(
        config: CrawlConfig,
        fetcher: Arc<dyn Fetcher>,
        extractor: Arc<dyn LinkExtractor>,
        classifier: ProductClassifier,
    ) -> Self {
        Self {
            config: Arc::new(config),
            fetcher,
            extractor,
            classifier: Arc::new(classifier),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    Idle,
    Running,
    Done,
}

pub struct DomainCrawler {
    domain: String,
    ctx: CrawlContext,
    frontier: Frontier,
    product_urls: BTreeSet<String>,
    state: CrawlState,
}

impl DomainCrawler {
    pub fn new(domain: impl Into<String>, ctx: CrawlContext) -> Self {
        let domain = domain.into();
        let mut frontier = Frontier::new(ctx.config.max_pages);
        frontier.push(CrawlTask::new(format!("https://{}", domain), 0));

        Self {
            domain,
            ctx,
            frontier,
            product_urls: BTreeSet::new(),
            state: CrawlState::Idle,
        }
    }

    pub fn state(&self) -> CrawlState {
        self.state
    }

    // Runs the whole traversal and hands back the finished result
    pub async fn crawl(mut self) -> DomainResult {
        info!(domain = %self.domain, "starting crawl");
        while self.state() != CrawlState::Done {
            self.step().await;
        }
        info!(
            domain = %self.domain,
            products = self.product_urls.len(),
            pages_visited = self.frontier.visited_count(),
            unvisited = self.frontier.queued(),
            "finished crawl"
        );
        self.into_result()
    }

    // Performs one loop iteration: at most one fetch
    pub async fn step(&mut self) -> CrawlState {
        if self.state == CrawlState::Done {
            return CrawlState::Done;
        }
        self.state = CrawlState::Running;

        // The budget is checked once per iteration, before popping
        if self.frontier.budget_exhausted() {
            self.state = CrawlState::Done;
            return self.state;
        }
        let Some(task) = self.frontier.pop() else {
            self.state = CrawlState::Done;
            return self.state;
        };

        if task.depth > self.ctx.config.max_depth || self.frontier.is_visited(&task.url) {
            return self.state;
        }
        self.frontier.mark_visited(&task.url);

        debug!(domain = %self.domain, url = %task.url, depth = task.depth, "fetching page");
        let body = match self.fetch(&task.url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(domain = %self.domain, url = %task.url, error = %e, "fetch failed");
                return self.state;
            }
        };

        // An unparseable page is treated like a failed fetch: zero links
        let links = match self.ctx.extractor.extract(&body, &task.url) {
            Ok(links) => links,
            Err(e) => {
                warn!(domain = %self.domain, url = %task.url, error = %e, "link extraction failed");
                return self.state;
            }
        };

        self.process_links(links, task.depth);
        self.state
    }

    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let timeout = self.ctx.config.request_timeout;
        match tokio::time::timeout(timeout, self.ctx.fetcher.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout),
        }
    }

    fn process_links(&mut self, links: BTreeSet<String>, depth: usize) {
        for link in links {
            let link = strip_fragment(&link);

            if self.frontier.is_visited(link) {
                continue;
            }

            if self.ctx.classifier.is_product(link) {
                self.product_urls.insert(link.to_string());
            } else if link.contains(self.domain.as_str()) {
                self.frontier.push(CrawlTask::new(link, depth + 1));
            }
        }
    }

    pub fn into_result(self) -> DomainResult {
        DomainResult {
            domain: self.domain,
            pages_visited: self.frontier.visited_count(),
            product_urls: self.product_urls.into_iter().collect(),
        }
    }
}
