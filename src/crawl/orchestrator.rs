// src/crawl/orchestrator.rs
// =============================================================================
// Crawls many domains concurrently.
//
// How it works:
// - Every domain gets its own task running a DomainCrawler
// - A semaphore with max_concurrent_domains permits gates admission: a task
//   waits for a permit before it fetches anything, and gives it back when
//   its crawl is done
// - Each task returns its DomainResult; this function is the only place that
//   writes into the AggregateResult, so no locking is needed around it
//
// A slow domain only occupies one permit; it never blocks the others.
//
// Rust concepts:
// - tokio::spawn: Run each domain as an independent task
// - Semaphore: A counting limiter shared between tasks
// - FuturesUnordered: Collect results in whatever order tasks finish
// =============================================================================

use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error};

use super::domain::{CrawlContext, DomainCrawler};
use super::result::{AggregateResult, DomainResult};

pub struct CrawlOrchestrator {
    ctx: CrawlContext,
    limiter: Arc<Semaphore>,
}

impl CrawlOrchestrator {
    pub fn new(ctx: CrawlContext) -> Self {
        let limiter = Arc::new(Semaphore::new(ctx.config.max_concurrent_domains));
        Self { ctx, limiter }
    }

    // Crawls every domain and returns once all of them are done.
    // A domain listed twice is crawled once.
    pub async fn crawl_all(&self, domains: &[String]) -> AggregateResult {
        let mut seen = HashSet::new();
        let mut pending = FuturesUnordered::new();

        for domain in domains {
            if !seen.insert(domain.as_str()) {
                continue;
            }

            let handle = tokio::spawn(crawl_with_permit(
                domain.clone(),
                self.ctx.clone(),
                self.limiter.clone(),
            ));
            let domain = domain.clone();
            pending.push(async move { (domain, handle.await) });
        }

        let mut aggregate = AggregateResult::default();
        while let Some((domain, joined)) = pending.next().await {
            match joined {
                Ok(result) => {
                    debug!(
                        domain = %result.domain,
                        pages_visited = result.pages_visited,
                        "collected domain result"
                    );
                    aggregate.insert(result);
                }
                Err(e) => {
                    // A crashed domain still gets an (empty) entry
                    error!(domain = %domain, error = %e, "domain task failed");
                    aggregate.insert(DomainResult::empty(domain));
                }
            }
        }

        aggregate
    }
}

async fn crawl_with_permit(
    domain: String,
    ctx: CrawlContext,
    limiter: Arc<Semaphore>,
) -> DomainResult {
    // The semaphore is never closed, so acquiring only fails if that changes
    let _permit = match limiter.acquire_owned().await {
        Ok(permit) => permit,
        Err(e) => {
            error!(domain = %domain, error = %e, "concurrency limiter closed");
            return DomainResult::empty(domain);
        }
    };
    debug!(domain = %domain, "admitted");

    DomainCrawler::new(domain, ctx).crawl().await
}
