// src/crawl/mod.rs
// =============================================================================
// This module handles crawling websites for product pages.
//
// Features:
// - Breadth-first crawling starting from each domain's root
// - Stays on the same domain (links elsewhere are dropped)
// - Configurable depth limit and page budget per domain
// - Several domains crawled at once, up to a concurrency limit
//
// Submodules, leaves first:
// - classifier: Is this URL a product page?
// - frontier: The BFS queue plus the visited set
// - domain: Drives one domain's crawl
// - orchestrator: Runs many domain crawls concurrently
// - result: Per-domain and aggregated results
// =============================================================================

mod classifier;
mod domain;
mod frontier;
mod orchestrator;
mod result;

#[cfg(test)]
pub(crate) mod testing;

pub use classifier::ProductClassifier;
pub use domain::CrawlContext;
pub use orchestrator::CrawlOrchestrator;
pub use result::AggregateResult;
