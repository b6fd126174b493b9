// src/config.rs
// =============================================================================
// Crawl configuration shared (read-only) by every domain crawler.
//
// The values here bound each domain's traversal:
// - max_depth: how many link hops from the root page we follow
// - max_pages: how many distinct URLs one domain may visit
// - max_concurrent_domains: how many domains are crawled at the same time
//
// Rust concepts:
// - Default trait: Gives us a sensible starting configuration
// - thiserror: Derives std::error::Error for our error enum
// =============================================================================

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_MAX_PAGES: usize = 50;
pub const DEFAULT_MAX_CONCURRENT_DOMAINS: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

// Reasons a configuration can be rejected before any crawling starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_pages must be greater than zero")]
    ZeroPageBudget,
    #[error("max_concurrent_domains must be greater than zero")]
    ZeroConcurrency,
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Limits applied to every domain crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Deepest link hop (root page = 0) that will still be fetched
    pub max_depth: usize,
    /// Page budget: distinct URLs one domain may visit
    pub max_pages: usize,
    /// How many domain crawls may be fetching at once
    pub max_concurrent_domains: usize,
    /// Per-request fetch timeout
    pub request_timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_pages: DEFAULT_MAX_PAGES,
            max_concurrent_domains: DEFAULT_MAX_CONCURRENT_DOMAINS,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CrawlConfig {
    // Checks the invariants the crawler relies on.
    // max_depth = 0 is valid (only the root page is fetched).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_pages == 0 {
            return Err(ConfigError::ZeroPageBudget);
        }
        if self.max_concurrent_domains == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CrawlConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.max_pages, 50);
        assert_eq!(config.max_concurrent_domains, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_zero_depth_is_allowed() {
        let config = CrawlConfig {
            max_depth: 0,
            ..CrawlConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_limits() {
        let no_pages = CrawlConfig {
            max_pages: 0,
            ..CrawlConfig::default()
        };
        assert_eq!(no_pages.validate(), Err(ConfigError::ZeroPageBudget));

        let no_slots = CrawlConfig {
            max_concurrent_domains: 0,
            ..CrawlConfig::default()
        };
        assert_eq!(no_slots.validate(), Err(ConfigError::ZeroConcurrency));

        let no_timeout = CrawlConfig {
            request_timeout: Duration::ZERO,
            ..CrawlConfig::default()
        };
        assert_eq!(no_timeout.validate(), Err(ConfigError::ZeroTimeout));
    }
}
