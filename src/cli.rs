// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every option has a default, so running `product-crawler` with no flags
// crawls books.toscrape.com (depth 2, 50 pages, 5 domains at a time) and
// writes product_urls.json.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{
    CrawlConfig, DEFAULT_MAX_CONCURRENT_DOMAINS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAGES,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "product-crawler",
    version = "0.1.0",
    about = "Crawl websites breadth-first and collect product page URLs",
    long_about = "product-crawler visits each domain starting from its home page, follows \
                  same-domain links breadth-first, and records every link that looks like a \
                  product page. Results are saved as JSON: domain -> list of product URLs."
)]
pub struct Cli {
    /// Domain to crawl, without scheme (repeat for several domains)
    ///
    /// Example: --domain books.toscrape.com --domain example.com
    #[arg(long = "domain", value_name = "DOMAIN", default_value = "books.toscrape.com")]
    pub domains: Vec<String>,

    /// Maximum link depth from the home page (0 = home page only)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum number of pages visited per domain
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Maximum number of domains crawled at the same time
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT_DOMAINS)]
    pub max_concurrent: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Where to write the JSON results
    #[arg(long, default_value = "product_urls.json")]
    pub output: PathBuf,

    /// Also print the results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            max_depth: self.max_depth,
            max_pages: self.max_pages,
            max_concurrent_domains: self.max_concurrent,
            request_timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_uses_defaults() {
        let cli = Cli::try_parse_from(["product-crawler"]).unwrap();
        assert_eq!(cli.domains, vec!["books.toscrape.com"]);
        assert_eq!(cli.output, PathBuf::from("product_urls.json"));
        assert!(!cli.json);
        assert_eq!(cli.crawl_config(), CrawlConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "product-crawler",
            "--domain",
            "a.com",
            "--domain",
            "b.com",
            "--max-depth",
            "0",
            "--max-pages",
            "7",
            "--max-concurrent",
            "1",
            "--timeout-secs",
            "3",
            "--output",
            "out.json",
        ])
        .unwrap();

        assert_eq!(cli.domains, vec!["a.com", "b.com"]);
        let config = cli.crawl_config();
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.max_pages, 7);
        assert_eq!(config.max_concurrent_domains, 1);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(cli.output, PathBuf::from("out.json"));
    }
}
