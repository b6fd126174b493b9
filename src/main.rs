// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the crawl configuration and the real HTTP/HTML collaborators
// 3. Crawl every domain concurrently
// 4. Print a summary and save the results to a JSON file
//
// Rust concepts used:
// - async/await: Because we need to make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Arc: Shared ownership of the fetcher/extractor across domain tasks
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - crawl limits
mod crawl; // src/crawl/ - frontier, domain crawler, orchestrator
mod page; // src/page/ - fetching pages and extracting links
mod sink; // src/sink.rs - saving results
mod telemetry; // src/telemetry.rs - logging setup

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use cli::Cli;
use crawl::{AggregateResult, CrawlContext, CrawlOrchestrator, ProductClassifier};
use page::{HtmlLinkExtractor, HttpFetcher};
use sink::{JsonFileSink, ResultSink};

// One cooperative thread: domain tasks overlap while waiting on the network,
// and everything between two fetches runs without interruption.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    telemetry::init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.crawl_config();
    config.validate().context("invalid crawl configuration")?;

    let fetcher = HttpFetcher::new(&config.user_agent, config.request_timeout)
        .context("failed to build HTTP client")?;

    println!("🔍 Crawling {} domain(s)", cli.domains.len());
    println!(
        "📊 Max depth: {}, max pages per domain: {}, concurrent domains: {}",
        config.max_depth, config.max_pages, config.max_concurrent_domains
    );

    let ctx = CrawlContext::new(
        config,
        Arc::new(fetcher),
        Arc::new(HtmlLinkExtractor),
        ProductClassifier::default(),
    );
    let results = CrawlOrchestrator::new(ctx).crawl_all(&cli.domains).await;

    print_results(&results, cli.json)?;

    let sink = JsonFileSink::new(&cli.output);
    sink.save(&results)
        .with_context(|| format!("failed to save results to {}", sink.path().display()))?;
    tracing::info!(path = %sink.path().display(), "results saved");
    println!("💾 Results saved to {}", sink.path().display());

    Ok(())
}

// Prints the results either as a table or JSON
fn print_results(results: &AggregateResult, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(results)?;
        println!("{}", json_output);
    } else {
        print_table(results);
    }
    Ok(())
}

// Prints one row per domain with its product count
fn print_table(results: &AggregateResult) {
    if results.is_empty() {
        println!("⚠️  No domains were crawled");
        return;
    }

    println!();
    println!("{:<50} {:>10}", "DOMAIN", "PRODUCTS");
    println!("{}", "=".repeat(61));

    for (domain, urls) in results.iter() {
        // Truncate domain if too long for display
        let domain_display = if domain.chars().count() > 47 {
            format!("{}...", domain.chars().take(47).collect::<String>())
        } else {
            domain.to_string()
        };
        println!("{:<50} {:>10}", domain_display, urls.len());
    }

    println!();
    println!("📊 Summary:");
    println!("   🌐 Domains: {}", results.len());
    println!("   🛒 Product URLs: {}", results.total_products());
}
