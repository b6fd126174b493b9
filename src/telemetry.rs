// src/telemetry.rs
// Log setup. Logs go to stderr so `--json` output on stdout stays clean.
// Override the level with RUST_LOG, e.g. RUST_LOG=product_crawler=debug

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_crawler=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
