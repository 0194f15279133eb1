//! Demo feed binary: streams random scoreboard snapshots over SSE.
//!
//! `PORT` and `SEED` environment variables override the defaults.

use scoreboard::feed::server::{serve, FeedConfig, FeedError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), FeedError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = FeedConfig::default();
    if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
        config.port = port;
    }
    if let Some(seed) = std::env::var("SEED").ok().and_then(|s| s.parse().ok()) {
        config.seed = Some(seed);
    }

    serve(config).await
}
