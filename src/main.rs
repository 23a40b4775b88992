use hn_hiring::Config;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let started = Instant::now();
    tracing::info!("starting hiring thread archive run");

    let outcome = match Config::from_env() {
        Ok(config) => hn_hiring::run(&config).await,
        Err(error) => Err(error),
    };

    // Errors are logged, never escalated; the shutdown path always runs
    if let Err(error) = outcome {
        tracing::error!(%error, "archive run failed");
    }

    tracing::info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "archive run finished"
    );
}
