use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use resource_loader::cli::Cli;
use resource_loader::logging::init_tracing;
use resource_loader::{AsyncResourceLoader, Config, FetchPhase, HttpFetcher, WatchNotifier};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_required(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let locators = cli.locators(&config);

    let mut fetcher =
        HttpFetcher::<Value>::new(&config.http).context("Failed to build HTTP client")?;
    if let Some(pointer) = config.source.pointer() {
        fetcher = fetcher.with_payload_pointer(pointer);
    }

    let (notifier, mut rx) = WatchNotifier::channel();
    let loader = AsyncResourceLoader::new(fetcher)
        .with_notifier(notifier)
        .with_initial_data(Value::Array(Vec::new()));
    loader.start();

    let interval = Duration::from_millis(cli.interval_ms);
    for (i, locator) in locators.iter().enumerate() {
        let submission = loader.submit(locator.clone());
        info!(%locator, ?submission, "submitted");
        if i + 1 < locators.len() && !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }
    }

    let settled = tokio::select! {
        result = rx.wait_for(|state| state.is_settled()) => {
            Some(result.context("Loader state channel closed")?.clone())
        }
        _ = tokio::signal::ctrl_c() => None,
    };
    loader.stop();

    let Some(state) = settled else {
        eprintln!("Interrupted");
        std::process::exit(130);
    };

    println!("{}", serde_json::to_string(&state)?);

    if state.phase == FetchPhase::Failure {
        std::process::exit(1);
    }
    Ok(())
}
