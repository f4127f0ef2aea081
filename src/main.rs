use anyhow::Context;
use portfolio_client::auth::application::domain::entities::AuthPhase;
use portfolio_client::shared::config::ClientConfig;
use portfolio_client::PortfolioContext;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Restore the saved session, pull every content slice and print the result as JSON.
#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting portfolio sync...");

    let config = ClientConfig::from_env().context("invalid configuration")?;
    info!("Using API at {}", config.api_base_url);

    let context = PortfolioContext::from_config(config).context("failed to build HTTP client")?;

    match context.session.initialize().await {
        AuthPhase::Authenticated => {
            if let Some(user) = context.session.current_user() {
                info!("Restored session for {}", user.email);
            }
        }
        _ => info!("No saved session"),
    }

    let report = context.content.fetch_all_data().await;
    if !report.all_succeeded() {
        warn!("Some content could not be fetched: {:?}", report);
    }

    let snapshot = context.content.snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("failed to encode content")?
    );

    Ok(())
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error running portfolio sync: {e:#}");
        std::process::exit(1);
    }
}
