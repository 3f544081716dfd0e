//! Tracenav CLI
//!
//! Prints the processed navigation menu as JSON. Stands in for the
//! rendering layer when smoke-testing a router configuration.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tracenav::menu::navigation_menu;
use tracenav::router::RouterConfig;

/// Print the navigation menu for the trace explorer UI.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to a JSON router configuration. Defaults to the built-in table.
    #[arg(long)]
    router_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let config = match &args.router_config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            RouterConfig::from_json(&json).context("failed to parse router configuration")?
        }
        None => RouterConfig::default(),
    };
    info!(home = %config.home, routes = config.routes.len(), "router configuration loaded");

    let menu = navigation_menu(&config).context("failed to build navigation menu")?;

    println!("{}", serde_json::to_string_pretty(&menu)?);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
