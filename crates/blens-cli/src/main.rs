//! Biblical Lens CLI
//!
//! Analyzes content descriptions through a Biblical lens using the
//! Claude API: a color-coded alignment rating, a short explanation,
//! and a supporting scripture verse.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing from `RUST_LOG`, with `--verbose` raising the
/// default filter to debug.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "blens=debug,blens_core=debug"
    } else {
        "blens=info,blens_core=info"
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    cli.execute().await
}
