//! Binary crate for the `weather-server` HTTP proxy.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and loading configuration
//! - Serving the lookup endpoint to the browser UI
//! - Mapping lookup errors to HTTP responses

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod error;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_server=info,weather_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
