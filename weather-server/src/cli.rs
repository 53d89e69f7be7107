use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use weather_core::{Config, WeatherService, provider_from_config};

use crate::routes::{self, AppState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather lookup proxy")]
pub struct Cli {
    /// Config file; defaults to the platform config directory.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides `[server] host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides `[server] port`.
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Merge flags over the loaded configuration.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        Ok(config)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.resolve_config()?;

        if config.openweather.usable_api_key().is_none() {
            tracing::warn!("no OpenWeather API key configured; lookups will fail until one is set");
        }

        let provider = provider_from_config(&config)?;
        let state = AppState { weather: WeatherService::new(provider) };

        let app = routes::create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!(%addr, "weather server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("weather server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
