//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into the service, serve HTTP.
//! No business logic here; the pipeline lives in TemperatureService.

use cep_weather::adapters::postal::ViaCepAdapter;
use cep_weather::adapters::rest;
use cep_weather::adapters::weather::WeatherApiAdapter;
use cep_weather::ports::{LocalityResolver, TemperatureQuery, WeatherFetcher};
use cep_weather::shared::config::AppConfig;
use cep_weather::usecases::TemperatureService;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    let api_key = cfg.weather_api_key()?;
    let bind_addr = cfg.bind_addr()?;
    let postal_url = cfg.postal_api_url()?;
    let weather_url = cfg.weather_api_url()?;
    let timeout = cfg.request_timeout();

    // --- One pooled client for both upstreams; the timeout bounds each call ---
    let client = Arc::new(reqwest::Client::builder().timeout(timeout).build()?);
    info!(
        timeout_secs = timeout.as_secs(),
        postal = %postal_url,
        weather = %weather_url,
        "upstreams configured"
    );

    // --- Outbound adapters ---
    let resolver: Arc<dyn LocalityResolver> =
        Arc::new(ViaCepAdapter::new(Arc::clone(&client), postal_url));
    let weather: Arc<dyn WeatherFetcher> = Arc::new(WeatherApiAdapter::new(
        Arc::clone(&client),
        weather_url,
        api_key,
        cfg.user_agent_or_default(),
    ));

    // --- Service + inbound HTTP ---
    let query: Arc<dyn TemperatureQuery> = Arc::new(TemperatureService::new(resolver, weather));
    let app = rest::router(query);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(addr = %bind_addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(%e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C"),
        _ = terminate => info!("received SIGTERM"),
    }
    info!("shutting down gracefully");
}
