use std::io::{Error, Result};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::domain::ReviewTemplateSet;
use crate::frameworks::config::{self, Settings};
use crate::interface_adapters::clients::HostawayClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve the already-wired application on the given listener.
pub async fn run(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

// Assemble the immutable application state from settings. Startup-fatal on
// bad configuration or an unparseable template bundle.
pub fn build_state(settings: &Settings) -> Result<AppState> {
    let templates = ReviewTemplateSet::bundled().map_err(|err| {
        tracing::error!(error = %err, "failed to parse bundled review templates");
        Error::other(err)
    })?;
    tracing::debug!(count = templates.len(), "review templates loaded.");

    let upstream = HostawayClient::new(
        settings.base_url.clone(),
        settings.timeout,
        settings.connect_timeout,
    )
    .map_err(|err| {
        tracing::error!(error = %err, "failed to build the upstream http client");
        Error::other(err)
    })?;
    tracing::debug!(base_url = %settings.base_url, "upstream client configured.");

    Ok(AppState {
        upstream: Arc::new(upstream),
        templates: Arc::new(templates),
    })
}

// Full bootstrap path used by the binary.
pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = Settings::from_env().map_err(|err| {
        tracing::error!(error = %err, "invalid configuration");
        Error::other(err)
    })?;

    let state = build_state(&settings)?;

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}
