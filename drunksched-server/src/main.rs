mod routes;
mod state;

use anyhow::Result;
use drunksched_core::config::SchedConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

const DEFAULT_LOG_FILTER: &str = "drunksched_server=info,drunksched_core=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SchedConfig::load()?;
    let state = AppState::new(config.open_store()?);

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!(
        "drunksched-server listening on http://{} ({:?} store)",
        config.listen, config.store
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
