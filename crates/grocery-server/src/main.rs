mod api;
mod middleware;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = grocery_core::load_server_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let state = AppState {
        kroger: Arc::new(config.kroger.clone()),
    };
    let app = build_app(state, &config.app_url)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, origin = %config.app_url, "grocery-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.bind_addr))
        .await?;
    tracing::info!(addr = %config.bind_addr, "grocery-server stopped");
    Ok(())
}

/// Resolves on ctrl-c or SIGTERM. A signal that cannot be installed is logged
/// and never fires, so the server keeps running on the other one.
async fn shutdown_signal(addr: SocketAddr) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
        "ctrl-c"
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
        "SIGTERM"
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    let signal = tokio::select! {
        name = ctrl_c => name,
        name = terminate => name,
    };

    tracing::info!(%addr, signal, "draining in-flight Kroger requests before exit");
}
