//! Listener setup and graceful shutdown.

use std::future::Future;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes::router;
use crate::state::AppState;
use crate::{Error, Result};

/// Bind `config.addr()` and serve until Ctrl-C.
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;
    run(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr().map_err(Error::Serve)?;
    tracing::info!(
        addr = %local,
        source = state.loader.source().name(),
        "Portfolio listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(Error::Serve)?;

    tracing::info!("Portfolio stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
