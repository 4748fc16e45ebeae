use anyhow::Context;
use tokio::net::TcpListener;

pub mod config;
pub mod error;
pub mod routes;

pub use config::Config;
pub use routes::{router, AppState};

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(&config)?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    let port = listener.local_addr()?.port();
    tracing::info!(addr = %addr, upstream = %config.genius_base_url, "Server running");
    tracing::info!("Try it out: http://localhost:{port}/api/lyrics?q=Dynasty%20MIIA");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

/// Serve on an already-bound listener. Runs until the task is dropped.
pub async fn serve_on(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    axum::serve(listener, router(state)).await.context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(err = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
