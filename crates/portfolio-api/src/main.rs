//! Portfolio API server entry point.

use std::error::Error;
use std::sync::Arc;

use portfolio_api::config::ServerConfig;
use portfolio_api::error::AppError;
use portfolio_api::state::AppState;
use portfolio_api::telemetry;
use portfolio_content::domain::catalog::ContentCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = ServerConfig::from_env()?;

    telemetry::init_tracing(config.log_format);

    tracing::info!("Starting portfolio API server");

    // Load content once; it is never mutated afterwards.
    let catalog = match &config.content_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading content from file");
            ContentCatalog::from_path(path)
        }
        None => ContentCatalog::embedded(),
    }
    .map_err(AppError::Content)?;

    let app = portfolio_api::app(AppState::new(Arc::new(catalog)));

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::Server)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or on SIGTERM where supported.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
