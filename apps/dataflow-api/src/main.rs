//! DataFlow API server
//!
//! Records sales in a process-lifetime in-memory store and serves the
//! `/data` and `/calculate` endpoints.

use anyhow::{Context, Result};
use dataflow_api::{create_router, ApiConfig, AppState};
use dataflow_domain::sale::SalesService;
use dataflow_memory::InMemorySaleRepository;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;

    // Initialize tracing
    config.logging.init()?;

    info!("Starting DataFlow API");

    // Storage lives for the whole process and is owned by the service
    let repository = InMemorySaleRepository::new();
    let service = SalesService::new(repository);
    let state = AppState::new(service);

    // Build HTTP router
    let app = create_router(state, config.max_body_bytes);

    let addr = config.bind_addr();
    info!(addr = %addr, max_body_bytes = config.max_body_bytes, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
