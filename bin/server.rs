// Receipt Points - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use tracing::info;

use receipt_points::api::{build_router, AppState};
use receipt_points::logging::init_logger;
use receipt_points::{ReceiptService, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::load().context("Failed to load configuration")?;
    init_logger(false, config.log_json);

    let state = AppState::new(ReceiptService::new());
    let app = build_router(state, config.enable_cors);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.addr))?;

    info!(addr = %config.addr, cors = config.enable_cors, "receipt server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("receipt server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed
        std::future::pending::<()>().await;
    }
}
