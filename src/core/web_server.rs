//! Liveness HTTP endpoint for external uptime monitoring.
//!
//! Runs on HEALTH_PORT when set, alongside the Telegram dispatcher. Not part
//! of the bot protocol; deployment platforms poll it to see the process alive.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Start the liveness server.
pub async fn start_health_server(port: u16) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let app = Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler));

    log::info!("Starting liveness endpoint on http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET / and GET /health, static acknowledgment.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "Bot is running")
}
