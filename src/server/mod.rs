//! # HTTP Server for Barcode Encoding
//!
//! Exposes the encoder over a small JSON API.
//!
//! ## Usage
//!
//! ```bash
//! linebar serve --listen 0.0.0.0:8080
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | GET | `/api/symbologies` | - | `[{"name", "label"}]` |
//! | POST | `/api/encode` | `{"text", "symbology", "policy"}` | `{"symbology", "pattern", "display_text", "encoded_text"}` |
//! | POST | `/api/encode/preview` | encode body + render overrides | `image/png` |
//!
//! Encode failures are returned as `400 {"error": "..."}`.

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::LinebarError;

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/symbologies", get(handlers::encode::list))
        .route("/api/encode", post(handlers::encode::encode))
        .route("/api/encode/preview", post(handlers::encode::preview))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use linebar::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), linebar::LinebarError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..ServerConfig::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), LinebarError> {
    let listen_addr = config.listen_addr.clone();
    let app = router(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| LinebarError::Server(format!("Failed to bind to {}: {}", listen_addr, e)))?;

    tracing::info!(addr = %listen_addr, "linebar HTTP server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| LinebarError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
