//! # HTTP Server for the Label Queue
//!
//! Serves the clerk UI, the session API it drives, a catalog search proxy,
//! and the printable label sheet.
//!
//! ## Usage
//!
//! ```bash
//! shelfrig serve --port 3000 --catalog-file catalog.json
//! ```
//!
//! Then open http://localhost:3000 in a browser.

mod handlers;
mod state;
mod static_files;

pub use state::{AppState, ServerConfig};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ShelfError;

/// Build the application router around `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Frontend
        .route("/", get(static_files::index))
        .route("/assets/*path", get(static_files::asset))
        // Health
        .route("/api/test-server", get(handlers::catalog::health))
        // Catalog proxy
        .route("/api/products/search", get(handlers::catalog::search))
        // Session API
        .route("/api/session", get(handlers::session::snapshot))
        .route("/api/session/toggle", post(handlers::session::toggle))
        .route("/api/session/remove", post(handlers::session::remove))
        .route("/api/session/clear", post(handlers::session::clear))
        .route("/api/session/search", post(handlers::session::search))
        .route("/api/session/scan-mode", post(handlers::session::scan_mode))
        .route("/api/session/scan", post(handlers::session::scan))
        .route("/api/session/override", post(handlers::session::set_override))
        .route(
            "/api/session/override/reset",
            post(handlers::session::reset_override),
        )
        .route(
            "/api/session/feedback/dismiss",
            post(handlers::session::dismiss_feedback),
        )
        .route("/api/session/layout", get(handlers::print::layout))
        // Printable sheet
        .route("/print", get(handlers::print::sheet))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use shelfrig::config::GatewayConfig;
/// use shelfrig::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), shelfrig::error::ShelfError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:3000".to_string(),
///     gateway: GatewayConfig::Static("catalog.json".into()),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), ShelfError> {
    let gateway = config.gateway.connect()?;
    let app = router(Arc::new(AppState::new(gateway)));

    info!(listen = %config.listen_addr, gateway = %config.gateway.describe(), "shelfrig server starting");

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            ShelfError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    info!("open http://{}/ in your browser", config.listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ShelfError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
