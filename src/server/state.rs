//! Server state and configuration.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

use crate::catalog::CatalogGateway;
use crate::config::GatewayConfig;
use crate::session::LabelQueueSession;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:3000")
    pub listen_addr: String,
    /// Where catalog searches go
    pub gateway: GatewayConfig,
}

/// Application state shared across handlers.
///
/// One session per server: the tool is a single clerk's workstation.
pub struct AppState {
    pub session: RwLock<LabelQueueSession>,
    pub gateway: Arc<dyn CatalogGateway>,
    /// Unix timestamp of server boot for cache busting.
    pub boot_time: u64,
}

impl AppState {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            session: RwLock::new(LabelQueueSession::new()),
            gateway,
            boot_time,
        }
    }
}
