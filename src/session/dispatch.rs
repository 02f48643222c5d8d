//! Async driver: runs lookups against a gateway and feeds results back.

use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::{Command, Effect, LabelQueueSession};
use crate::catalog::CatalogGateway;

/// Apply `command`, then resolve every lookup it asked for.
///
/// The session lock is released while the gateway call is in flight, so
/// other commands (another scan, an override edit) may interleave. Each
/// lookup applies its result on its own when it completes.
///
/// Returns every effect produced, lookups and their follow-ups included.
pub async fn dispatch(
    session: &RwLock<LabelQueueSession>,
    gateway: &dyn CatalogGateway,
    command: Command,
) -> Vec<Effect> {
    let mut effects = session.write().await.apply(command, Instant::now());

    let mut index = 0;
    while index < effects.len() {
        if let Effect::Lookup(request) = &effects[index] {
            let request = request.clone();
            let result = gateway.search(&request.query).await;
            match &result {
                Ok(items) => info!(
                    id = %request.id,
                    gateway = gateway.name(),
                    results = items.len(),
                    "lookup resolved"
                ),
                Err(e) => warn!(
                    id = %request.id,
                    gateway = gateway.name(),
                    error = %e,
                    "lookup failed"
                ),
            }

            let follow_up = session
                .write()
                .await
                .apply(Command::LookupResolved { request, result }, Instant::now());
            effects.extend(follow_up);
        }
        index += 1;
    }

    effects
}
