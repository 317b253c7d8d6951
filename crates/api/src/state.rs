use std::sync::Arc;

use courier_core::availability::AvailabilityFilter;
use courier_core::catalog::EventCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: courier_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The configured event catalog, loaded once at startup.
    pub catalog: Arc<EventCatalog>,
    /// Decides which channel/event combinations are offered per user.
    pub availability: Arc<dyn AvailabilityFilter + Send + Sync>,
}
