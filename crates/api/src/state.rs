use std::sync::Arc;

use roster_db::PersonStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Person storage. In production this is the PostgreSQL pool.
    pub store: Arc<dyn PersonStore>,
}
