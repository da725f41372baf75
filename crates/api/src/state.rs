use std::sync::Arc;

use taskboard_store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory category/task store.
    pub store: Arc<Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by a fresh, empty store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(Store::new()),
            config: Arc::new(config),
        }
    }
}
