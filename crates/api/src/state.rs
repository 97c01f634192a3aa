use std::sync::Arc;

use tourdesk_core::pagination::PageRequest;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tourdesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: tourdesk_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    /// Clamp raw `page` / `per_page` parameters with the configured page sizes.
    pub fn page_request(&self, page: Option<i64>, per_page: Option<i64>) -> PageRequest {
        PageRequest::new(
            page,
            per_page,
            self.config.default_page_size,
            self.config.max_page_size,
        )
    }
}
