use std::sync::Arc;

use bakehouse_db::DbPool;

use crate::config::ServerConfig;

/// State shared by every handler. Cloning is cheap: the pool is a handle and
/// the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    /// Read by the auth extractors for the JWT secret.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
