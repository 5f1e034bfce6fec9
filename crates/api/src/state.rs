use std::sync::Arc;

use filmcrew_db::DbPool;

use crate::config::ServerConfig;

/// Handle passed to every handler through `State<AppState>`.
///
/// Both fields are cheap to clone: the pool is reference counted internally.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    /// Read by handlers for the configured `FieldRules`.
    pub config: Arc<ServerConfig>,
}
