use crate::config::Config;
use crate::session::SessionStore;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct ServerStateData {
    pub db_pool: SqlitePool,
    pub sessions: SessionStore,
    pub config: Config,
}

pub type ServerState = Arc<ServerStateData>;

impl ServerStateData {
    pub fn new(db_pool: SqlitePool, config: Config) -> ServerState {
        Arc::new(ServerStateData {
            sessions: SessionStore::new(config.session_ttl_minutes),
            db_pool,
            config,
        })
    }
}
