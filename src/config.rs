use std::env;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_path: String,
    pub hashed_admin_password: String,
    pub session_ttl_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let addr = env::var("MINIBANK_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;
        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "data/minibank.db".to_string());
        let hashed_admin_password = env::var("HASHED_ADMIN_PASSWORD")
            .map_err(|_| "HASHED_ADMIN_PASSWORD must be set")?;
        let session_ttl_minutes = match env::var("SESSION_TTL_MINUTES") {
            Ok(raw) => raw.parse()?,
            Err(_) => 60,
        };

        Ok(Config {
            addr,
            database_path,
            hashed_admin_password,
            session_ttl_minutes,
        })
    }
}
