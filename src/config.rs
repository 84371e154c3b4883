//! Runtime settings resolved from the environment.

use crate::error::ConfigError;
use std::net::SocketAddr;

/// Connection string used when `DATABASE_URL` is unset: a local file-based store.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://Pizzas.db";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub listen_addr: SocketAddr,
}

impl Settings {
    /// Read settings from the environment. A `.env` file is honored when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into());
        let listen_addr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr { addr, source })?;
        Ok(Settings {
            database_url,
            listen_addr,
        })
    }
}
