//! Runtime settings read from the environment (and `.env` when present).

use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
const DEFAULT_PORT: u16 = 7071;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not in the correct format: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = match lookup("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "HOST", value })?,
            None => DEFAULT_HOST,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        Ok(Config { host, port, database_url })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
