//! Configuration management for the contacts service.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory. Every setting has a default, so an
//! empty environment yields a runnable service on port 3000.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::{IpAddr, SocketAddr};

/// Configuration for the contacts service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (default: "0.0.0.0")
    pub host: IpAddr,

    /// Listening port (default: 3000)
    pub port: u16,

    /// SQLite database file, or ":memory:" (default: "./database.db")
    pub database_path: String,

    /// Upper bound applied to the `limit` query parameter (default: 100)
    pub max_page_limit: u32,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HOST`: Bind address (default: 0.0.0.0)
    /// - `PORT`: Listening port (default: 3000)
    /// - `DATABASE_PATH`: SQLite file path (default: ./database.db)
    /// - `MAX_PAGE_LIMIT`: Largest accepted page size (default: 100)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = match env::var("HOST") {
            Ok(val) => val.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "HOST".to_string(),
                reason: format!("Must be an IP address, got: {}", val),
            })?,
            Err(_) => defaults.host,
        };

        let port = Self::parse_env_u16("PORT", defaults.port)?;

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| defaults.database_path.clone());
        if database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let max_page_limit = Self::parse_env_u32("MAX_PAGE_LIMIT", defaults.max_page_limit)?;
        if max_page_limit == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_PAGE_LIMIT".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            host,
            port,
            database_path,
            max_page_limit,
            log_level,
        })
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            database_path: "./database.db".to_string(),
            max_page_limit: 100,
            log_level: "info".to_string(),
        }
    }
}
