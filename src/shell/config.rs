//! Cart service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `CATALOG_BASE_URL` - Catalog service root (default: `http://localhost:3333`)
//! - `CATALOG_TIMEOUT_SECS` - Per-request timeout against the catalog (default: 10)
//! - `CART_STORAGE_DIR` - Directory holding the cart mirror (default: `.cart`)
//! - `CART_STORAGE_KEY` - Key the mirror is stored under (default: `@RocketShoes:cart`)
//! - `CART_HOST` - Bind address (default: 127.0.0.1)
//! - `CART_PORT` - Listen port (default: 8080)

use crate::shared::infrastructure::cart_storage::DEFAULT_STORAGE_KEY;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_CATALOG_BASE_URL: &str = "http://localhost:3333";
const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;
const DEFAULT_STORAGE_DIR: &str = ".cart";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    pub catalog_base_url: String,
    pub catalog_timeout: Duration,
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub host: IpAddr,
    pub port: u16,
}

impl CartConfig {
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests need not touch
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_base_url = lookup("CATALOG_BASE_URL")
            .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string());
        if !catalog_base_url.starts_with("http://") && !catalog_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvVar(
                "CATALOG_BASE_URL".to_string(),
                format!("expected an http(s) URL, got {catalog_base_url}"),
            ));
        }

        let timeout_secs = parse(&lookup, "CATALOG_TIMEOUT_SECS", DEFAULT_CATALOG_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CATALOG_TIMEOUT_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            catalog_base_url,
            catalog_timeout: Duration::from_secs(timeout_secs),
            storage_dir: lookup("CART_STORAGE_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR), PathBuf::from),
            storage_key: lookup("CART_STORAGE_KEY")
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            host: parse(&lookup, "CART_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?,
            port: parse(&lookup, "CART_PORT", DEFAULT_PORT)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
    }
}
