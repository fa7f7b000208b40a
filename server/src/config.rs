//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before [`ServerConfig::from_env`] runs, so
//! values there behave like real environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::path::PathBuf;

pub const ADDR_ENV: &str = "CLIENTIQ_ADDR";
pub const ASSETS_DIR_ENV: &str = "CLIENTIQ_ASSETS_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {ADDR_ENV} '{value}': {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

/// Overrides applied on top of the Leptos options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address; falls back to the Leptos `site-addr`.
    pub addr: Option<SocketAddr>,
    /// Static asset directory; falls back to the Leptos site root.
    pub assets_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `CLIENTIQ_ADDR`: `host:port` to bind
    /// - `CLIENTIQ_ASSETS_DIR`: directory of static files (icons, manifest, `sw.js`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddr`] when `CLIENTIQ_ADDR` is set but
    /// not a socket address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env_value(ADDR_ENV), env_value(ASSETS_DIR_ENV))
    }

    pub(crate) fn from_values(addr: Option<String>, assets_dir: Option<String>) -> Result<Self, ConfigError> {
        let addr = addr
            .map(|value| value.parse::<SocketAddr>().map_err(|source| ConfigError::InvalidAddr { value, source }))
            .transpose()?;
        Ok(Self { addr, assets_dir: assets_dir.map(PathBuf::from) })
    }

    pub fn resolve_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        self.addr.unwrap_or(site_addr)
    }

    pub fn resolve_assets_dir(&self, site_root: &str) -> PathBuf {
        self.assets_dir.clone().unwrap_or_else(|| PathBuf::from(site_root))
    }
}

/// Trimmed value of `key`; unset and blank are both `None`.
pub(crate) fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_owned())
        .filter(|value| !value.is_empty())
}
