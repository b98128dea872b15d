//! Server configuration loaded from environment variables.
//!
//! Settings come from environment variables (or a `.env` file via
//! `dotenvy`):
//!
//! | Variable        | Default      | Meaning                        |
//! |-----------------|--------------|--------------------------------|
//! | `PORT`          | `80`         | TCP port to listen on          |
//! | `TEMPLATE_PATH` | `index.html` | HTML template for `/content/html` |

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 80;

/// Template path used when `TEMPLATE_PATH` is unset or empty.
pub const DEFAULT_TEMPLATE_PATH: &str = "index.html";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port number.
    #[error("invalid PORT value {0:?}: expected a number between 0 and 65535")]
    InvalidPort(String),
}

/// Top-level server configuration.
///
/// Loaded once at startup via [`ServerConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to bind on all interfaces.
    pub port: u16,

    /// HTML template, read on every request to the HTML endpoint.
    pub template_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is present but does
    /// not parse as a `u16`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => {
                tracing::info!(port = DEFAULT_PORT, "PORT not set, using default");
                DEFAULT_PORT
            }
        };

        let template_path = non_empty(lookup("TEMPLATE_PATH"))
            .map_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH), PathBuf::from);

        Ok(Self {
            port,
            template_path,
        })
    }

    /// Socket address to bind: all IPv4 interfaces on [`Self::port`].
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
