//! Server configuration
//!
//! Only the listening port and the CORS allow-list come from the
//! environment (optionally seeded from a `.env` file); everything else is a
//! fixed default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::error::CoreError;
use crate::Result;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Interface to bind
    pub host: String,
    /// Listening port (`PORT`)
    pub port: u16,
    /// Origins allowed to make credentialed cross-origin calls (`CORS_ALLOWED_LIST`)
    pub allowed_origins: Vec<String>,
    /// Lifetime of an issued session and its cookie
    pub session_ttl: Duration,
    /// How often expired sessions are swept from memory
    pub sweep_interval: Duration,
}

impl Config {
    /// Load from `PORT` and `CORS_ALLOWED_LIST`
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT").ok();
        let origins = std::env::var("CORS_ALLOWED_LIST").ok();

        Self::from_vars(port.as_deref(), origins.as_deref())
    }

    /// Load a `.env` file into the process environment without overriding
    /// variables that are already set. `None` searches the current directory
    /// and its parents. Returns the loaded file, or `None` if there is none.
    pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>> {
        let loaded = match path {
            Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
            None => dotenvy::dotenv(),
        };

        match loaded {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(CoreError::Config(format!("Invalid .env file: {}", e))),
        }
    }

    pub fn from_vars(port: Option<&str>, allowed_origins: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) {
            config.port = port
                .parse()
                .map_err(|e| CoreError::Config(format!("Invalid PORT {:?}: {}", port, e)))?;
        }

        if let Some(list) = allowed_origins {
            config.allowed_origins = parse_origins(list)?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
            session_ttl: Duration::from_secs(pantry_session::DEFAULT_SESSION_TTL_SECS as u64),
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }
}

/// Parse a comma-separated origin list into serialized origins
/// (`scheme://host[:port]`, no path or trailing slash).
fn parse_origins(list: &str) -> Result<Vec<String>> {
    let mut origins = Vec::new();

    for raw in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let url = Url::parse(raw)
            .map_err(|e| CoreError::Config(format!("Invalid origin {:?}: {}", raw, e)))?;

        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(CoreError::Config(format!(
                "Origin {:?} has no scheme and host",
                raw
            )));
        }

        let origin = origin.ascii_serialization();
        if !origins.contains(&origin) {
            origins.push(origin);
        }
    }

    Ok(origins)
}
