//! Server configuration.
//!
//! Read once at start-up from environment variables. Every setting has a
//! default, so an empty environment gives a working server against the
//! public API.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::arrivals::ArrivalsClientConfig;

/// Environment variable names.
pub const ENV_API_BASE_URL: &str = "BUS_API_BASE_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "BUS_API_TIMEOUT_SECS";
pub const ENV_SERVER_ADDR: &str = "BUS_SERVER_ADDR";
pub const ENV_MOCK_DATA_DIR: &str = "BUS_MOCK_DATA_DIR";
pub const ENV_STATIC_DIR: &str = "BUS_STATIC_DIR";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {name}: {reason}")]
pub struct ConfigError {
    name: &'static str,
    value: String,
    reason: &'static str,
}

/// Configuration for the whole server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Arrivals API client settings.
    pub api: ArrivalsClientConfig,

    /// When set, arrivals are served from JSON files in this directory
    /// instead of the live API.
    pub mock_data_dir: Option<PathBuf>,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_BASE_URL) {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError {
                    name: ENV_API_BASE_URL,
                    value: url,
                    reason: "must start with http:// or https://",
                });
            }
            config.api = config.api.with_base_url(url);
        }

        if let Some(raw) = get(ENV_API_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&s| s > 0)
                .ok_or_else(|| ConfigError {
                    name: ENV_API_TIMEOUT_SECS,
                    value: raw.clone(),
                    reason: "must be a positive whole number of seconds",
                })?;
            config.api = config.api.with_timeout(secs);
        }

        if let Some(raw) = get(ENV_SERVER_ADDR) {
            config.addr = raw.trim().parse().map_err(|_| ConfigError {
                name: ENV_SERVER_ADDR,
                value: raw.clone(),
                reason: "must be a socket address like 127.0.0.1:3000",
            })?;
        }

        if let Some(dir) = get(ENV_MOCK_DATA_DIR) {
            config.mock_data_dir = Some(PathBuf::from(dir));
        }

        if let Some(dir) = get(ENV_STATIC_DIR) {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Set the listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Serve arrivals from JSON files instead of the live API.
    pub fn with_mock_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.mock_data_dir = Some(dir.into());
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            api: ArrivalsClientConfig::default(),
            mock_data_dir: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrivals::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn default_config() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.mock_data_dir.is_none());
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            (ENV_API_BASE_URL, "http://localhost:9000"),
            (ENV_API_TIMEOUT_SECS, "5"),
            (ENV_SERVER_ADDR, "0.0.0.0:8080"),
            (ENV_MOCK_DATA_DIR, "data/mock_stops"),
            (ENV_STATIC_DIR, "/srv/static"),
        ])
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.mock_data_dir, Some(PathBuf::from("data/mock_stops")));
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn empty_values_are_ignored() {
        let config = config_from(&[(ENV_MOCK_DATA_DIR, ""), (ENV_SERVER_ADDR, "  ")]).unwrap();
        assert!(config.mock_data_dir.is_none());
        assert_eq!(config.addr.port(), 3000);
    }

    #[test]
    fn rejects_bad_timeout() {
        for raw in ["abc", "0", "-1"] {
            let err = config_from(&[(ENV_API_TIMEOUT_SECS, raw)]).unwrap_err();
            assert!(err.to_string().contains(ENV_API_TIMEOUT_SECS), "{err}");
        }
    }

    #[test]
    fn rejects_bad_addr() {
        let err = config_from(&[(ENV_SERVER_ADDR, "localhost")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value \"localhost\" for BUS_SERVER_ADDR: must be a socket address like 127.0.0.1:3000"
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = config_from(&[(ENV_API_BASE_URL, "ftp://example.com")]).unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn builder_methods() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let config = ServerConfig::default()
            .with_addr(addr)
            .with_mock_data_dir("data/mock_stops");

        assert_eq!(config.addr, addr);
        assert_eq!(config.mock_data_dir, Some(PathBuf::from("data/mock_stops")));
    }
}
