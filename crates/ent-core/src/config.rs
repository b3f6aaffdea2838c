//! Configuration types and loading
//!
//! Each service binary builds an [`AppConfig`] for its [`ServiceKind`]: the
//! per-service defaults first, then environment overrides carrying the
//! service prefix (`RACING_*` / `SPORTS_*`).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which of the two query services a configuration is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Racing,
    Sports,
}

impl ServiceKind {
    /// Environment variable prefix for this service
    pub fn env_prefix(&self) -> &'static str {
        match self {
            Self::Racing => "RACING",
            Self::Sports => "SPORTS",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Racing => "racing",
            Self::Sports => "sports",
        }
    }

    fn default_listen_address(&self) -> &'static str {
        match self {
            Self::Racing => "127.0.0.1:9000",
            Self::Sports => "127.0.0.1:8500",
        }
    }

    fn default_database_url(&self) -> &'static str {
        match self {
            Self::Racing => "sqlite://db/racing.db?mode=rwc",
            Self::Sports => "sqlite://db/events.db?mode=rwc",
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub service: ServiceKind,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Server configuration
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://db/racing.db?mode=rwc`
    pub url: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Pool acquire timeout in seconds
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Create config with a specific URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            acquire_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// `host:port` the RPC server binds to
    pub listen_address: String,
}

impl AppConfig {
    /// Defaults for a service, without looking at the environment
    pub fn for_service(service: ServiceKind) -> Self {
        Self {
            service,
            database: DatabaseConfig::with_url(service.default_database_url()),
            server: ServerConfig {
                listen_address: service.default_listen_address().to_string(),
            },
        }
    }

    /// Load configuration from environment variables
    pub fn from_env(service: ServiceKind) -> Result<Self, ConfigError> {
        Self::from_lookup(service, |key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(service: ServiceKind, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::for_service(service);
        let prefix = service.env_prefix();

        let key = format!("{}_DATABASE_URL", prefix);
        if let Some(url) = lookup(&key) {
            if url.trim().is_empty() {
                return Err(ConfigError::invalid(key, "must not be empty"));
            }
            config.database.url = url;
        }

        let key = format!("{}_DB_MAX_CONNECTIONS", prefix);
        if let Some(value) = lookup(&key) {
            config.database.max_connections = match value.parse::<u32>() {
                Ok(0) => return Err(ConfigError::invalid(key, "must be at least 1")),
                Ok(n) => n,
                Err(e) => return Err(ConfigError::invalid(key, e)),
            };
        }

        let key = format!("{}_LISTEN_ADDRESS", prefix);
        if let Some(addr) = lookup(&key) {
            config.set_listen_address(addr)?;
        }

        Ok(config)
    }

    /// Replace the listen address after checking it has a `host:port` shape
    pub fn set_listen_address(&mut self, addr: impl Into<String>) -> Result<(), ConfigError> {
        let addr = addr.into();
        let key = format!("{}_LISTEN_ADDRESS", self.service.env_prefix());

        let (host, port) = addr
            .rsplit_once(':')
            .ok_or_else(|| ConfigError::invalid(&key, format!("'{}' is not host:port", addr)))?;
        if host.is_empty() {
            return Err(ConfigError::invalid(&key, format!("'{}' has no host", addr)));
        }
        port.parse::<u16>()
            .map_err(|e| ConfigError::invalid(&key, format!("'{}': {}", addr, e)))?;

        self.server.listen_address = addr;
        Ok(())
    }
}
