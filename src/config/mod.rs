//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so the binaries start without any setup. The source catalog is not
//! configured here: it ships with the crate (see `catalog`).

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use crate::fetcher::{BROWSER_USER_AGENT, DEFAULT_FETCH_TIMEOUT, FetchSettings};

/// Environment variable names.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";
pub const ENV_FETCH_USER_AGENT: &str = "FETCH_USER_AGENT";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    database_url: Option<String>,
    bind_addr: String,
    fetch: FetchSettings,
    log_format: LogFormat,
}

impl Config {
    pub fn new(
        database_url: Option<String>,
        bind_addr: impl Into<String>,
        fetch: FetchSettings,
    ) -> Self {
        Self {
            database_url,
            bind_addr: bind_addr.into(),
            fetch,
            log_format: LogFormat::Text,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var(ENV_DATABASE_URL)
            .ok()
            .filter(|url| !url.trim().is_empty());
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let timeout = match env::var(ENV_FETCH_TIMEOUT_SECS) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_FETCH_TIMEOUT,
        };
        let user_agent = env::var(ENV_FETCH_USER_AGENT)
            .ok()
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| BROWSER_USER_AGENT.to_string());

        let log_format = match env::var(ENV_LOG_FORMAT).ok().as_deref() {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    field: ENV_LOG_FORMAT,
                    reason: format!("expected 'text' or 'json', got '{}'", other),
                });
            }
        };

        Ok(Self {
            database_url,
            bind_addr,
            fetch: FetchSettings {
                timeout,
                user_agent,
            },
            log_format,
        })
    }

    /// PostgreSQL connection string. Without one, saved courses live in
    /// memory.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }
    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    pub fn fetch(&self) -> &FetchSettings {
        &self.fetch
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    /// Development defaults (mirrors `from_env` with no env overrides).
    fn default() -> Self {
        Self::new(None, DEFAULT_BIND_ADDR, FetchSettings::default())
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue {
            field: ENV_FETCH_TIMEOUT_SECS,
            reason: format!("expected a positive number of seconds, got '{}'", raw),
        }),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
