//! Server configuration read from the environment.

use axum::http::HeaderValue;
use notebook_core::defaults;
use notebook_core::{Error, Result};

/// Everything the `notebook-api` binary needs to start both surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    /// JSON API port.
    pub port: u16,
    /// HTML form UI port.
    pub web_port: u16,
    pub web_enabled: bool,
    pub db_max_connections: u32,
    /// Raw comma-separated CORS origins; see [`parse_allowed_origins`].
    pub allowed_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: defaults::DATABASE_URL.to_string(),
            host: defaults::HOST.to_string(),
            port: defaults::API_PORT,
            web_port: defaults::WEB_PORT,
            web_enabled: true,
            db_max_connections: defaults::DB_MAX_CONNECTIONS,
            allowed_origins: defaults::ALLOWED_ORIGINS.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to [`notebook_core::defaults`]; set but malformed
    /// numbers are a configuration error rather than a silent default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Self::default();
        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(base.database_url),
            host: lookup("HOST").unwrap_or(base.host),
            port: parse_var(&lookup, "PORT", base.port)?,
            web_port: parse_var(&lookup, "WEB_PORT", base.web_port)?,
            web_enabled: lookup("WEB_ENABLED")
                .map(|v| parse_flag(&v))
                .unwrap_or(base.web_enabled),
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", base.db_max_connections)?,
            allowed_origins: lookup("ALLOWED_ORIGINS").unwrap_or(base.allowed_origins),
        })
    }

    /// `host:port` for the JSON API.
    pub fn api_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `host:port` for the form UI.
    pub fn web_addr(&self) -> String {
        format!("{}:{}", self.host, self.web_port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("{} must be a number, got '{}': {}", key, raw, e))),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

/// Parse a comma-separated origin list into header values.
///
/// Blank entries are skipped and unparsable ones are logged and dropped. An
/// empty list falls back to [`defaults::ALLOWED_ORIGINS`].
pub fn parse_allowed_origins(origins_str: &str) -> Vec<HeaderValue> {
    let source = if origins_str.trim().is_empty() {
        defaults::ALLOWED_ORIGINS
    } else {
        origins_str
    };

    source
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}
