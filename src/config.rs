//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing required env var {0}")]
    Missing(&'static str),

    /// A value is present but malformed.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl UpstreamTimeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the upstream account API, without trailing slash.
    pub api_login: String,
    pub port: u16,
    pub timeouts: UpstreamTimeouts,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `API_LOGIN`: upstream account API base URL
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `UPSTREAM_REQUEST_TIMEOUT_SECS`: default 30
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `API_LOGIN` is missing or not an http(s) URL, or
    /// if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_login = parse_base_url(std::env::var("API_LOGIN").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let timeouts = UpstreamTimeouts {
            request_secs: env_parse_u64("UPSTREAM_REQUEST_TIMEOUT_SECS", DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("UPSTREAM_CONNECT_TIMEOUT_SECS", DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { api_login, port, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).ok_or(ConfigError::Missing("API_LOGIN"))?;
    if !raw.starts_with("http://") && !raw.starts_with("https://") {
        return Err(ConfigError::Invalid { var: "API_LOGIN", reason: format!("expected http(s) URL, got '{raw}'") });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
