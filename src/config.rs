//! Server configuration and environment variable handling.

use std::env;
use std::time::Duration;

/// How long to wait on a single upstream call before treating it as failed.
/// There is exactly one attempt per request; no retries.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// Default base URL of the upstream planetary-data provider.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://stevec.pythonanywhere.com/planets";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the upstream planetary-data provider
    pub upstream_base_url: String,
    /// Server bind host
    pub host: String,
    /// Server bind port
    pub port: u16,
}

impl AppConfig {
    /// Create a new application configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `UPSTREAM_BASE_URL` (optional): base URL of the planetary-data
    ///   provider (default: the public provider endpoint)
    /// - `HOST` (optional, default: 0.0.0.0): server bind host
    /// - `PORT` (optional, default: 8080): server bind port
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let upstream_base_url = env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string());
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;

        Ok(Self {
            upstream_base_url,
            host,
            port,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.upstream_base_url, DEFAULT_UPSTREAM_BASE_URL);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_upstream_timeout_is_five_seconds() {
        assert_eq!(UPSTREAM_TIMEOUT, Duration::from_secs(5));
    }
}
