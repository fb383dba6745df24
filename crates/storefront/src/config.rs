//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SWARIVA_HOST` - Bind address (default: 127.0.0.1)
//! - `SWARIVA_PORT` - Listen port (default: 3000)
//! - `SWARIVA_BASE_URL` - Public URL (default: <http://localhost:3000>);
//!   an `https://` URL turns on secure session cookies
//! - `SWARIVA_SESSION_IDLE_MINUTES` - Session inactivity expiry (default: 120)
//! - `SWARIVA_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Minutes of inactivity before a session (and its cart) is dropped
    pub session_idle_minutes: i64,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub sentry_sample_rate: f32,
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_idle_minutes: 120,
            static_dir: PathBuf::from("crates/storefront/static"),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let session_idle_minutes =
            parse_env_or("SWARIVA_SESSION_IDLE_MINUTES", defaults.session_idle_minutes)?;
        if session_idle_minutes <= 0 {
            return Err(ConfigError::InvalidEnvVar(
                "SWARIVA_SESSION_IDLE_MINUTES".to_string(),
                "must be positive".to_string(),
            ));
        }

        Ok(Self {
            host: parse_env_or("SWARIVA_HOST", defaults.host)?,
            port: parse_env_or("SWARIVA_PORT", defaults.port)?,
            base_url: get_optional_env("SWARIVA_BASE_URL").unwrap_or(defaults.base_url),
            session_idle_minutes,
            static_dir: get_optional_env("SWARIVA_STATIC_DIR")
                .map_or(defaults.static_dir, PathBuf::from),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_rate("SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?,
            sentry_traces_sample_rate: parse_rate(
                "SENTRY_TRACES_SAMPLE_RATE",
                defaults.sentry_traces_sample_rate,
            )?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an environment variable, or use `default` when it is unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |value| parse_value(key, &value))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a sample rate and check it lies in 0.0..=1.0.
fn parse_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    let rate = parse_env_or(key, default)?;
    validate_rate(key, rate)
}

fn validate_rate(key: &str, rate: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}
