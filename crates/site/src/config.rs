//! Site configuration loaded from environment variables.
//!
//! Business details (name, phone, hours, ...) are catalog data in
//! `gearbox_core::catalog`; this module only covers deployment settings.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `SITE_BASE_URL` - Public URL used for canonical links and the sitemap
//!   (default: `http://localhost:3000`)
//! - `SITE_CONTENT_DIR` - Markdown pages (default: `crates/site/content`)
//! - `SITE_STATIC_DIR` - Static assets (default: `crates/site/static`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Trace sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for canonical links and the sitemap
    pub base_url: Url,
    /// Directory holding `pages/*.md`
    pub content_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Error tracking configuration
    pub sentry: SentryConfig,
}

/// Sentry error tracking configuration.
#[derive(Debug, Clone)]
pub struct SentryConfig {
    pub dsn: Option<String>,
    pub environment: Option<String>,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: None,
            sample_rate: 1.0,
            traces_sample_rate: 0.0,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env_or_default("SITE_HOST", "127.0.0.1")?;
        let port = parse_env_or_default("SITE_PORT", "3000")?;
        let base_url = parse_base_url(
            "SITE_BASE_URL",
            &get_env_or_default("SITE_BASE_URL", "http://localhost:3000"),
        )?;
        let content_dir =
            PathBuf::from(get_env_or_default("SITE_CONTENT_DIR", "crates/site/content"));
        let static_dir =
            PathBuf::from(get_env_or_default("SITE_STATIC_DIR", "crates/site/static"));

        let sentry = SentryConfig {
            dsn: get_optional_env("SENTRY_DSN"),
            environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sample_rate: parse_rate("SENTRY_SAMPLE_RATE", 1.0)?,
            traces_sample_rate: parse_rate("SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
        };

        Ok(Self {
            host,
            port,
            base_url,
            content_dir,
            static_dir,
            sentry,
        })
    }

    /// Defaults for every setting except `base_url`, without reading the
    /// environment.
    #[must_use]
    pub fn for_base_url(base_url: Url) -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url,
            content_dir: PathBuf::from("crates/site/content"),
            static_dir: PathBuf::from("crates/site/static"),
            sentry: SentryConfig::default(),
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Absolute URL for a site path, e.g. `/services` ->
    /// `https://gearboxauto.example/services`.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable (or its default) with `FromStr`.
fn parse_env_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a sample rate in 0.0-1.0.
fn parse_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    let Some(raw) = get_optional_env(key) else {
        return Ok(default);
    };
    let rate = raw
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

/// Validate a public base URL: http(s), with a host, no query or fragment.
fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let invalid = |msg: String| ConfigError::InvalidEnvVar(key.to_string(), msg);

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("scheme must be http or https (got {})", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("must have a host".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not have a query or fragment".to_string()));
    }
    Ok(url)
}
