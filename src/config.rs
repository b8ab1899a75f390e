//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines
//! constants for default listen addresses, logging, and HTTP cache headers.
//! `AppConfig` is the root configuration struct. Every field has a default so
//! the service runs with no config file at all, which is the common case for
//! container deployments where the port comes from the task definition.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Per-route Cache-Control header values for upstream caches and the load
// balancer. The API responses embed a per-call timestamp, so they must never
// be served from cache.

/// Cache lifetime in seconds for static text content
pub const HTTP_CACHE_STATIC_TEXT_MAX_AGE: u32 = 60;

/// API responses - regenerated every call, never cacheable
pub const CACHE_CONTROL_API: &str = "no-store";

/// Static text content - short public cache
pub const CACHE_CONTROL_STATIC_TEXT: &str =
    formatcp!("public, max-age={}", HTTP_CACHE_STATIC_TEXT_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default listen host (all interfaces, for container deployment)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "fargate_hello=debug,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the default config
    /// file does not exist.
    ///
    /// A missing file at an explicitly supplied path is still an error; only
    /// the built-in default path may be silently absent.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        Self::load_or_default_at(path, DEFAULT_CONFIG_PATH)
    }

    fn load_or_default_at(path: &str, default_path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() && path == default_path {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Apply CLI overrides on top of file or default configuration.
    ///
    /// CLI values win over everything loaded from disk.
    pub fn apply_overrides(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            self.http.port = port;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_with_empty_file() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn toml_values_are_honored() {
        let config: AppConfig = toml::from_str(
            r#"
            [http]
            host = "127.0.0.1"
            port = 9090

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let config: AppConfig = toml::from_str("[http]\nport = 3000\n").unwrap();
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nport = 8181").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, 8181);
    }

    #[test]
    fn missing_default_path_yields_defaults() {
        // Point the default path into an empty temp dir so the file is
        // genuinely absent regardless of the working directory.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        let path = path.to_str().unwrap();
        let config = AppConfig::load_or_default_at(path, path).unwrap();
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, DEFAULT_PORT);
    }

    #[test]
    fn cli_port_override_beats_config_file_value() {
        let mut config: AppConfig = toml::from_str("[http]\nport = 9090\n").unwrap();
        config.apply_overrides(Some(3000));
        assert_eq!(config.http.port, 3000);
    }

    #[test]
    fn absent_cli_override_keeps_config_file_value() {
        let mut config: AppConfig = toml::from_str("[http]\nport = 9090\n").unwrap();
        config.apply_overrides(None);
        assert_eq!(config.http.port, 9090);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = AppConfig::load_or_default("/nonexistent/custom.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http\nport = oops").unwrap();
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
