//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backend::BackendConfig;
use crate::schedule::ClinicClock;
use crate::session::CookiePolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub backend: BackendSection,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub clinic: ClinicConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Clinic backend connection
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSection {
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Unset means the HTTP client's default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            request_timeout_secs: None,
        }
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub secure_cookie: bool,
}

/// Clinic wall clock and agenda hours
#[derive(Debug, Clone, Deserialize)]
pub struct ClinicConfig {
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,

    #[serde(default = "default_opening_hour")]
    pub opening_hour: u32,

    /// Exclusive
    #[serde(default = "default_closing_hour")]
    pub closing_hour: u32,
}

fn default_utc_offset() -> String {
    "-03:00".to_string()
}

fn default_opening_hour() -> u32 {
    9
}

fn default_closing_hour() -> u32 {
    12
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            utc_offset: default_utc_offset(),
            opening_hour: default_opening_hour(),
            closing_hour: default_closing_hour(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("odontobuild").join("config.toml")),
            Some(PathBuf::from("/etc/odontobuild/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `ODONTOBUILD_*` overrides read through `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("ODONTOBUILD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ODONTOBUILD_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid ODONTOBUILD_PORT"),
            }
        }

        if let Some(url) = lookup("ODONTOBUILD_BACKEND_URL") {
            self.backend.url = url;
        }

        if let Some(offset) = lookup("ODONTOBUILD_UTC_OFFSET") {
            self.clinic.utc_offset = offset;
        }

        if let Some(level) = lookup("ODONTOBUILD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ODONTOBUILD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clock()?;

        let ClinicConfig {
            opening_hour,
            closing_hour,
            ..
        } = self.clinic;
        if opening_hour >= closing_hour || closing_hour > 24 {
            return Err(ConfigError::Invalid(format!(
                "clinic hours must satisfy opening_hour < closing_hour <= 24, got {}..{}",
                opening_hour, closing_hour
            )));
        }

        if self.backend.url.trim().is_empty() {
            return Err(ConfigError::Invalid("backend.url is empty".to_string()));
        }

        Ok(())
    }

    pub fn clock(&self) -> Result<ClinicClock, ConfigError> {
        ClinicClock::parse_offset(&self.clinic.utc_offset)
            .map(ClinicClock::new)
            .ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "clinic.utc_offset must look like -03:00, got {:?}",
                    self.clinic.utc_offset
                ))
            })
    }

    /// Hour rows shown on the agenda
    pub fn agenda_hours(&self) -> Range<u32> {
        self.clinic.opening_hour..self.clinic.closing_hour
    }

    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.backend.url.clone(),
            request_timeout: self.backend.request_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn cookie_policy(&self) -> CookiePolicy {
        CookiePolicy {
            secure: self.session.secure_cookie,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# OdontoBuild Web Configuration
#
# Environment variables override these settings:
# - ODONTOBUILD_HOST
# - ODONTOBUILD_PORT
# - ODONTOBUILD_BACKEND_URL
# - ODONTOBUILD_UTC_OFFSET
# - ODONTOBUILD_LOG_LEVEL
# - ODONTOBUILD_LOG_FORMAT

[server]
# Web server host
host = "0.0.0.0"

# Web server port
port = 3000

[backend]
# Clinic backend base URL
url = "http://localhost:8000"

# Request timeout in seconds (unset: HTTP client default)
# request_timeout_secs = 10

[session]
# Mark the session cookie Secure (enable behind HTTPS)
secure_cookie = false

[clinic]
# Fixed UTC offset of the clinic's wall clock
utc_offset = "-03:00"

# Agenda rows, from opening_hour up to but excluding closing_hour
opening_hour = 9
closing_hour = 12

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:3000");
        assert_eq!(config.backend.url, "http://localhost:8000");
        assert_eq!(config.agenda_hours(), 9..12);
        assert_eq!(config.clock().unwrap().offset().local_minus_utc(), -3 * 3600);
        assert!(config.backend_config().request_timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_default_parses() {
        let file = write_config(&generate_default_config());
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.clinic.utc_offset, "-03:00");
        assert!(!config.session.secure_cookie);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file() {
        let file = write_config(
            r#"
[backend]
url = "http://api.odontobuild.cl"
request_timeout_secs = 5

[clinic]
closing_hour = 18
"#,
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.backend.url, "http://api.odontobuild.cl");
        assert_eq!(
            config.backend_config().request_timeout,
            Some(Duration::from_secs(5))
        );
        assert_eq!(config.agenda_hours(), 9..18);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/odontobuild.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let file = write_config("[server\nport = ");
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        config.clinic.utc_offset = "Santiago".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.clinic.opening_hour = 12;
        config.clinic.closing_hour = 9;
        assert!(config.validate().is_err());

        config.clinic.opening_hour = 8;
        config.clinic.closing_hour = 25;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ODONTOBUILD_PORT", "8080"),
            ("ODONTOBUILD_BACKEND_URL", "http://backend:8000"),
            ("ODONTOBUILD_UTC_OFFSET", "-04:00"),
            ("ODONTOBUILD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.backend.url, "http://backend:8000");
        assert_eq!(config.clock().unwrap().offset().local_minus_utc(), -4 * 3600);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "ODONTOBUILD_PORT").then(|| "web".to_string()));
        assert_eq!(config.server.port, 3000);
    }
}
