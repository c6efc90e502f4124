//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::loader::DEFAULT_API_BASE;
use crate::theme::FileThemeStore;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data loader configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
        }
    }
}

/// Demo data server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// JSON file replacing the built-in demo content
    pub content_file: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            content_file: None,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Theme preference storage
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    /// Preference file, defaults to the user config directory
    pub file: Option<String>,
}

impl ThemeConfig {
    pub fn store(&self) -> FileThemeStore {
        match &self.file {
            Some(path) => FileThemeStore::new(path),
            None => FileThemeStore::new(FileThemeStore::default_path()),
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

impl LoggingConfig {
    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` wins over the configured level.
    pub fn init(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("hydrowatch={},tower_http=info", self.level))
        });

        let registry = tracing_subscriber::registry().with(filter);
        let result = if self.format == "json" {
            registry.with(tracing_subscriber::fmt::layer().json()).try_init()
        } else {
            registry.with(tracing_subscriber::fmt::layer()).try_init()
        };

        if let Err(e) = result {
            eprintln!("Logging already initialized: {}", e);
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

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
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
            dirs::config_dir().map(|p| p.join("hydrowatch").join("config.toml")),
            Some(PathBuf::from("./hydrowatch.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(api_base) = var("HYDROWATCH_API_BASE") {
            self.client.api_base = api_base;
        }

        if let Some(host) = var("HYDROWATCH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("HYDROWATCH_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid HYDROWATCH_PORT: {}", port),
            }
        }
        if let Some(content_file) = var("HYDROWATCH_CONTENT_FILE") {
            self.server.content_file = Some(content_file);
        }

        if let Some(theme_file) = var("HYDROWATCH_THEME_FILE") {
            self.theme.file = Some(theme_file);
        }

        if let Some(level) = var("HYDROWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("HYDROWATCH_LOG_FORMAT") {
            self.logging.format = format;
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
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# HydroWatch Configuration
#
# Environment variables override these settings:
# - HYDROWATCH_API_BASE
# - HYDROWATCH_HOST
# - HYDROWATCH_PORT
# - HYDROWATCH_CONTENT_FILE
# - HYDROWATCH_THEME_FILE
# - HYDROWATCH_LOG_LEVEL
# - HYDROWATCH_LOG_FORMAT

[client]
# Base address of the data API (info, energy, quality, status)
api_base = "http://localhost:8000/api"

[server]
# Demo data server host
host = "0.0.0.0"

# Demo data server port
port = 8000

# Allowed CORS origins (empty = any origin)
cors_origins = []

# Optional JSON file replacing the built-in demo content
# content_file = "./demo-content.json"

[theme]
# Where the CLI keeps the light/dark preference
# file = "~/.config/hydrowatch/theme"

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

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.client.api_base, DEFAULT_API_BASE);
        assert_eq!(config.server.addr(), "0.0.0.0:8000");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.client.api_base, DEFAULT_API_BASE);
        assert_eq!(config.server.port, 8000);
        assert!(config.server.cors_origins.is_empty());
        assert!(config.theme.file.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("[server]\nport = 9100\n").unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.client.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_invalid_file() {
        let err = Config::parse("[server\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hydrowatch.toml");
        std::fs::write(&path, "port = [").unwrap();

        match Config::load(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected: {:?}", other),
        }

        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HYDROWATCH_API_BASE", "http://plant.local/api"),
            ("HYDROWATCH_PORT", "not-a-port"),
            ("HYDROWATCH_THEME_FILE", "/tmp/theme"),
            ("HYDROWATCH_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.client.api_base, "http://plant.local/api");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.theme.store().path(), Path::new("/tmp/theme"));
        assert_eq!(config.logging.format, "json");
    }
}
