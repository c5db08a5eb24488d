//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `stayease.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "stayease.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// `SQLite` database settings.
    pub database: DatabaseConfig,
    /// Booking store selection.
    pub storage: StorageConfig,
    /// CSV import settings.
    pub import: ImportConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file path.
    pub path: PathBuf,
    /// SQL script run once when the database file does not exist yet.
    pub setup_script: PathBuf,
}

/// Which booking store backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Local `SQLite` file.
    #[default]
    Sqlite,
    /// JSON document collection.
    Document,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "document" => Ok(Self::Document),
            other => Err(ConfigError::Validation(format!(
                "unknown storage backend {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite"),
            Self::Document => f.write_str("document"),
        }
    }
}

/// Booking store configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Selected backend.
    pub backend: Backend,
    /// File mirroring the document collection. In-memory only when unset.
    pub document_path: Option<PathBuf>,
    /// Insert the demo bookings at startup when the store is empty.
    pub seed_on_start: bool,
}

/// CSV import configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Bookings CSV read by `stayease-import` when no path is given.
    pub csv_path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `stayease.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("STAYEASE_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("STAYEASE_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Some(val) = var("STAYEASE_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("STAYEASE_DATABASE_PATH") {
            self.database.path = PathBuf::from(val);
        }
        if let Some(val) = var("STAYEASE_SETUP_SCRIPT") {
            self.database.setup_script = PathBuf::from(val);
        }
        if let Some(val) = var("STAYEASE_BACKEND") {
            self.storage.backend = val.parse()?;
        }
        if let Some(val) = var("STAYEASE_DOCUMENT_PATH") {
            self.storage.document_path = Some(PathBuf::from(val));
        }
        if let Some(val) = var("STAYEASE_CSV_PATH") {
            self.import.csv_path = PathBuf::from(val);
        }
        if let Some(val) = var("STAYEASE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("stayease.db"),
            setup_script: PathBuf::from("database_setup.sql"),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("hotel_bookings_200_new.csv"),
        }
    }
}

/// Filter used when none is configured, or when the configured one is invalid.
pub const DEFAULT_LOG_FILTER: &str = "stayeased=info,stayease=info,tower_http=debug";

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
