use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the
/// `MELOMOOD_` prefix. For example: `MELOMOOD_SERVER__PORT=5000`,
/// `MELOMOOD_STORAGE__MODE=memory`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Event storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Which mood event store backend to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// In-process memory, lost on restart
    Memory,
    /// JSON-lines log file under `data_dir`
    File,
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageMode::Memory => write!(f, "memory"),
            StorageMode::File => write!(f, "file"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend
    #[serde(default = "default_storage_mode")]
    pub mode: StorageMode,

    /// Directory holding the event log (file mode only)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            mode: default_storage_mode(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_storage_mode() -> StorageMode {
    StorageMode::File
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Message(format!("Invalid socket address: {e}")))
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables should be prefixed with `MELOMOOD_` and use
    /// double underscores for nested values:
    /// - `MELOMOOD_SERVER__PORT` -> server.port
    /// - `MELOMOOD_STORAGE__MODE` -> storage.mode
    /// - `MELOMOOD_STORAGE__DATA_DIR` -> storage.data_dir
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MELOMOOD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
