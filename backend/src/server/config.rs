//! Server configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_FILE: &str = "employees.json";

/// Storage backend selection for the employee store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local store; records are lost on restart.
    #[default]
    Memory,
    /// JSON document on local disk.
    File,
}

/// Configuration values controlling the HTTP server and store selection.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// Interface the listener binds to.
    pub host: Option<String>,
    /// Port the listener binds to.
    pub port: Option<u16>,
    /// Which store adapter backs the directory.
    pub storage: Option<StorageBackend>,
    /// Data file used by the file backend.
    pub data_file: Option<PathBuf>,
}

impl DirectorySettings {
    /// Bind host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Bind port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Selected storage backend, defaulting to in-memory.
    pub fn storage(&self) -> StorageBackend {
        self.storage.unwrap_or_default()
    }

    /// Data file path for the file backend.
    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}
