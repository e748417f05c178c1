//! Application configuration management.
//!
//! This module handles loading and saving the client configuration: the
//! API base URL, where session credentials are kept, and the last email
//! used to log in.
//!
//! Configuration is stored at `~/.config/legalyze/config.json`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::auth::{FileStore, KeyringStore, MemoryStore, SessionStore};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "legalyze";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Backend used when no base URL is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/";

/// HTTP request timeout in seconds.
/// Analyses run a model server-side, so this leaves room for slow responses.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Where session credentials are persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Keyring,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub storage: StorageBackend,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub last_email: Option<String>,
}

fn default_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            storage: StorageBackend::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            last_email: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    pub fn base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Build the session store selected by `storage`
    pub fn session_store(&self) -> Result<Arc<dyn SessionStore>> {
        Ok(match self.storage {
            StorageBackend::File => Arc::new(FileStore::new(&self.cache_dir()?)),
            StorageBackend::Keyring => Arc::new(KeyringStore::new()),
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.storage, StorageBackend::File);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            api_base_url: Some("https://legal.example.com/api".to_string()),
            storage: StorageBackend::Keyring,
            request_timeout_secs: 90,
            last_email: Some("ada@example.com".to_string()),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.base_url(), "https://legal.example.com/api");
        assert_eq!(loaded.storage, StorageBackend::Keyring);
        assert_eq!(loaded.request_timeout_secs, 90);
        assert_eq!(loaded.last_email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"storage":"memory"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }
}
