use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use keyring::Entry;
use tracing::warn;

/// Session file name in cache directory
const SESSION_FILE: &str = "session.json";

/// Keychain service name for the keyring backend
const SERVICE_NAME: &str = "legalyze";

/// Fixed keys under which session state is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StorageKey {
    AccessToken,
    RefreshToken,
    User,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [
        StorageKey::AccessToken,
        StorageKey::RefreshToken,
        StorageKey::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::AccessToken => "access_token",
            StorageKey::RefreshToken => "refresh_token",
            StorageKey::User => "user",
        }
    }
}

/// Synchronous key-value storage for session credentials.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: StorageKey) -> Result<Option<String>>;
    fn set(&self, key: StorageKey, value: &str) -> Result<()>;
    fn remove(&self, key: StorageKey) -> Result<()>;

    /// Remove every session key
    fn clear(&self) -> Result<()> {
        for key in StorageKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }
}

// ============================================================================
// File backend
// ============================================================================

/// Stores the session as a JSON object in `<cache_dir>/session.json`.
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            path: cache_dir.join(SESSION_FILE),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .context("Failed to read session file")?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&contents) {
            Ok(map) => Ok(map),
            Err(e) => {
                // Unreadable session is the same as no session; the next write replaces it
                warn!(path = %self.path.display(), error = %e, "Ignoring corrupt session file");
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if map.is_empty() {
            if self.path.exists() {
                std::fs::remove_file(&self.path).context("Failed to remove session file")?;
            }
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, contents).context("Failed to write session file")?;
        Ok(())
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>> {
        let _guard = self.guard();
        Ok(self.read_map()?.remove(key.as_str()))
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<()> {
        let _guard = self.guard();
        let mut map = self.read_map()?;
        map.insert(key.as_str().to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        let _guard = self.guard();
        let mut map = self.read_map()?;
        if map.remove(key.as_str()).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }

    /// Deletes the file without parsing it
    fn clear(&self) -> Result<()> {
        let _guard = self.guard();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("Failed to remove session file"),
        }
    }
}

// ============================================================================
// OS keychain backend
// ============================================================================

/// Stores each session key as a separate OS keychain entry.
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new() -> Self {
        Self::with_service(SERVICE_NAME)
    }

    pub fn with_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, key: StorageKey) -> Result<Entry> {
        Entry::new(&self.service, key.as_str()).context("Failed to create keyring entry")
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for KeyringStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to retrieve credential from keychain"),
        }
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<()> {
        self.entry(key)?
            .set_password(value)
            .context("Failed to store credential in keychain")
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to delete credential from keychain"),
        }
    }
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Process-local store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<StorageKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, BTreeMap<StorageKey, String>> {
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>> {
        Ok(self.values().get(&key).cloned())
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<()> {
        self.values().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        self.values().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_storage_keys_are_fixed() {
        assert_eq!(StorageKey::AccessToken.as_str(), "access_token");
        assert_eq!(StorageKey::RefreshToken.as_str(), "refresh_token");
        assert_eq!(StorageKey::User.as_str(), "user");
    }

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get(StorageKey::AccessToken).unwrap(), None);

        store.set(StorageKey::AccessToken, "abc").unwrap();
        assert_eq!(store.get(StorageKey::AccessToken).unwrap().as_deref(), Some("abc"));

        store.remove(StorageKey::AccessToken).unwrap();
        assert_eq!(store.get(StorageKey::AccessToken).unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::new(dir.path());
        store.set(StorageKey::AccessToken, "access-1").unwrap();
        store.set(StorageKey::RefreshToken, "refresh-1").unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get(StorageKey::AccessToken).unwrap().as_deref(), Some("access-1"));
        assert_eq!(reopened.get(StorageKey::RefreshToken).unwrap().as_deref(), Some("refresh-1"));
        assert_eq!(reopened.get(StorageKey::User).unwrap(), None);
    }

    #[test]
    fn test_file_store_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set(StorageKey::AccessToken, "a").unwrap();
        store.set(StorageKey::User, "{}").unwrap();
        assert!(store.path().exists());

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.get(StorageKey::AccessToken).unwrap(), None);
    }

    #[test]
    fn test_file_store_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        std::fs::write(store.path(), r#"{"access_token": "abc""#).unwrap();

        assert_eq!(store.get(StorageKey::AccessToken).unwrap(), None);

        store.clear().unwrap();
        assert!(!store.path().exists());

        std::fs::write(store.path(), "not json").unwrap();
        store.set(StorageKey::AccessToken, "fresh").unwrap();
        assert_eq!(store.get(StorageKey::AccessToken).unwrap().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_logout_with_corrupt_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStore::new(dir.path()));
        std::fs::write(store.path(), r#"{"access_token": "abc""#).unwrap();

        let session = crate::auth::SessionManager::new(store.clone());
        session.logout().unwrap();
        assert!(!store.path().exists());
        assert_eq!(session.access_token().unwrap(), None);
    }

    #[test]
    fn test_file_store_clear_without_file() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path()).clear().unwrap();
    }

    #[test]
    fn test_file_store_remove_missing_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.remove(StorageKey::RefreshToken).unwrap();
        assert!(!store.path().exists());
    }
}
