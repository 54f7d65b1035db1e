//! File-backed credential vault.
//!
//! A flat JSON object of string keys and values, loaded once at open and
//! rewritten in full on every `set`. Values are stored in plaintext, matching
//! the persistence contract of the credential settings: every keystroke is
//! written through immediately, and nothing is encrypted.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use slotwatch_core::CredentialVault;
use slotwatch_domain::{Result, SlotwatchError};
use tracing::debug;

/// Credential vault persisted as a JSON file.
#[derive(Debug)]
pub struct FileVault {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileVault {
    /// Open a vault at `path`, loading existing values.
    ///
    /// A missing file yields an empty vault; the file is created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns [`SlotwatchError::Storage`] when the file exists but cannot
    /// be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|error| {
                SlotwatchError::Storage(format!("read {}: {error}", path.display()))
            })?;
            serde_json::from_str(&raw).map_err(|error| {
                SlotwatchError::Storage(format!("parse {}: {error}", path.display()))
            })?
        } else {
            debug!(path = %path.display(), "vault file absent, starting empty");
            HashMap::new()
        };

        Ok(Self { path, values: Mutex::new(values) })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_snapshot(&self, snapshot: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|error| {
                SlotwatchError::Storage(format!("create {}: {error}", parent.display()))
            })?;
        }

        let raw = serde_json::to_string_pretty(snapshot)
            .map_err(|error| SlotwatchError::Storage(format!("serialize vault: {error}")))?;
        fs::write(&self.path, raw).map_err(|error| {
            SlotwatchError::Storage(format!("write {}: {error}", self.path.display()))
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| SlotwatchError::Storage("vault mutex poisoned".to_string()))
    }
}

#[async_trait]
impl CredentialVault for FileVault {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let snapshot = {
            let mut values = self.lock()?;
            values.insert(key.to_string(), value.to_string());
            values.clone()
        };
        self.write_snapshot(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let vault = FileVault::open(dir.path().join("vault.json")).unwrap();

        assert_eq!(vault.get("vfs_email").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_writes_through_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.json");
        let vault = FileVault::open(&path).unwrap();

        vault.set("vfs_email", "user@example.com").await.unwrap();

        // The file exists and holds the value before any close or flush call.
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("user@example.com"));
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.json");

        {
            let vault = FileVault::open(&path).unwrap();
            vault.set("vfs_email", "user@example.com").await.unwrap();
            vault.set("vfs_password", "hunter2").await.unwrap();
            vault.set("vfs_password", "hunter22").await.unwrap();
        }

        let vault = FileVault::open(&path).unwrap();
        assert_eq!(vault.get("vfs_email").await.unwrap().as_deref(), Some("user@example.com"));
        assert_eq!(vault.get("vfs_password").await.unwrap().as_deref(), Some("hunter22"));
    }

    #[tokio::test]
    async fn nested_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state/slotwatch/vault.json");
        let vault = FileVault::open(&path).unwrap();

        vault.set("vfs_email", "user@example.com").await.unwrap();
        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.json");
        fs::write(&path, "not json").unwrap();

        let err = FileVault::open(&path).unwrap_err();
        assert!(matches!(err, SlotwatchError::Storage(_)));
    }
}
