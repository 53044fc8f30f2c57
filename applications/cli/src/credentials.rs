// Credential persistence for the command line
//
// Login credentials are stored in a local JSON file, one string per key.

use async_trait::async_trait;
use nature_core::{CoreError, CredentialStore, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// In-memory cache of stored values, persisted to disk on changes
pub struct FileCredentialStore {
    values: RwLock<BTreeMap<String, String>>,
    file_path: PathBuf,
}

impl FileCredentialStore {
    /// Open a store, loading from disk if the file exists
    ///
    /// A file that cannot be parsed is treated as empty and replaced on the
    /// next write.
    pub async fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!("Credentials file path: {:?}", file_path);

        let values = match tokio::fs::read_to_string(&file_path).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse credentials file, ignoring it: {}", e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(CoreError::storage(format!(
                    "Failed to read credentials: {}",
                    e
                )))
            }
        };

        Ok(Self {
            values: RwLock::new(values),
            file_path,
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Persist values to disk
    async fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    CoreError::storage(format!("Failed to create credentials dir: {}", e))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(values)?;
        tokio::fs::write(&self.file_path, content)
            .await
            .map_err(|e| CoreError::storage(format!("Failed to write credentials: {}", e)))?;

        restrict_permissions(&self.file_path).await
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .await
        .map_err(|e| CoreError::storage(format!("Failed to protect credentials file: {}", e)))
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().await;
        let mut updated = values.clone();
        updated.insert(key.to_string(), value.to_string());
        self.persist(&updated).await?;
        *values = updated;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().await;
        if !values.contains_key(key) {
            return Ok(());
        }
        let mut updated = values.clone();
        updated.remove(key);
        self.persist(&updated).await?;
        *values = updated;
        Ok(())
    }
}
