//! Credential persistence helpers

use crate::error::Result;
use crate::traits::CredentialStore;
use crate::types::{Credentials, ProfileId, LOGIN_CODE_KEY, PROFILE_ID_KEY};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::warn;

/// In-memory credential store
///
/// Useful for tests and for embedding where nothing should touch disk.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

/// Load both credential values.
///
/// Returns `None` unless both keys are present and the stored profile id parses.
pub async fn load_credentials(store: &dyn CredentialStore) -> Result<Option<Credentials>> {
    let profile_id = store.get(PROFILE_ID_KEY).await?;
    let login_code = store.get(LOGIN_CODE_KEY).await?;

    let (Some(profile_id), Some(login_code)) = (profile_id, login_code) else {
        return Ok(None);
    };
    if login_code.is_empty() {
        return Ok(None);
    }

    match profile_id.parse::<ProfileId>() {
        Ok(profile_id) => Ok(Some(Credentials::new(profile_id, login_code))),
        Err(e) => {
            warn!(error = %e, "Ignoring stored credentials with unusable profile id");
            Ok(None)
        }
    }
}

/// Persist credentials after a successful login
pub async fn save_credentials(store: &dyn CredentialStore, creds: &Credentials) -> Result<()> {
    store
        .set(PROFILE_ID_KEY, &creds.profile_id.to_string())
        .await?;
    store.set(LOGIN_CODE_KEY, &creds.login_code).await
}

/// Remove stored credentials (logout)
pub async fn clear_credentials(store: &dyn CredentialStore) -> Result<()> {
    store.delete(PROFILE_ID_KEY).await?;
    store.delete(LOGIN_CODE_KEY).await
}
