/// Core traits for Nature Sounds
use crate::error::Result;
use async_trait::async_trait;

/// Key-value store for login credentials
///
/// Platform front-ends back this with whatever local storage they have
/// (keychain, keystore, a file). Values are plain strings.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read a value; `None` if the key was never set or was deleted
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value; removing a missing key is not an error
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Audio output for streamed sounds
///
/// The player session drives this; implementations wrap the platform's
/// audio object (one loaded sound at a time).
#[async_trait]
pub trait AudioSink: Send {
    /// Load a sound from a URL and start playing it
    ///
    /// # Errors
    /// Returns an error if the stream cannot be opened
    async fn load(&mut self, url: &str, looping: bool) -> Result<()>;

    /// Resume the loaded sound
    async fn play(&mut self) -> Result<()>;

    /// Pause the loaded sound
    async fn pause(&mut self) -> Result<()>;

    /// Stop and release the loaded sound, if any
    async fn unload(&mut self) -> Result<()>;
}
