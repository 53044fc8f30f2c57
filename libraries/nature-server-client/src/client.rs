//! Main Nature Sounds client.

use crate::auth::AuthClient;
use crate::error::{Result, ServerClientError};
use crate::profile::ProfileClient;
use crate::sounds::SoundsClient;
use crate::types::{ClientConfig, ProfileForEdit};
use nature_core::photo::resolve_photo_url;
use nature_core::storage::{clear_credentials, load_credentials, save_credentials};
use nature_core::types::sound_image_url;
use nature_core::validation::{validate_reset_email, LoginForm, RegistrationForm};
use nature_core::{
    CredentialStore, Credentials, ProfileId, ProfileUpdate, SoundDetail, SoundFeed, SoundId,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Main client for the Nature Sounds API.
///
/// The client validates form input, persists credentials in the supplied
/// store, and provides access to sound and profile operations.
///
/// # Example
///
/// ```ignore
/// use nature_core::validation::LoginForm;
/// use nature_core::MemoryCredentialStore;
/// use nature_server_client::{ClientConfig, NatureSoundsClient};
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryCredentialStore::new());
/// let client = NatureSoundsClient::new(ClientConfig::default(), store)?;
///
/// client.login(&LoginForm {
///     email: "me@example.com".into(),
///     password: "hunter22".into(),
///     agree_to_terms: true,
/// }).await?;
///
/// let feed = client.load_feed().await?;
/// println!("{} sounds", feed.len());
/// ```
pub struct NatureSoundsClient {
    http: Client,
    config: ClientConfig,
    store: Arc<dyn CredentialStore>,
}

impl NatureSoundsClient {
    /// Create a new client with the given configuration and credential store.
    pub fn new(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let config = config.normalized()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(format!("NatureSounds/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self {
            http,
            config,
            store,
        })
    }

    /// Get the normalized configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Stored credentials, if logged in.
    pub async fn credentials(&self) -> Result<Option<Credentials>> {
        Ok(load_credentials(self.store.as_ref()).await?)
    }

    /// Check if credentials are stored.
    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.credentials().await?.is_some())
    }

    fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.http, &self.config.api_base_url)
    }

    /// Login with email and password.
    ///
    /// On success, the credentials are persisted for subsequent requests.
    pub async fn login(&self, form: &LoginForm) -> Result<Credentials> {
        form.validate()?;

        let creds = self.auth().login(&form.email, &form.password).await?;
        save_credentials(self.store.as_ref(), &creds).await?;

        Ok(creds)
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, form: &RegistrationForm) -> Result<()> {
        form.validate()?;
        self.auth().register(form).await
    }

    /// Request a password reset code; returns the server's message.
    pub async fn send_reset_code(&self, email: &str) -> Result<String> {
        validate_reset_email(email)?;
        self.auth().send_reset_code(email).await
    }

    /// Log out.
    ///
    /// Local credentials are cleared whatever the server says; only a
    /// credential store failure is reported.
    pub async fn logout(&self) -> Result<()> {
        match self.credentials().await {
            Ok(Some(creds)) => {
                if let Err(e) = self.auth().logout(&creds).await {
                    warn!(error = %e, "Server logout failed, clearing local credentials anyway");
                }
            }
            Ok(None) => warn!("Logout without stored credentials"),
            Err(e) => warn!(error = %e, "Could not read credentials during logout"),
        }

        clear_credentials(self.store.as_ref()).await?;
        info!("Logged out");
        Ok(())
    }

    /// Get a sounds client.
    ///
    /// Works logged out; profile endpoints then fail with `AuthRequired`.
    pub async fn sounds(&self) -> Result<SoundsClientHandle> {
        Ok(SoundsClientHandle {
            http: self.http.clone(),
            url: self.config.api_base_url.clone(),
            sample_url: self.config.sample_base_url.clone(),
            credentials: self.credentials().await?,
        })
    }

    /// Get a profile client.
    ///
    /// Returns an error if not logged in.
    pub async fn profile(&self) -> Result<ProfileClientHandle> {
        let credentials = self
            .credentials()
            .await?
            .ok_or(ServerClientError::AuthRequired)?;

        Ok(ProfileClientHandle {
            http: self.http.clone(),
            url: self.config.api_base_url.clone(),
            credentials,
        })
    }

    /// Load the home feed, retrying while the server is unreachable.
    pub async fn load_feed(&self) -> Result<SoundFeed> {
        let handle = self.sounds().await?;
        let client = handle.client();
        self.with_retry(|| client.load_feed()).await
    }

    /// Load a profile sound for the player.
    pub async fn get_sound(&self, sound_id: &SoundId) -> Result<SoundDetail> {
        let handle = self.sounds().await?;
        let client = handle.client();
        self.with_retry(|| client.get_sound(sound_id)).await
    }

    /// Load a sample sound for the player.
    pub async fn get_sample_sound(&self, sound_id: &SoundId) -> Result<SoundDetail> {
        let handle = self.sounds().await?;
        let client = handle.client();
        self.with_retry(|| client.get_sample_sound(sound_id)).await
    }

    /// Load the profile for editing.
    pub async fn get_profile_for_edit(&self) -> Result<ProfileForEdit> {
        let handle = self.profile().await?;
        let client = handle.client();
        self.with_retry(|| client.get_profile_for_edit()).await
    }

    /// Save profile changes. Not retried.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        self.profile().await?.client().update_profile(update).await
    }

    /// URL of a profile's photo, or the default avatar.
    pub fn profile_photo_url(&self, profile_id: ProfileId, photo: Option<&str>) -> String {
        resolve_photo_url(
            profile_id,
            photo,
            &self.config.image_base_url,
            &self.config.profile_asset_base_url,
        )
    }

    /// URL of a sound's cover image.
    pub fn sound_image_url(&self, photo: &str) -> String {
        sound_image_url(&self.config.image_base_url, photo)
    }

    /// Execute an operation, retrying while the server is unreachable.
    ///
    /// Makes at most `max_retry_attempts` attempts with a short linear
    /// backoff. Other errors are returned immediately.
    pub async fn with_retry<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let max_attempts = self.config.max_retry_attempts.max(1);
        let mut attempt = 1;

        loop {
            match operation().await {
                Err(e) if e.is_transient() && attempt < max_attempts => {
                    warn!(attempt, max_attempts, error = %e, "Server unreachable, retrying");
                    tokio::time::sleep(Duration::from_millis(250 * u64::from(attempt))).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

/// Handle for sound operations.
///
/// This is returned by `NatureSoundsClient::sounds()` and carries the
/// credentials read at creation time.
pub struct SoundsClientHandle {
    http: Client,
    url: String,
    sample_url: String,
    credentials: Option<Credentials>,
}

impl SoundsClientHandle {
    /// Get the sounds client.
    pub fn client(&self) -> SoundsClient<'_> {
        SoundsClient::new(
            &self.http,
            &self.url,
            &self.sample_url,
            self.credentials.as_ref(),
        )
    }
}

/// Handle for profile operations.
pub struct ProfileClientHandle {
    http: Client,
    url: String,
    credentials: Credentials,
}

impl ProfileClientHandle {
    /// Get the profile client.
    pub fn client(&self) -> ProfileClient<'_> {
        ProfileClient::new(&self.http, &self.url, &self.credentials)
    }
}
