/// CLI configuration
use anyhow::{bail, Context, Result};
use nature_server_client::{
    ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_IMAGE_BASE_URL, DEFAULT_PROFILE_ASSET_BASE_URL,
    DEFAULT_SAMPLE_BASE_URL,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    #[serde(default = "default_profile_asset_base_url")]
    pub profile_asset_base_url: String,

    #[serde(default = "default_sample_base_url")]
    pub sample_base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_retry_attempts")]
    pub max_retry_attempts: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_credentials_path")]
    pub credentials_path: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `config.toml` in the working
    /// directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from("config.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables, e.g. NATURE_SERVER__API_BASE_URL
        settings = settings.add_source(
            config::Environment::with_prefix("NATURE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        settings
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.timeout_secs == 0 {
            bail!("server.timeout_secs must be greater than zero");
        }

        if self.server.max_retry_attempts == 0 {
            bail!("server.max_retry_attempts must be at least 1");
        }

        if self.storage.credentials_path.as_os_str().is_empty() {
            bail!("storage.credentials_path is required (set NATURE_STORAGE__CREDENTIALS_PATH)");
        }

        // URL checks are shared with the client library
        self.client_config()
            .normalized()
            .context("Invalid server URL in configuration")?;

        Ok(())
    }

    /// Client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.server.api_base_url.clone(),
            image_base_url: self.server.image_base_url.clone(),
            profile_asset_base_url: self.server.profile_asset_base_url.clone(),
            sample_base_url: self.server.sample_base_url.clone(),
            timeout: Duration::from_secs(self.server.timeout_secs),
            max_retry_attempts: self.server.max_retry_attempts,
        }
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        api_base_url: default_api_base_url(),
        image_base_url: default_image_base_url(),
        profile_asset_base_url: default_profile_asset_base_url(),
        sample_base_url: default_sample_base_url(),
        timeout_secs: default_timeout_secs(),
        max_retry_attempts: default_max_retry_attempts(),
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_profile_asset_base_url() -> String {
    DEFAULT_PROFILE_ASSET_BASE_URL.to_string()
}

fn default_sample_base_url() -> String {
    DEFAULT_SAMPLE_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_retry_attempts() -> u32 {
    3
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        credentials_path: default_credentials_path(),
    }
}

fn default_credentials_path() -> PathBuf {
    PathBuf::from("credentials.json")
}
