//! Types for Nature Sounds API requests and responses.

use crate::error::{Result, ServerClientError};
use nature_core::types::deserialize_profile_sounds;
use nature_core::{Language, Profile, ProfileId, Sound};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production API root
pub const DEFAULT_API_BASE_URL: &str = "https://app.3dnaturesounds.com/api";
/// Production image root (sound covers, default avatar)
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://app.3dnaturesounds.com/assets/images";
/// Production profile photo root (sharded)
pub const DEFAULT_PROFILE_ASSET_BASE_URL: &str = "https://app.3dnaturesounds.com/assets/profiles";
/// Production sample audio root
pub const DEFAULT_SAMPLE_BASE_URL: &str = "https://app.3dnaturesounds.com/assets/samples";

/// API endpoint paths, relative to the API root.
pub mod endpoints {
    pub const LOGIN: &str = "/login/";
    pub const REGISTER: &str = "/register/";
    pub const SEND_RESET_CODE: &str = "/send_reset_code/";
    pub const LOGOUT: &str = "/logout/";
    pub const GET_PROFILE_SOUNDS: &str = "/get_profile_sounds/";
    pub const GET_SAMPLE_SOUNDS: &str = "/get_sample_sounds/";
    pub const GET_SOUND: &str = "/get_sound/";
    pub const GET_SAMPLE_SOUND: &str = "/get_sample_sound/";
    pub const GET_PROFILE_FOR_EDIT: &str = "/get_profile_for_edit/";
    pub const UPDATE_PROFILE: &str = "/update_profile/";
}

/// Configuration for connecting to the Nature Sounds service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root (e.g., "https://app.3dnaturesounds.com/api")
    pub api_base_url: String,
    /// Image asset root
    pub image_base_url: String,
    /// Profile photo root; photos live under `/{shard}/{file}`
    pub profile_asset_base_url: String,
    /// Sample audio root; samples live at `/{sound_id}.mp3`
    pub sample_base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Attempts for read-only requests when the server is unreachable
    pub max_retry_attempts: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            profile_asset_base_url: DEFAULT_PROFILE_ASSET_BASE_URL.to_string(),
            sample_base_url: DEFAULT_SAMPLE_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            max_retry_attempts: 3,
        }
    }
}

impl ClientConfig {
    /// Production asset URLs with a custom API root.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// Check every base URL and strip trailing slashes.
    pub fn normalized(self) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_url("api_base_url", &self.api_base_url)?,
            image_base_url: normalize_url("image_base_url", &self.image_base_url)?,
            profile_asset_base_url: normalize_url(
                "profile_asset_base_url",
                &self.profile_asset_base_url,
            )?,
            sample_base_url: normalize_url("sample_base_url", &self.sample_base_url)?,
            timeout: self.timeout,
            max_retry_attempts: self.max_retry_attempts.max(1),
        })
    }
}

fn normalize_url(field: &str, raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(ServerClientError::InvalidUrl(format!(
            "{} cannot be empty",
            field
        )));
    }

    let url = raw.trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ServerClientError::InvalidUrl(format!(
            "{} must start with http:// or https://",
            field
        )));
    }

    url::Url::parse(&url)
        .map_err(|e| ServerClientError::InvalidUrl(format!("{}: {}", field, e)))?;

    Ok(url)
}

// =============================================================================
// Response Envelope
// =============================================================================

/// Every response is `{ success: 0|1, message?: string, ...payload }`.
///
/// The payload is only decoded once `success` is confirmed, since rejected
/// responses usually omit it.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    body: serde_json::Value,
    default_message: &str,
) -> Result<T> {
    if !envelope_succeeded(&body) {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .unwrap_or(default_message);
        return Err(ServerClientError::Rejected(message.to_string()));
    }

    serde_json::from_value(body).map_err(|e| ServerClientError::ParseError(e.to_string()))
}

fn envelope_succeeded(body: &serde_json::Value) -> bool {
    match body.get("success") {
        Some(serde_json::Value::Number(n)) => n.as_i64() == Some(1),
        Some(serde_json::Value::String(s)) => s == "1",
        Some(serde_json::Value::Bool(b)) => *b,
        _ => false,
    }
}

/// Optional `message` carried by a successful envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageOnly {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub profile_id: ProfileId,
    pub login_code: String,
}

/// Request body for the reset-code endpoint.
#[derive(Debug, Serialize)]
pub struct ResetCodeRequest {
    pub email: String,
}

// =============================================================================
// Sound Types
// =============================================================================

/// Profile sound listing: the profile's full sounds and its samples.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSoundsResponse {
    /// Full sounds, named by `sound_id`
    #[serde(default, deserialize_with = "deserialize_profile_sounds")]
    pub sounds: Vec<Sound>,
    /// Attached samples, named by `id`
    #[serde(default)]
    pub samples: Vec<Sound>,
}

/// Public sample listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SampleSoundsResponse {
    #[serde(default)]
    pub sounds: Vec<Sound>,
}

/// Sound detail payload; `sound` may be missing even on success.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SoundResponse {
    #[serde(default)]
    pub sound: Option<nature_core::SoundDetail>,
}

// =============================================================================
// Profile Types
// =============================================================================

/// Profile plus the languages it may select.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileForEdit {
    pub profile: Profile,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl ProfileForEdit {
    /// The profile's language, else the first offered one
    pub fn selected_language(&self) -> Option<&Language> {
        self.profile
            .default_language_id
            .as_deref()
            .and_then(|id| self.languages.iter().find(|l| l.id == id))
            .or_else(|| self.languages.first())
    }
}
