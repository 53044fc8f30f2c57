//! Sound listing and detail operations for the Nature Sounds API.

use crate::error::{Result, ServerClientError};
use crate::response::{credential_form, optional_credential_form, send_envelope};
use crate::types::{endpoints, ProfileSoundsResponse, SampleSoundsResponse, SoundResponse};
use nature_core::types::sample_stream_url;
use nature_core::{Credentials, Sound, SoundDetail, SoundFeed, SoundId, SoundSource};
use reqwest::Client;
use tracing::debug;

/// Sounds client for the Nature Sounds API.
///
/// Profile endpoints need credentials; sample endpoints send them when present.
pub struct SoundsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    sample_base_url: &'a str,
    credentials: Option<&'a Credentials>,
}

impl<'a> SoundsClient<'a> {
    pub(crate) fn new(
        http: &'a Client,
        base_url: &'a str,
        sample_base_url: &'a str,
        credentials: Option<&'a Credentials>,
    ) -> Self {
        Self {
            http,
            base_url,
            sample_base_url,
            credentials,
        }
    }

    fn require_credentials(&self) -> Result<&'a Credentials> {
        self.credentials.ok_or(ServerClientError::AuthRequired)
    }

    /// Get the profile's own sounds followed by its samples.
    pub async fn get_profile_sounds(&self) -> Result<Vec<Sound>> {
        let creds = self.require_credentials()?;
        let url = format!("{}{}", self.base_url, endpoints::GET_PROFILE_SOUNDS);
        debug!(url = %url, "Fetching profile sounds");

        let response: ProfileSoundsResponse = send_envelope(
            self.http.post(&url).multipart(credential_form(creds)),
            "Failed to load profile sounds",
        )
        .await?;

        let sounds: Vec<Sound> = response
            .sounds
            .into_iter()
            .map(|s| s.with_source(SoundSource::Profile))
            .chain(
                response
                    .samples
                    .into_iter()
                    .map(|s| s.with_source(SoundSource::ProfileSample)),
            )
            .collect();

        debug!(count = sounds.len(), "Fetched profile sounds");
        Ok(sounds)
    }

    /// Get the public sample sounds.
    pub async fn get_sample_sounds(&self) -> Result<Vec<Sound>> {
        let url = format!("{}{}", self.base_url, endpoints::GET_SAMPLE_SOUNDS);
        debug!(url = %url, "Fetching sample sounds");

        let response: SampleSoundsResponse = send_envelope(
            self.http
                .post(&url)
                .multipart(optional_credential_form(self.credentials)),
            "Failed to load sample sounds",
        )
        .await?;

        let sounds: Vec<Sound> = response
            .sounds
            .into_iter()
            .map(|s| s.with_source(SoundSource::Sample))
            .collect();

        debug!(count = sounds.len(), "Fetched sample sounds");
        Ok(sounds)
    }

    /// Load both halves of the home feed concurrently.
    ///
    /// Fails if either request fails.
    pub async fn load_feed(&self) -> Result<SoundFeed> {
        let (profile_sounds, sample_sounds) =
            tokio::try_join!(self.get_profile_sounds(), self.get_sample_sounds())?;

        Ok(SoundFeed {
            profile_sounds,
            sample_sounds,
        })
    }

    /// Get a profile sound with its streaming URL.
    ///
    /// The returned detail carries the requested id.
    pub async fn get_sound(&self, sound_id: &SoundId) -> Result<SoundDetail> {
        let creds = self.require_credentials()?;
        let url = format!("{}{}", self.base_url, endpoints::GET_SOUND);
        debug!(url = %url, sound_id = %sound_id, "Fetching sound");

        let form = credential_form(creds).text("sound_id", sound_id.to_string());
        let response: SoundResponse = send_envelope(
            self.http.post(&url).multipart(form),
            "Failed to load sound details",
        )
        .await?;

        let mut detail = response
            .sound
            .ok_or_else(|| ServerClientError::Rejected("Failed to load sound details".into()))?;
        detail.id = sound_id.clone();
        Ok(detail)
    }

    /// Get a sample sound.
    ///
    /// Samples always stream from the sample asset root under the requested
    /// id, whatever the response says.
    pub async fn get_sample_sound(&self, sound_id: &SoundId) -> Result<SoundDetail> {
        let url = format!("{}{}", self.base_url, endpoints::GET_SAMPLE_SOUND);
        debug!(url = %url, sound_id = %sound_id, "Fetching sample sound");

        let form = optional_credential_form(self.credentials).text("sound_id", sound_id.to_string());
        let response: SoundResponse = send_envelope(
            self.http.post(&url).multipart(form),
            "Failed to load sound details",
        )
        .await?;

        let mut detail = response
            .sound
            .ok_or_else(|| ServerClientError::Rejected("Failed to load sound details".into()))?;
        detail.id = sound_id.clone();
        detail.stream_url = Some(sample_stream_url(self.sample_base_url, sound_id));
        Ok(detail)
    }
}
