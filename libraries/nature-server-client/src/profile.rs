//! Profile operations for the Nature Sounds API.

use crate::error::Result;
use crate::response::{credential_form, send_envelope};
use crate::types::{endpoints, MessageOnly, ProfileForEdit};
use nature_core::{Credentials, ProfileUpdate};
use reqwest::Client;
use tracing::{debug, info};

/// Profile client for the Nature Sounds API.
pub struct ProfileClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    credentials: &'a Credentials,
}

impl<'a> ProfileClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// Get the editable profile and the selectable languages.
    pub async fn get_profile_for_edit(&self) -> Result<ProfileForEdit> {
        let url = format!("{}{}", self.base_url, endpoints::GET_PROFILE_FOR_EDIT);
        debug!(url = %url, profile_id = %self.credentials.profile_id, "Fetching profile");

        send_envelope(
            self.http
                .post(&url)
                .multipart(credential_form(self.credentials)),
            "Failed to load profile data",
        )
        .await
    }

    /// Save profile changes.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        let url = format!("{}{}", self.base_url, endpoints::UPDATE_PROFILE);
        debug!(url = %url, profile_id = %self.credentials.profile_id, "Updating profile");

        let form = credential_form(self.credentials)
            .text("first_name", update.first_name.clone())
            .text("last_name", update.last_name.clone())
            .text("email", update.email.clone())
            .text("about", update.about.clone())
            .text("default_language_id", update.default_language_id.clone());

        let _: MessageOnly = send_envelope(
            self.http.post(&url).multipart(form),
            "Failed to update profile",
        )
        .await?;

        info!(profile_id = %self.credentials.profile_id, "Profile updated");
        Ok(())
    }
}
