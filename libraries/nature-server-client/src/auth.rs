//! Authentication methods for the Nature Sounds API.

use crate::error::Result;
use crate::response::{credential_form, send_envelope};
use crate::types::{endpoints, LoginRequest, LoginResponse, MessageOnly, ResetCodeRequest};
use nature_core::validation::RegistrationForm;
use nature_core::Credentials;
use reqwest::multipart::Form;
use reqwest::Client;
use tracing::{debug, info};

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
const REGISTER_FAILED: &str = "Registration failed. Please try again.";
const RESET_FAILED: &str = "Invalid email. Please check and try again.";
const RESET_SENT: &str = "Reset code sent successfully.";

/// Authentication client for the Nature Sounds API.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with email and password.
    ///
    /// Returns the profile id and login code on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<Credentials> {
        let url = format!("{}{}", self.base_url, endpoints::LOGIN);
        debug!(url = %url, email = %email, "Attempting login");

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse =
            send_envelope(self.http.post(&url).json(&request), LOGIN_FAILED).await?;

        info!(profile_id = %response.profile_id, "Login successful");

        Ok(Credentials::new(response.profile_id, response.login_code))
    }

    /// Create an account. The form must already be validated.
    pub async fn register(&self, form: &RegistrationForm) -> Result<()> {
        let url = format!("{}{}", self.base_url, endpoints::REGISTER);
        debug!(url = %url, email = %form.email, "Registering account");

        let body = Form::new()
            .text("email", form.email.clone())
            .text("password", form.password.clone())
            .text("first_name", form.first_name.clone())
            .text("last_name", form.last_name.clone());

        let _: MessageOnly =
            send_envelope(self.http.post(&url).multipart(body), REGISTER_FAILED).await?;

        info!(email = %form.email, "Account created");
        Ok(())
    }

    /// Ask the server to email a password reset code.
    ///
    /// Returns the server's confirmation message.
    pub async fn send_reset_code(&self, email: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoints::SEND_RESET_CODE);
        debug!(url = %url, email = %email, "Requesting reset code");

        let request = ResetCodeRequest {
            email: email.to_string(),
        };

        let response: MessageOnly =
            send_envelope(self.http.post(&url).json(&request), RESET_FAILED).await?;

        Ok(response
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| RESET_SENT.to_string()))
    }

    /// Invalidate the login code on the server.
    pub async fn logout(&self, creds: &Credentials) -> Result<()> {
        let url = format!("{}{}", self.base_url, endpoints::LOGOUT);
        debug!(url = %url, profile_id = %creds.profile_id, "Logging out");

        let _: MessageOnly = send_envelope(
            self.http.post(&url).multipart(credential_form(creds)),
            "Logout failed",
        )
        .await?;
        Ok(())
    }
}
