//! Shared request plumbing: credential forms and envelope decoding.

use crate::error::{Result, ServerClientError};
use crate::types::decode_envelope;
use nature_core::types::{LOGIN_CODE_KEY, PROFILE_ID_KEY};
use nature_core::Credentials;
use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Multipart form carrying the credential fields.
pub(crate) fn credential_form(creds: &Credentials) -> Form {
    Form::new()
        .text(PROFILE_ID_KEY, creds.profile_id.to_string())
        .text(LOGIN_CODE_KEY, creds.login_code.clone())
}

/// Credential fields if logged in, otherwise an empty form.
pub(crate) fn optional_credential_form(creds: Option<&Credentials>) -> Form {
    creds.map_or_else(Form::new, credential_form)
}

/// Send a request and decode its JSON envelope.
///
/// Non-2xx statuses become `ServerError`; `success != 1` becomes `Rejected`
/// with the server's message or `default_message`.
pub(crate) async fn send_envelope<T: DeserializeOwned>(
    request: RequestBuilder,
    default_message: &str,
) -> Result<T> {
    let response = request
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(ServerClientError::from_transport)?;

    decode_response(response, default_message).await
}

async fn decode_response<T: DeserializeOwned>(
    response: Response,
    default_message: &str,
) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        let body: serde_json::Value = response.json().await.map_err(|e| {
            ServerClientError::ParseError(format!("Failed to parse response body: {}", e))
        })?;
        decode_envelope(body, default_message)
    } else {
        let error_text = response.text().await.unwrap_or_default();
        Err(ServerClientError::ServerError {
            status: status.as_u16(),
            message: error_text,
        })
    }
}
