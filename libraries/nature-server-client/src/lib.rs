//! Nature Sounds Server Client
//!
//! HTTP client library for interacting with the Nature Sounds API.
//!
//! # Features
//!
//! - **Authentication**: Login, registration, password reset, logout
//! - **Sounds**: Home feed (profile sounds + samples), sound details with stream URLs
//! - **Profile**: Fetch and update the editable profile, resolve photo URLs
//!
//! Every response is a JSON envelope `{ success: 0|1, message?, ...payload }`.
//! Authenticated requests carry `profile_id` and `login_code` as multipart form
//! fields, read from a [`nature_core::CredentialStore`].
//!
//! # Example
//!
//! ```ignore
//! use nature_core::validation::LoginForm;
//! use nature_core::{FeedFilter, MemoryCredentialStore};
//! use nature_server_client::{ClientConfig, NatureSoundsClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryCredentialStore::new());
//!     let client = NatureSoundsClient::new(ClientConfig::default(), store)?;
//!
//!     let creds = client
//!         .login(&LoginForm {
//!             email: "me@example.com".into(),
//!             password: "hunter22".into(),
//!             agree_to_terms: true,
//!         })
//!         .await?;
//!     println!("Logged in as profile {}", creds.profile_id);
//!
//!     let feed = client.load_feed().await?;
//!     for sound in feed.filter(FeedFilter::All) {
//!         println!("{} ({})", sound.title, sound.source);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod profile;
mod response;
mod sounds;
mod types;

// Re-export main types
pub use client::{NatureSoundsClient, ProfileClientHandle, SoundsClientHandle};
pub use error::{Result, ServerClientError};
pub use types::{
    endpoints, ClientConfig, LoginRequest, LoginResponse, ProfileForEdit, ProfileSoundsResponse,
    ResetCodeRequest, SampleSoundsResponse, DEFAULT_API_BASE_URL, DEFAULT_IMAGE_BASE_URL,
    DEFAULT_PROFILE_ASSET_BASE_URL, DEFAULT_SAMPLE_BASE_URL,
};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use profile::ProfileClient;
pub use sounds::SoundsClient;
