//! Nature Sounds Core
//!
//! Platform-agnostic core types, traits, and error handling for Nature Sounds.
//!
//! This crate provides the building blocks shared by the HTTP client and the
//! command-line front-end.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `ProfileId`, `Sound`, `Profile`, `Credentials`, etc.
//! - **Photo Paths**: sharded profile photo URL resolution
//! - **Validation**: login, registration and password-reset form checks
//! - **Playback**: `PlayerSession` state machine around an external `AudioSink`
//! - **Core Traits**: `CredentialStore`, `AudioSink`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use nature_core::photo::{resolve_photo_url, resolve_shard};
//! use nature_core::ProfileId;
//!
//! let id = ProfileId::new(20).unwrap();
//! assert_eq!(resolve_shard(id), 5);
//!
//! let url = resolve_photo_url(
//!     id,
//!     Some("me.jpg"),
//!     "https://cdn.example.com/images",
//!     "https://cdn.example.com/profiles",
//! );
//! assert_eq!(url, "https://cdn.example.com/profiles/5/me.jpg");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod photo;
pub mod playback;
pub mod storage;
pub mod support;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use playback::{format_elapsed, PlayerSession, PlayerState};
pub use storage::MemoryCredentialStore;
pub use traits::{AudioSink, CredentialStore};

pub use types::{
    Credentials, FeedFilter, Language, Profile, ProfileId, ProfileUpdate, Sound, SoundDetail,
    SoundFeed, SoundId, SoundSource,
};
