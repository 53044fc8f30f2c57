//! Tests for the Nature Sounds client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real server connection.

use nature_core::types::{LOGIN_CODE_KEY, PROFILE_ID_KEY};
use nature_core::validation::{LoginForm, RegistrationForm};
use nature_core::{
    CredentialStore, FeedFilter, MemoryCredentialStore, ProfileId, ProfileUpdate, SoundId,
    SoundSource,
};
use nature_server_client::{ClientConfig, NatureSoundsClient, ServerClientError};
use std::sync::Arc;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Helpers
// =============================================================================

fn config_for(server: &MockServer) -> ClientConfig {
    let mut config = ClientConfig::new(format!("{}/api", server.uri()));
    config.image_base_url = "https://img.test/images".into();
    config.profile_asset_base_url = "https://img.test/profiles".into();
    config.sample_base_url = "https://img.test/samples".into();
    config
}

fn client_for(server: &MockServer) -> (NatureSoundsClient, Arc<MemoryCredentialStore>) {
    let store = Arc::new(MemoryCredentialStore::new());
    let client = NatureSoundsClient::new(config_for(server), store.clone()).unwrap();
    (client, store)
}

async fn logged_in_client(server: &MockServer) -> (NatureSoundsClient, Arc<MemoryCredentialStore>) {
    let (client, store) = client_for(server);
    store.set(PROFILE_ID_KEY, "31").await.unwrap();
    store.set(LOGIN_CODE_KEY, "code-abc").await.unwrap();
    (client, store)
}

fn login_form() -> LoginForm {
    LoginForm {
        email: "ada@example.com".into(),
        password: "correcthorse".into(),
        agree_to_terms: true,
    }
}

fn registration_form() -> RegistrationForm {
    RegistrationForm {
        email: "ada@example.com".into(),
        password: "correcthorse".into(),
        confirm_password: "correcthorse".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        agree_to_terms: true,
    }
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_default_config_points_at_production() {
        let client = NatureSoundsClient::new(
            ClientConfig::default(),
            Arc::new(MemoryCredentialStore::new()),
        )
        .unwrap();
        assert_eq!(
            client.config().api_base_url,
            "https://app.3dnaturesounds.com/api"
        );
        assert_eq!(client.config().max_retry_attempts, 3);
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        let result = NatureSoundsClient::new(
            ClientConfig::new("example.com/api"),
            Arc::new(MemoryCredentialStore::new()),
        );

        match result {
            Err(ServerClientError::InvalidUrl(msg)) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_trailing_slashes_removed() {
        let client = NatureSoundsClient::new(
            ClientConfig::new("https://example.com/api///"),
            Arc::new(MemoryCredentialStore::new()),
        )
        .unwrap();
        assert_eq!(client.config().api_base_url, "https://example.com/api");
    }
}

// =============================================================================
// Authentication Tests
// =============================================================================

mod authentication {
    use super::*;

    #[tokio::test]
    async fn test_successful_login_stores_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .and(body_json(serde_json::json!({
                "email": "ada@example.com",
                "password": "correcthorse"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": 1,
                "profile_id": 31,
                "login_code": "code-abc"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (client, store) = client_for(&mock_server);
        assert!(!client.is_authenticated().await.unwrap());

        let creds = client.login(&login_form()).await.unwrap();
        assert_eq!(creds.profile_id, ProfileId::new(31).unwrap());
        assert_eq!(creds.login_code, "code-abc");

        assert_eq!(store.get(PROFILE_ID_KEY).await.unwrap().as_deref(), Some("31"));
        assert_eq!(
            store.get(LOGIN_CODE_KEY).await.unwrap().as_deref(),
            Some("code-abc")
        );
        assert!(client.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn test_login_accepts_string_profile_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": 1,
                "profile_id": "44",
                "login_code": "xyz"
            })))
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server);
        let creds = client.login(&login_form()).await.unwrap();
        assert_eq!(creds.profile_id.get(), 44);
    }

    #[tokio::test]
    async fn test_rejected_login_uses_default_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": 0 })),
            )
            .mount(&mock_server)
            .await;

        let (client, store) = client_for(&mock_server);
        match client.login(&login_form()).await {
            Err(ServerClientError::Rejected(msg)) => {
                assert_eq!(msg, "Login failed. Please check your credentials.");
            }
            other => panic!("Expected Rejected, got: {:?}", other),
        }
        assert!(store.get(PROFILE_ID_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_validation_happens_before_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server);
        let mut form = login_form();
        form.agree_to_terms = false;

        match client.login(&form).await {
            Err(ServerClientError::Validation(msg)) => {
                assert_eq!(msg, "You must agree to the Terms & Conditions");
            }
            other => panic!("Expected Validation, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server);
        match client.login(&login_form()).await {
            Err(ServerClientError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("Internal Server Error"));
            }
            other => panic!("Expected ServerError, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server);
        assert!(matches!(
            client.login(&login_form()).await,
            Err(ServerClientError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_register_sends_multipart_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/register/"))
            .and(body_string_contains("name=\"first_name\""))
            .and(body_string_contains("Lovelace"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": 1 })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let (client, store) = client_for(&mock_server);
        client.register(&registration_form()).await.unwrap();

        // Registration does not log in.
        assert!(store.get(PROFILE_ID_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_rejection_carries_server_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/register/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": 0,
                "message": "Email already registered"
            })))
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server);
        match client.register(&registration_form()).await {
            Err(ServerClientError::Rejected(msg)) => assert_eq!(msg, "Email already registered"),
            other => panic!("Expected Rejected, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_short_password_rejected_locally() {
        let mock_server = MockServer::start().await;
        let (client, _) = client_for(&mock_server);

        let mut form = registration_form();
        form.password = "short".into();
        form.confirm_password = "short".into();

        assert!(matches!(
            client.register(&form).await,
            Err(ServerClientError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_send_reset_code() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/send_reset_code/"))
            .and(body_json(serde_json::json!({ "email": "ada@example.com" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": 1,
                "message": "Check your inbox"
            })))
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server);
        let message = client.send_reset_code("ada@example.com").await.unwrap();
        assert_eq!(message, "Check your inbox");
    }

    #[tokio::test]
    async fn test_send_reset_code_default_messages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/send_reset_code/"))
            .and(body_json(serde_json::json!({ "email": "ok@example.com" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": 1 })),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/send_reset_code/"))
            .and(body_json(serde_json::json!({ "email": "bad@example.com" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": 0 })),
            )
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server);
        assert_eq!(
            client.send_reset_code("ok@example.com").await.unwrap(),
            "Reset code sent successfully."
        );
        match client.send_reset_code("bad@example.com").await {
            Err(ServerClientError::Rejected(msg)) => {
                assert_eq!(msg, "Invalid email. Please check and try again.");
            }
            other => panic!("Expected Rejected, got: {:?}", other),
        }
        assert!(matches!(
            client.send_reset_code("").await,
            Err(ServerClientError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_logout_clears_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/logout/"))
            .and(body_string_contains("code-abc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": 1 })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let (client, store) = logged_in_client(&mock_server).await;
        client.logout().await.unwrap();

        assert!(store.get(PROFILE_ID_KEY).await.unwrap().is_none());
        assert!(store.get(LOGIN_CODE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_credentials_even_when_server_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/logout/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let (client, store) = logged_in_client(&mock_server).await;
        client.logout().await.unwrap();
        assert!(!client.is_authenticated().await.unwrap());
        assert!(store.get(LOGIN_CODE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_without_credentials_skips_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server);
        client.logout().await.unwrap();
    }
}

// =============================================================================
// Sound Tests
// =============================================================================

mod sounds {
    use super::*;

    async fn mount_feed(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/api/get_profile_sounds/"))
            .and(header("accept", "application/json"))
            .and(body_string_contains("name=\"login_code\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": 1,
                "sounds": [
                    { "id": 901, "sound_id": 1, "title": "Rain on Leaves", "photo": "rain.jpg" }
                ],
                "samples": [
                    { "id": "2", "sound_id": 902, "title": "Creek Sample", "photo": "creek.jpg" }
                ]
            })))
            .mount(server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/get_sample_sounds/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": 1,
                "sounds": [
                    { "id": 3, "sound_id": 903, "title": "Thunder", "photo": "thunder.jpg" },
                    { "id": 4, "title": "Birdsong", "photo": null }
                ]
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_load_feed_merges_and_tags_sources() {
        let mock_server = MockServer::start().await;
        mount_feed(&mock_server).await;

        let (client, _) = logged_in_client(&mock_server).await;
        let feed = client.load_feed().await.unwrap();

        assert_eq!(feed.profile_sounds.len(), 2);
        assert_eq!(feed.sample_sounds.len(), 2);
        assert_eq!(feed.profile_sounds[0].id, SoundId::new("1"));
        assert_eq!(feed.profile_sounds[0].source, SoundSource::Profile);
        assert_eq!(feed.profile_sounds[1].source, SoundSource::ProfileSample);
        assert!(feed
            .sample_sounds
            .iter()
            .all(|s| s.source == SoundSource::Sample));

        let all = feed.filter(FeedFilter::All);
        let ids: Vec<&str> = all.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(feed.filter(FeedFilter::MySounds).len(), 1);
        assert_eq!(feed.filter(FeedFilter::NewSounds).len(), 2);
    }

    #[tokio::test]
    async fn test_load_feed_requires_login() {
        let mock_server = MockServer::start().await;
        mount_feed(&mock_server).await;

        let (client, _) = client_for(&mock_server);
        assert!(matches!(
            client.load_feed().await,
            Err(ServerClientError::AuthRequired)
        ));
    }

    #[tokio::test]
    async fn test_load_feed_fails_if_samples_fail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/get_profile_sounds/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": 1,
                "sounds": []
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/get_sample_sounds/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": 0 })),
            )
            .mount(&mock_server)
            .await;

        let (client, _) = logged_in_client(&mock_server).await;
        match client.load_feed().await {
            Err(ServerClientError::Rejected(msg)) => {
                assert_eq!(msg, "Failed to load sample sounds");
            }
            other => panic!("Expected Rejected, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sample_sounds_work_logged_out() {
        let mock_server = MockServer::start().await;
        mount_feed(&mock_server).await;

        let (client, _) = client_for(&mock_server);
        let handle = client.sounds().await.unwrap();
        let samples = handle.client().get_sample_sounds().await.unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[tokio::test]
    async fn test_get_sound() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/get_sound/"))
            .and(body_string_contains("name=\"sound_id\""))
            .and(body_string_contains("code-abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": 1,
                "sound": {
                    "id": 900,
                    "sound_id": 1,
                    "title": "Rain on Leaves",
                    "photo": "rain.jpg",
                    "stream_url": "https://stream.test/1.mp3"
                }
            })))
            .mount(&mock_server)
            .await;

        let (client, _) = logged_in_client(&mock_server).await;
        let detail = client.get_sound(&SoundId::new("1")).await.unwrap();
        assert_eq!(detail.id, SoundId::new("1"));
        assert_eq!(detail.title, "Rain on Leaves");
        assert_eq!(detail.stream_url.as_deref(), Some("https://stream.test/1.mp3"));
    }

    #[tokio::test]
    async fn test_get_sound_missing_payload_is_rejection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/get_sound/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": 1 })),
            )
            .mount(&mock_server)
            .await;

        let (client, _) = logged_in_client(&mock_server).await;
        match client.get_sound(&SoundId::new("9")).await {
            Err(ServerClientError::Rejected(msg)) => assert_eq!(msg, "Failed to load sound details"),
            other => panic!("Expected Rejected, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_sample_sound_streams_from_sample_root() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/get_sample_sound/"))
            .and(body_string_contains("name=\"sound_id\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": 1,
                "sound": {
                    "id": 3,
                    "title": "Thunder",
                    "photo": "thunder.jpg",
                    "stream_url": "https://elsewhere.test/ignored.mp3"
                }
            })))
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server);
        let detail = client.get_sample_sound(&SoundId::new("3")).await.unwrap();
        assert_eq!(
            detail.stream_url.as_deref(),
            Some("https://img.test/samples/3.mp3")
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_reported() {
        let mut config = ClientConfig::new("http://127.0.0.1:9/api");
        config.max_retry_attempts = 2;
        let client =
            NatureSoundsClient::new(config, Arc::new(MemoryCredentialStore::new())).unwrap();

        match client.get_sample_sound(&SoundId::new("3")).await {
            Err(ServerClientError::ServerUnreachable(_)) => {}
            other => panic!("Expected ServerUnreachable, got: {:?}", other),
        }
    }
}

// =============================================================================
// Profile Tests
// =============================================================================

mod profile {
    use super::*;

    #[tokio::test]
    async fn test_get_profile_for_edit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/get_profile_for_edit/"))
            .and(body_string_contains("name=\"profile_id\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": 1,
                "profile": {
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "email": "ada@example.com",
                    "about": "Likes rain",
                    "photo": "ada.jpg",
                    "default_language_id": 2
                },
                "languages": [
                    { "id": 1, "language": "English" },
                    { "id": 2, "language": "Deutsch" }
                ]
            })))
            .mount(&mock_server)
            .await;

        let (client, _) = logged_in_client(&mock_server).await;
        let edit = client.get_profile_for_edit().await.unwrap();

        assert_eq!(edit.profile.display_name(), "Ada Lovelace");
        assert_eq!(edit.languages.len(), 2);
        assert_eq!(edit.selected_language().unwrap().language, "Deutsch");

        // Profile 31 is prime: shard 1.
        let creds = client.credentials().await.unwrap().unwrap();
        assert_eq!(
            client.profile_photo_url(creds.profile_id, edit.profile.photo.as_deref()),
            "https://img.test/profiles/1/ada.jpg"
        );
    }

    #[tokio::test]
    async fn test_profile_requires_login() {
        let mock_server = MockServer::start().await;
        let (client, _) = client_for(&mock_server);

        assert!(matches!(
            client.get_profile_for_edit().await,
            Err(ServerClientError::AuthRequired)
        ));
        assert!(matches!(
            client.update_profile(&ProfileUpdate::default()).await,
            Err(ServerClientError::AuthRequired)
        ));
    }

    #[tokio::test]
    async fn test_update_profile_sends_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/update_profile/"))
            .and(body_string_contains("name=\"default_language_id\""))
            .and(body_string_contains("Sleeps well"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": 1 })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let (client, _) = logged_in_client(&mock_server).await;
        let update = ProfileUpdate {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            about: "Sleeps well".into(),
            default_language_id: "2".into(),
        };
        client.update_profile(&update).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_profile_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/update_profile/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": 0 })),
            )
            .mount(&mock_server)
            .await;

        let (client, _) = logged_in_client(&mock_server).await;
        match client.update_profile(&ProfileUpdate::default()).await {
            Err(ServerClientError::Rejected(msg)) => assert_eq!(msg, "Failed to update profile"),
            other => panic!("Expected Rejected, got: {:?}", other),
        }
    }
}
