/// Stored login credentials
use super::ProfileId;
use std::fmt;

/// Credential store key for the profile id.
pub const PROFILE_ID_KEY: &str = "profile_id";

/// Credential store key for the login code.
pub const LOGIN_CODE_KEY: &str = "login_code";

/// Profile id plus the opaque login code returned at login.
///
/// Both are replayed as form fields on every authenticated request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub profile_id: ProfileId,
    pub login_code: String,
}

impl Credentials {
    pub fn new(profile_id: ProfileId, login_code: impl Into<String>) -> Self {
        Self {
            profile_id,
            login_code: login_code.into(),
        }
    }
}

// The login code is a bearer secret; keep it out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("profile_id", &self.profile_id)
            .field("login_code", &"<redacted>")
            .finish()
    }
}
