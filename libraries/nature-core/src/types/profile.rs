/// Profile domain types
use super::ids::lenient_string;
use serde::{Deserialize, Serialize};

/// Editable profile fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub about: Option<String>,
    /// Stored photo filename; empty means default avatar
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub default_language_id: Option<String>,
}

impl Profile {
    /// "First Last", or "User" when both are blank
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            "User".to_string()
        } else {
            name.to_string()
        }
    }
}

/// A selectable interface language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    #[serde(deserialize_with = "required_lenient_string")]
    pub id: String,
    pub language: String,
}

fn required_lenient_string<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    lenient_string(deserializer)?.ok_or_else(|| serde::de::Error::custom("missing language id"))
}

/// Profile update request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub about: String,
    pub default_language_id: String,
}

impl ProfileUpdate {
    /// Start an update from the current profile, keeping every field
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            about: profile.about.clone().unwrap_or_default(),
            default_language_id: profile.default_language_id.clone().unwrap_or_default(),
        }
    }
}
