/// Sound domain types
use super::SoundId;
use serde::{Deserialize, Deserializer, Serialize};

/// Where a feed entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundSource {
    /// A full sound owned by the profile
    #[default]
    Profile,
    /// A sample attached to the profile
    ProfileSample,
    /// A public sample sound
    Sample,
}

impl SoundSource {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::ProfileSample => "profile_sample",
            Self::Sample => "sample",
        }
    }

    /// Whether playback goes through the sample endpoints
    pub fn is_sample(&self) -> bool {
        !matches!(self, Self::Profile)
    }
}

impl std::fmt::Display for SoundSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wire shape shared by feed entries and sound details.
///
/// Profile sounds carry their id in `sound_id`, samples in `id`. Entries may
/// carry both; which one names the sound depends on the list it came from.
#[derive(Deserialize)]
struct RawSound {
    #[serde(default)]
    id: Option<SoundId>,
    #[serde(default)]
    sound_id: Option<SoundId>,
    title: String,
    #[serde(default)]
    photo: Option<String>,
    #[serde(default)]
    stream_url: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Which wire field names the sound when both are present
#[derive(Clone, Copy)]
enum IdField {
    Id,
    SoundId,
}

impl RawSound {
    fn take_id<E: serde::de::Error>(&mut self, preferred: IdField) -> Result<SoundId, E> {
        let (first, second) = match preferred {
            IdField::Id => (self.id.take(), self.sound_id.take()),
            IdField::SoundId => (self.sound_id.take(), self.id.take()),
        };
        first.or(second).ok_or_else(|| {
            E::custom(format!("sound {:?} has neither id nor sound_id", self.title))
        })
    }

    fn into_sound<E: serde::de::Error>(mut self, preferred: IdField) -> Result<Sound, E> {
        Ok(Sound {
            id: self.take_id(preferred)?,
            title: self.title,
            photo: self.photo,
            source: SoundSource::default(),
        })
    }
}

/// A sound as listed in the home feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sound {
    pub id: SoundId,
    pub title: String,
    pub photo: Option<String>,
    pub source: SoundSource,
}

/// Samples and sample listings: `id` first, then `sound_id`
impl<'de> Deserialize<'de> for Sound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawSound::deserialize(deserializer)?.into_sound(IdField::Id)
    }
}

/// Deserialize a profile's own `sounds[]`, where `sound_id` names the sound
///
/// Use with `#[serde(deserialize_with = "...")]`. Entries come back tagged
/// [`SoundSource::Profile`].
pub fn deserialize_profile_sounds<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Sound>, D::Error> {
    Vec::<RawSound>::deserialize(deserializer)?
        .into_iter()
        .map(|raw| {
            raw.into_sound(IdField::SoundId)
                .map(|s| s.with_source(SoundSource::Profile))
        })
        .collect()
}

impl Sound {
    /// Tag the sound with its feed source
    #[must_use]
    pub fn with_source(mut self, source: SoundSource) -> Self {
        self.source = source;
        self
    }
}

/// Full sound details as returned by the sound detail endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundDetail {
    pub id: SoundId,
    pub title: String,
    pub photo: Option<String>,
    /// Streaming URL; sample sounds may omit it
    pub stream_url: Option<String>,
    pub description: Option<String>,
}

impl<'de> Deserialize<'de> for SoundDetail {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut raw = RawSound::deserialize(deserializer)?;
        Ok(Self {
            id: raw.take_id(IdField::Id)?,
            title: raw.title,
            photo: raw.photo,
            stream_url: raw.stream_url,
            description: raw.description,
        })
    }
}

/// Home feed tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedFilter {
    /// Profile sounds followed by samples
    #[default]
    All,
    /// Only the profile's own full sounds
    MySounds,
    /// Only public samples
    NewSounds,
}

/// Both halves of the home feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundFeed {
    /// Profile sounds and profile samples
    pub profile_sounds: Vec<Sound>,
    /// Public samples
    pub sample_sounds: Vec<Sound>,
}

impl SoundFeed {
    /// Select the sounds shown under a tab
    pub fn filter(&self, filter: FeedFilter) -> Vec<&Sound> {
        match filter {
            FeedFilter::All => self
                .profile_sounds
                .iter()
                .chain(self.sample_sounds.iter())
                .collect(),
            FeedFilter::MySounds => self
                .profile_sounds
                .iter()
                .filter(|s| s.source == SoundSource::Profile)
                .collect(),
            FeedFilter::NewSounds => self.sample_sounds.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.profile_sounds.len() + self.sample_sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Image URL for a sound's cover photo
pub fn sound_image_url(image_base_url: &str, photo: &str) -> String {
    format!("{}/{}", image_base_url.trim_end_matches('/'), photo)
}

/// Direct MP3 URL for a sample sound
pub fn sample_stream_url(sample_base_url: &str, sound_id: &SoundId) -> String {
    format!("{}/{}.mp3", sample_base_url.trim_end_matches('/'), sound_id)
}
