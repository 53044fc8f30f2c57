mod credentials;
mod ids;
mod profile;
mod sound;

pub use credentials::{Credentials, LOGIN_CODE_KEY, PROFILE_ID_KEY};
pub use ids::{ProfileId, SoundId};
pub use profile::{Language, Profile, ProfileUpdate};
pub use sound::{
    deserialize_profile_sounds, sample_stream_url, sound_image_url, FeedFilter, Sound, SoundDetail, SoundFeed, SoundSource,
};
