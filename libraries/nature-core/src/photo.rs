//! Profile photo URL resolution.
//!
//! Stored profile photos are spread across five shard directories on the asset
//! server. The shard is the largest divisor in `[5, 4, 3, 2, 1]` that divides the
//! profile id, so the lookup always terminates at `1`.

use crate::types::ProfileId;

/// Divisors tried in order; larger ones win ties.
const SHARD_DIVISORS: [u64; 5] = [5, 4, 3, 2, 1];

/// Default avatar filename under the image base URL.
pub const DEFAULT_AVATAR: &str = "default-avatar.png";

/// Shard directory (`1..=5`) holding a profile's photo.
///
/// Ids coprime to 2, 3, 4 and 5 (e.g. 7, 11, 13) land in shard `1`.
pub fn resolve_shard(profile_id: ProfileId) -> u8 {
    let id = profile_id.get();
    SHARD_DIVISORS
        .iter()
        .find(|&&d| id % d == 0)
        .map_or(1, |&d| d as u8)
}

/// URL to display for a profile photo.
///
/// A missing, empty or whitespace-only filename yields the default avatar.
pub fn resolve_photo_url(
    profile_id: ProfileId,
    photo_filename: Option<&str>,
    image_base_url: &str,
    profile_asset_base_url: &str,
) -> String {
    match photo_filename.filter(|f| !f.trim().is_empty()) {
        Some(filename) => format!(
            "{}/{}/{}",
            profile_asset_base_url.trim_end_matches('/'),
            resolve_shard(profile_id),
            filename
        ),
        None => default_avatar_url(image_base_url),
    }
}

/// URL of the default avatar image
pub fn default_avatar_url(image_base_url: &str) -> String {
    format!("{}/{}", image_base_url.trim_end_matches('/'), DEFAULT_AVATAR)
}
