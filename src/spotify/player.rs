use crate::{
    config,
    error::Result,
    spotify::{Auth, HttpClient, ProviderRequest, ProviderResponse},
    types::AccessGrant,
};

pub fn currently_playing_url() -> String {
    format!("{uri}/me/player/currently-playing", uri = config::SPOTIFY_API_URL)
}

pub fn recently_played_url(limit: u32) -> String {
    format!(
        "{uri}/me/player/recently-played?limit={limit}",
        uri = config::SPOTIFY_API_URL,
        limit = limit
    )
}

/// Requests the user's current playback.
///
/// The raw response is returned untouched: Spotify answers `204 No Content`
/// when nothing is playing, and the caller decides what that means.
pub async fn currently_playing(
    client: &dyn HttpClient,
    grant: &AccessGrant,
) -> Result<ProviderResponse> {
    let request = ProviderRequest::get(
        currently_playing_url(),
        Auth::Bearer(grant.access_token.clone()),
    );
    client.send(request).await
}

/// Requests the user's last `limit` played tracks, newest first.
pub async fn recently_played(
    client: &dyn HttpClient,
    grant: &AccessGrant,
    limit: u32,
) -> Result<ProviderResponse> {
    let request = ProviderRequest::get(
        recently_played_url(limit),
        Auth::Bearer(grant.access_token.clone()),
    );
    client.send(request).await
}
