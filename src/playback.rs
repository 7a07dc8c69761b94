//! Playback status resolution.
//!
//! One lookup walks an ordered chain and stops at the first step that yields
//! an answer:
//!
//! 1. currently playing, when the player reports a playable item
//! 2. the most recent history entry, when nothing is playing
//! 3. an idle placeholder
//!
//! Absence of music is never an error; only transport, authentication and
//! decoding failures are.

use reqwest::StatusCode;

use crate::{
    config::Credentials,
    error::Result,
    spotify::{self, HttpClient},
    types::{CurrentlyPlaying, Idle, PlaybackStatus, RecentlyPlayedResponse, TrackSnapshot},
    warning,
};

const HISTORY_LIMIT: u32 = 1;

/// Resolves the current playback status for the account behind `credentials`.
///
/// Performs the token exchange and then two or three sequential requests. No
/// step is retried.
///
/// # Errors
///
/// Fails when the token exchange is rejected, a request cannot be sent, or a
/// body that has to be read is not valid JSON.
pub async fn current_status(
    client: &dyn HttpClient,
    credentials: &Credentials,
) -> Result<PlaybackStatus> {
    let grant = spotify::auth::refresh_access_token(client, credentials).await?;
    let response = spotify::player::currently_playing(client, &grant).await?;

    if response.status == StatusCode::NO_CONTENT || response.status.as_u16() >= 400 {
        // An error status is indistinguishable from idle for the caller.
        if response.status != StatusCode::NO_CONTENT {
            warning!(
                "currently-playing answered {}, falling back to recently played",
                response.status
            );
        }

        let history = spotify::player::recently_played(client, &grant, HISTORY_LIMIT).await?;
        if !history.is_success() {
            return Ok(PlaybackStatus::NoActivity(Idle::NoRecentActivity));
        }

        let recent = history.json::<RecentlyPlayedResponse>()?;
        return Ok(most_recent(recent));
    }

    let current = response.json::<Option<CurrentlyPlaying>>()?;
    Ok(now_playing(current))
}

fn now_playing(current: Option<CurrentlyPlaying>) -> PlaybackStatus {
    let Some(current) = current else {
        return PlaybackStatus::NoActivity(Idle::NothingPlaying);
    };

    match current.item {
        Some(track) => PlaybackStatus::Playing {
            track: TrackSnapshot::from(&track),
            progress: current.progress_ms,
            duration: track.duration_ms,
        },
        None => PlaybackStatus::NoActivity(Idle::NothingPlaying),
    }
}

fn most_recent(recent: RecentlyPlayedResponse) -> PlaybackStatus {
    match recent.items.into_iter().next() {
        Some(entry) => PlaybackStatus::RecentlyPlayed {
            track: TrackSnapshot::from(&entry.track),
            played_at: entry.played_at,
        },
        None => PlaybackStatus::NoActivity(Idle::NoRecentActivity),
    }
}
