use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

#[derive(Debug, Clone, Deserialize)]
pub struct AccessGrant {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentlyPlaying {
    pub progress_ms: Option<u64>,
    pub item: Option<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayedResponse {
    #[serde(default)]
    pub items: Vec<PlayHistory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayHistory {
    pub track: Track,
    pub played_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
    pub duration_ms: u64,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

/// Provider-agnostic description of one track instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSnapshot {
    pub title: String,
    pub artist: String,
    pub album: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_url: Option<String>,
}

impl From<&Track> for TrackSnapshot {
    fn from(track: &Track) -> Self {
        TrackSnapshot {
            title: track.name.clone(),
            artist: utils::join_artist_names(&track.artists),
            album: track.album.name.clone(),
            album_image_url: track.album.images.first().map(|image| image.url.clone()),
            song_url: track.external_urls.spotify.clone(),
        }
    }
}

/// Why there is no track to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idle {
    /// Nothing is playing and the listening history is empty or unavailable.
    NoRecentActivity,
    /// The player answered but carries no playable item.
    NothingPlaying,
}

impl Idle {
    pub fn message(&self) -> &'static str {
        match self {
            Idle::NoRecentActivity => "No recent activity",
            Idle::NothingPlaying => "No track currently playing",
        }
    }
}

/// Outcome of one status lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing {
        track: TrackSnapshot,
        progress: Option<u64>,
        duration: u64,
    },
    RecentlyPlayed {
        track: TrackSnapshot,
        played_at: String,
    },
    NoActivity(Idle),
}

impl PlaybackStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackStatus::Playing { .. })
    }

    pub fn track(&self) -> Option<&TrackSnapshot> {
        match self {
            PlaybackStatus::Playing { track, .. } | PlaybackStatus::RecentlyPlayed { track, .. } => {
                Some(track)
            }
            PlaybackStatus::NoActivity(_) => None,
        }
    }
}

/// JSON body returned for every successful lookup.
///
/// Field order on the wire: `isPlaying`, the track fields, then either
/// `progress`/`duration`, `playedAt`, or `message`. A playing body always
/// carries `progress`, as `null` when the player reports no position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBody {
    pub is_playing: bool,
    #[serde(flatten)]
    pub track: Option<TrackSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub played_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl From<PlaybackStatus> for StatusBody {
    fn from(status: PlaybackStatus) -> Self {
        let empty = StatusBody {
            is_playing: false,
            track: None,
            progress: None,
            duration: None,
            played_at: None,
            message: None,
        };

        match status {
            PlaybackStatus::Playing {
                track,
                progress,
                duration,
            } => StatusBody {
                is_playing: true,
                track: Some(track),
                progress: Some(progress),
                duration: Some(duration),
                ..empty
            },
            PlaybackStatus::RecentlyPlayed { track, played_at } => StatusBody {
                track: Some(track),
                played_at: Some(played_at),
                ..empty
            },
            PlaybackStatus::NoActivity(idle) => StatusBody {
                message: Some(idle.message()),
                ..empty
            },
        }
    }
}

#[derive(Tabled)]
pub struct StatusTableRow {
    pub field: String,
    pub value: String,
}
