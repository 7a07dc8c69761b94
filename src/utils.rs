use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::TrackArtist;

/// Encodes `client_id:client_secret` for an HTTP basic `Authorization` header.
pub fn encode_basic_credential(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", client_id, client_secret))
}

pub fn join_artist_names(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a millisecond count as `m:ss`, or `h:mm:ss` past one hour.
pub fn format_duration_ms(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
