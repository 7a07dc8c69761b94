use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::{self, EnvConfig},
    error, playback,
    spotify::ReqwestClient,
    types::{PlaybackStatus, StatusBody, StatusTableRow},
    utils,
};

/// Performs one status lookup with the environment's credentials and prints it.
///
/// Uses the same code path as the HTTP endpoint, so the `--json` output is
/// exactly what a caller of `GET /api/spotify` would receive.
///
/// # Error Handling
///
/// Missing configuration and upstream failures terminate the program with an
/// error message and a non-zero exit code.
pub async fn now(json: bool) {
    let credentials = match config::credentials(&EnvConfig) {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playback state...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let status = playback::current_status(&ReqwestClient::new(), &credentials).await;
    pb.finish_and_clear();

    let status = match status {
        Ok(s) => s,
        Err(e) => error!("Failed to fetch Spotify data. Err: {}", e),
    };

    if json {
        match serde_json::to_string_pretty(&StatusBody::from(status)) {
            Ok(body) => println!("{}", body),
            Err(e) => error!("Failed to encode status. Err: {}", e),
        }
        return;
    }

    println!("{}", Table::new(status_rows(&status)));
}

fn status_rows(status: &PlaybackStatus) -> Vec<StatusTableRow> {
    let row = |field: &str, value: String| StatusTableRow {
        field: field.to_string(),
        value,
    };

    let mut rows = vec![row("Playing", status.is_playing().to_string())];

    if let Some(track) = status.track() {
        rows.push(row("Title", track.title.clone()));
        rows.push(row("Artist", track.artist.clone()));
        rows.push(row("Album", track.album.clone()));
        if let Some(url) = &track.song_url {
            rows.push(row("Link", url.clone()));
        }
    }

    match status {
        PlaybackStatus::Playing {
            progress, duration, ..
        } => {
            let position = progress.map(utils::format_duration_ms).unwrap_or_default();
            rows.push(row(
                "Position",
                format!("{} / {}", position, utils::format_duration_ms(*duration)),
            ));
        }
        PlaybackStatus::RecentlyPlayed { played_at, .. } => {
            rows.push(row("Played at", played_at.clone()));
        }
        PlaybackStatus::NoActivity(idle) => {
            rows.push(row("Status", idle.message().to_string()));
        }
    }

    rows
}
