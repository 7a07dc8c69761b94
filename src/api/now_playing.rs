use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::AppState,
    config,
    error::{Error, Result},
    playback,
    types::StatusBody,
    warning,
};

/// Reports what the configured account is playing, or played last.
///
/// Credentials are read from the state's configuration provider on every
/// request. A missing secret is answered before any outbound call; every
/// later failure is logged once and answered with a generic label plus the
/// failure's message.
pub async fn now_playing(State(state): State<AppState>) -> Result<Json<StatusBody>> {
    let credentials = config::credentials(state.config.as_ref()).inspect_err(|e| {
        if let Error::MissingConfig { missing } = e {
            warning!("Missing configuration: {}", missing.join(", "));
        }
    })?;

    let status = playback::current_status(state.client.as_ref(), &credentials)
        .await
        .inspect_err(|e| warning!("Spotify API Error: {}", e))?;

    Ok(Json(StatusBody::from(status)))
}

/// Answers CORS preflight requests without touching configuration or upstream.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
