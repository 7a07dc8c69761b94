//! Error types for request handling.
//!
//! Every failure a request can hit ends up as one of these variants. The
//! handler turns it into a 500 response whose `error` field is the coarse
//! [`Error::label`] and whose `message` field is the variant's display text.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub const MISSING_CONFIG_LABEL: &str = "Missing environment variables";
pub const FETCH_FAILED_LABEL: &str = "Failed to fetch Spotify data";

#[derive(Error, Debug)]
pub enum Error {
    /// One or more required secrets are absent from the configuration provider.
    #[error("Please add CLIENT_ID, CLIENT_SECRET, and REFRESH_TOKEN to the server environment")]
    MissingConfig { missing: Vec<&'static str> },

    /// The refresh token exchange answered with a non-success status.
    #[error("Failed to get access token")]
    TokenRefresh(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wire value of the `error` field for this failure.
    pub fn label(&self) -> &'static str {
        match self {
            Error::MissingConfig { .. } => MISSING_CONFIG_LABEL,
            _ => FETCH_FAILED_LABEL,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        ErrorBody {
            error: err.label(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::from(&self)),
        )
            .into_response()
    }
}
