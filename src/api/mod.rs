//! # API Module
//!
//! HTTP handlers for the now-playing service.
//!
//! ## Endpoints
//!
//! - [`now_playing`] - `GET /api/spotify`, the normalized playback status
//! - [`preflight`] - `OPTIONS /api/spotify`, answered without upstream calls
//! - [`health`] - `GET /health`, status and version for probes
//!
//! Every response, errors included, passes through [`cors_headers`] so that a
//! browser on any origin may read it.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nowplaying::{api::AppState, config::EnvConfig, server, spotify::ReqwestClient};
//!
//! let state = AppState::new(Arc::new(EnvConfig), Arc::new(ReqwestClient::new()));
//! let app = server::create_router(state);
//! ```

use std::sync::Arc;

use axum::{
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    response::Response,
};

use crate::{config::ConfigProvider, spotify::HttpClient};

mod health;
mod now_playing;

pub use health::health;
pub use now_playing::{now_playing, preflight};

/// Shared, immutable handler state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<dyn ConfigProvider>,
    pub client: Arc<dyn HttpClient>,
}

impl AppState {
    pub fn new(config: Arc<dyn ConfigProvider>, client: Arc<dyn HttpClient>) -> Self {
        AppState { config, client }
    }
}

/// Adds the cross-origin headers to a response.
pub async fn cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
