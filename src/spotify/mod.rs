//! # Spotify Integration Module
//!
//! Thin access layer over the three Spotify Web API resources the service
//! needs. Nothing here interprets playback state; that happens in
//! [`crate::playback`].
//!
//! ## Architecture
//!
//! ```text
//! playback::current_status
//!          ↓
//! Spotify Integration Layer
//!     ├── auth    (refresh token exchange)
//!     └── player  (currently playing, recently played)
//!          ↓
//! HttpClient trait ── ReqwestClient (reqwest, rustls)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST https://accounts.spotify.com/api/token` - refresh token exchange
//! - `GET /me/player/currently-playing` - current playback
//! - `GET /me/player/recently-played?limit=1` - last played track
//!
//! ## Error Handling
//!
//! Every call is a single attempt. There is no retry on 429 or 5xx and no
//! backoff; failures surface as [`crate::Error`] and are answered by the
//! handler.
//!
//! ## Testing
//!
//! All requests go through [`HttpClient`], so tests substitute a scripted
//! client and assert on the exact requests issued.

pub mod auth;
pub mod client;
pub mod player;

pub use client::{Auth, HttpClient, ProviderRequest, ProviderResponse, ReqwestClient};
