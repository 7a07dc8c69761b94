#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use nowplaying::{
    Error, Result,
    config::{self, Credentials},
    spotify::{HttpClient, ProviderRequest, ProviderResponse, player},
};
use reqwest::StatusCode;
use serde_json::{Value, json};

pub const ACCESS_TOKEN: &str = "access-123";

pub fn token_url() -> String {
    config::SPOTIFY_API_TOKEN_URL.to_string()
}

pub fn current_url() -> String {
    player::currently_playing_url()
}

pub fn recent_url() -> String {
    player::recently_played_url(1)
}

/// What the mock answers for one URL.
#[derive(Clone)]
enum Reply {
    Respond(ProviderResponse),
    /// The request never gets a response, as when DNS or the connection fails.
    Unreachable,
}

/// Scripted provider: one canned reply per URL, every request recorded.
///
/// A request to an unscripted URL panics, which makes "no call was made"
/// assertions fail loudly.
#[derive(Default)]
pub struct MockClient {
    routes: HashMap<String, Reply>,
    calls: Mutex<Vec<ProviderRequest>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.routes
            .insert(url.into(), Reply::Respond(ProviderResponse::new(status, body)));
        self
    }

    /// Fails every request to `url` with a transport error.
    pub fn unreachable(mut self, url: impl Into<String>) -> Self {
        self.routes.insert(url.into(), Reply::Unreachable);
        self
    }

    pub fn with_token(self) -> Self {
        self.on(token_url(), 200, token_body().to_string())
    }

    pub fn calls(&self) -> Vec<ProviderRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called_urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.url).collect()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn send(&self, request: ProviderRequest) -> Result<ProviderResponse> {
        self.calls.lock().unwrap().push(request.clone());
        match self.routes.get(&request.url).cloned() {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Unreachable) => Err(Error::Http(transport_error().await)),
            None => panic!("unexpected request to {}", request.url),
        }
    }
}

/// A genuine `reqwest` failure, produced without touching the network.
async fn transport_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("http://")
        .send()
        .await
        .unwrap_err()
}

pub fn credentials() -> Credentials {
    Credentials {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        refresh_token: "refresh-456".to_string(),
    }
}

pub fn full_config() -> HashMap<String, String> {
    HashMap::from([
        ("CLIENT_ID".to_string(), "client-id".to_string()),
        ("CLIENT_SECRET".to_string(), "client-secret".to_string()),
        ("REFRESH_TOKEN".to_string(), "refresh-456".to_string()),
    ])
}

pub fn token_body() -> Value {
    json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600,
        "scope": "user-read-currently-playing user-read-recently-played"
    })
}

pub fn track(name: &str, artists: &[&str], images: &[&str]) -> Value {
    json!({
        "name": name,
        "duration_ms": 215000,
        "artists": artists.iter().map(|a| json!({ "name": a })).collect::<Vec<_>>(),
        "album": {
            "name": "Record",
            "images": images
                .iter()
                .map(|url| json!({ "url": url, "height": 640, "width": 640 }))
                .collect::<Vec<_>>()
        },
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{}", name) }
    })
}

pub fn currently_playing_body(item: Value) -> String {
    currently_playing_body_at(json!(42000), item)
}

pub fn currently_playing_body_at(progress_ms: Value, item: Value) -> String {
    json!({
        "progress_ms": progress_ms,
        "is_playing": true,
        "currently_playing_type": "track",
        "item": item
    })
    .to_string()
}

pub fn recently_played_body(entries: &[(Value, &str)]) -> String {
    json!({
        "items": entries
            .iter()
            .map(|(track, played_at)| json!({ "track": track, "played_at": played_at }))
            .collect::<Vec<_>>(),
        "limit": 1
    })
    .to_string()
}
