//! Configuration management for the now-playing service.
//!
//! Secrets are looked up through a [`ConfigProvider`] on every request, so the
//! handler never touches process-wide state directly and tests can hand in a
//! plain map. Values may come from:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//!
//! Spotify endpoints are fixed and not configurable.

use std::{collections::HashMap, env, path::PathBuf};

use crate::error::Error;

pub const SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

pub const CLIENT_ID: &str = "CLIENT_ID";
pub const CLIENT_SECRET: &str = "CLIENT_SECRET";
pub const REFRESH_TOKEN: &str = "REFRESH_TOKEN";
pub const SERVER_ADDRESS: &str = "SERVER_ADDRESS";

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3000";

/// Source of configuration values.
///
/// Implementations must treat a key as absent when it has no usable value.
pub trait ConfigProvider: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads configuration from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvConfig;

impl ConfigProvider for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key)
            .filter(|value| !value.is_empty())
            .cloned()
    }
}

/// App identity plus the long-lived refresh credential.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Collects the three required secrets from `provider`.
///
/// # Errors
///
/// Returns [`Error::MissingConfig`] naming every key that is absent or empty.
pub fn credentials(provider: &dyn ConfigProvider) -> crate::Result<Credentials> {
    let client_id = provider.get(CLIENT_ID);
    let client_secret = provider.get(CLIENT_SECRET);
    let refresh_token = provider.get(REFRESH_TOKEN);

    match (client_id, client_secret, refresh_token) {
        (Some(client_id), Some(client_secret), Some(refresh_token)) => Ok(Credentials {
            client_id,
            client_secret,
            refresh_token,
        }),
        (client_id, client_secret, refresh_token) => {
            let missing = [
                (CLIENT_ID, client_id.is_none()),
                (CLIENT_SECRET, client_secret.is_none()),
                (REFRESH_TOKEN, refresh_token.is_none()),
            ]
            .into_iter()
            .filter_map(|(key, absent)| absent.then_some(key))
            .collect();

            Err(Error::MissingConfig { missing })
        }
    }
}

/// Loads environment variables from `.env` files, if any exist.
///
/// Looks for `nowplaying/.env` in the platform-specific local data directory
/// first, then for `.env` in the working directory. Variables that are already
/// set are never overridden. Missing files, and a data directory that does not
/// exist or cannot be read, are not an error: hosted deployments usually
/// inject the environment directly.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/nowplaying/.env`
/// - macOS: `~/Library/Application Support/nowplaying/.env`
/// - Windows: `%LOCALAPPDATA%/nowplaying/.env`
///
/// # Errors
///
/// Fails only if an existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("nowplaying/.env");

    let is_file = async_fs::metadata(&path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false);
    if is_file {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(_)) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Returns the address the HTTP service binds to.
///
/// Uses `SERVER_ADDRESS` when set, otherwise `0.0.0.0:3000`.
pub fn server_addr() -> String {
    EnvConfig
        .get(SERVER_ADDRESS)
        .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string())
}
