//! Configuration management for the now-playing relay.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. The configuration is read once at startup: missing credentials stop
//! the process before the server binds, never per request.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the local data directory
//! 3. `.env` in the working directory
//! 4. Application defaults for optional settings

use std::{env, path::PathBuf, time::Duration};

use crate::error::{Error, Result};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// The file in the platform specific local data directory is tried first:
/// - Linux: `~/.local/share/nowplaying-relay/.env`
/// - macOS: `~/Library/Application Support/nowplaying-relay/.env`
/// - Windows: `%LOCALAPPDATA%/nowplaying-relay/.env`
///
/// then `.env` in the working directory. Neither file has to exist, and
/// variables already present in the environment are never overridden.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<()> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::Config(format!("cannot create {}: {}", parent.display(), e)))?;
    }

    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| Error::Config(format!("cannot load {}: {}", path.display(), e)))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::Config(format!("cannot load .env: {}", e))),
    }
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("nowplaying-relay/.env");
    path
}

/// OAuth client credentials and the long lived refresh token of the account.
#[derive(Clone, PartialEq, Eq)]
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

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// Address the HTTP server binds to, e.g. `127.0.0.1:3000`.
    pub server_address: String,
    /// Base URL of the Spotify Web API, without trailing slash.
    pub api_url: String,
    /// Spotify OAuth token endpoint.
    pub token_url: String,
    /// Upper bound for every outbound request.
    pub http_timeout: Duration,
}

/// Required variables, each with the legacy name accepted as a fallback.
const CLIENT_ID: [&str; 2] = ["CLIENT_ID", "SPOTIFY_CLIENT_ID"];
const CLIENT_SECRET: [&str; 2] = ["CLIENT_SECRET", "SPOTIFY_SECRET_ID"];
const REFRESH_TOKEN: [&str; 2] = ["REFRESH_TOKEN", "SPOTIFY_REFRESH_TOKEN"];

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming every missing credential, or describing
    /// an invalid `HTTP_TIMEOUT_SECS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |names: [&str; 2]| names.into_iter().find_map(|name| get(name));

        let credentials = match (
            required(CLIENT_ID),
            required(CLIENT_SECRET),
            required(REFRESH_TOKEN),
        ) {
            (Some(client_id), Some(client_secret), Some(refresh_token)) => Credentials {
                client_id,
                client_secret,
                refresh_token,
            },
            (client_id, client_secret, refresh_token) => {
                let missing: Vec<&str> = [
                    (CLIENT_ID[0], client_id.is_none()),
                    (CLIENT_SECRET[0], client_secret.is_none()),
                    (REFRESH_TOKEN[0], refresh_token.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();

                return Err(Error::Config(format!(
                    "missing required environment variable(s): {}",
                    missing.join(", ")
                )));
            }
        };

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(Error::Config(format!(
                        "HTTP_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                        raw
                    )));
                }
            },
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Config {
            credentials,
            server_address: get("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            api_url: trim_url(get("SPOTIFY_API_URL"), DEFAULT_SPOTIFY_API_URL),
            token_url: trim_url(get("SPOTIFY_API_TOKEN_URL"), DEFAULT_SPOTIFY_API_TOKEN_URL),
            http_timeout,
        })
    }
}

fn trim_url(value: Option<String>, default: &str) -> String {
    value
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}
