use reqwest::Client;
use tokio::sync::Mutex;
use tracing::info;

use crate::{config::Credentials, error::Result, spotify, types::AccessToken};

/// Owns the single cached access token of the process.
///
/// The token is fetched lazily on first use and only replaced after Spotify
/// rejects it. The mutex is held across a refresh, so concurrent requests wait
/// for one grant instead of each running their own.
pub struct TokenManager {
    client: Client,
    token_url: String,
    credentials: Credentials,
    token: Mutex<Option<AccessToken>>,
}

impl TokenManager {
    pub fn new(client: Client, token_url: impl Into<String>, credentials: Credentials) -> Self {
        TokenManager {
            client,
            token_url: token_url.into(),
            credentials,
            token: Mutex::new(None),
        }
    }

    /// Returns the cached token, running the refresh grant if there is none.
    pub async fn get_token(&self) -> Result<AccessToken> {
        let mut token = self.token.lock().await;
        if let Some(current) = token.as_ref() {
            return Ok(current.clone());
        }

        let fresh = self.refresh().await?;
        *token = Some(fresh.clone());
        Ok(fresh)
    }

    /// Replaces `stale` after Spotify rejected it.
    ///
    /// If the cache already holds a different token, another request has
    /// refreshed in the meantime and that token is returned as is.
    pub async fn invalidate_and_refresh(&self, stale: &AccessToken) -> Result<AccessToken> {
        let mut token = self.token.lock().await;
        if let Some(current) = token.as_ref().filter(|current| *current != stale) {
            return Ok(current.clone());
        }

        // Drop the rejected token first so a failed refresh leaves nothing stale behind.
        *token = None;
        let fresh = self.refresh().await?;
        *token = Some(fresh.clone());
        Ok(fresh)
    }

    pub async fn cached(&self) -> Option<AccessToken> {
        self.token.lock().await.clone()
    }

    async fn refresh(&self) -> Result<AccessToken> {
        let token =
            spotify::auth::refresh_token(&self.client, &self.token_url, &self.credentials).await?;
        info!("obtained new Spotify access token");
        Ok(token)
    }
}
