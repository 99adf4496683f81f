use std::sync::Arc;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::{Error, Result},
    management::TokenManager,
    types::AccessToken,
    utils,
};

/// Authenticated access to the Spotify Web API.
///
/// Cloning is cheap; clones share the HTTP connection pool and the token cache.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Arc<TokenManager>,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: impl Into<String>, tokens: Arc<TokenManager>) -> Self {
        SpotifyClient {
            http,
            api_url: api_url.into(),
            tokens,
        }
    }

    /// Builds the HTTP client (with the configured timeout) and the token
    /// manager from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let tokens = Arc::new(TokenManager::new(
            http.clone(),
            config.token_url.clone(),
            config.credentials.clone(),
        ));

        Ok(SpotifyClient::new(http, config.api_url.clone(), tokens))
    }

    /// Absolute URL of an endpoint below the API base, e.g. `me/player`.
    pub fn url(&self, path: &str) -> String {
        utils::endpoint_url(&self.api_url, path)
    }

    /// Authenticated GET returning the decoded body.
    ///
    /// A `401` refreshes the token and retries exactly once. `204 No Content`
    /// yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - [`Error::Auth`] if the refresh fails or the retried request is still
    ///   unauthorized.
    /// - [`Error::UpstreamStatus`] for any other non-success status, so the
    ///   caller can decide whether it is fatal.
    /// - [`Error::UpstreamData`] for a body that does not decode into `T`.
    /// - [`Error::Network`] for transport failures.
    pub async fn fetch<T>(&self, url: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let token = self.tokens.get_token().await?;
        let mut response = self.get(url, &token).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            debug!(url, "access token rejected, refreshing and retrying");
            let token = self.tokens.invalidate_and_refresh(&token).await?;
            response = self.get(url, &token).await?;

            if response.status() == StatusCode::UNAUTHORIZED {
                warn!(url, "refreshed access token rejected");
                return Err(Error::Auth(format!(
                    "{} rejected the refreshed access token",
                    url
                )));
            }
        }

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                url: url.to_string(),
                status,
                body,
            });
        }

        match serde_json::from_str(&body) {
            Ok(x) => Ok(Some(x)),
            Err(e) => Err(Error::UpstreamData(format!(
                "failed to deserialize response from {}: {}",
                url, e
            ))),
        }
    }

    async fn get(&self, url: &str, token: &AccessToken) -> Result<Response> {
        Ok(self
            .http
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await?)
    }
}
