use reqwest::{Client, header::AUTHORIZATION};
use tracing::debug;

use crate::{
    config::Credentials,
    error::{Error, Result},
    types::{AccessToken, TokenResponse},
    utils,
};

/// Exchanges the long lived refresh token for a fresh access token.
///
/// Sends the OAuth 2.0 `refresh_token` grant to `token_url`, authenticating
/// the client with `Basic base64(client_id:client_secret)`.
///
/// # Errors
///
/// - [`Error::Auth`] if the accounts service answers with a non-success
///   status (the upstream body is included in the message), or if the body
///   carries no usable `access_token`.
/// - [`Error::Network`] if the request cannot be sent or times out.
pub async fn refresh_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken> {
    debug!(token_url, "requesting access token via refresh_token grant");

    let res = client
        .post(token_url)
        .header(AUTHORIZATION, utils::basic_auth_header(credentials))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(Error::Auth(format!(
            "failed to refresh token ({}): {}",
            status, body
        )));
    }

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| Error::Auth(format!("malformed token response: {}", e)))?;

    match token.access_token {
        Some(access_token) if !access_token.is_empty() => {
            debug!(
                expires_in = token.expires_in,
                scope = token.scope.as_deref().unwrap_or_default(),
                "access token refreshed"
            );
            Ok(access_token)
        }
        _ => Err(Error::Auth(
            "token response did not contain an access_token".to_string(),
        )),
    }
}
