//! Error taxonomy shared by every layer of the relay.
//!
//! Request-time failures (`Auth`, `UpstreamData`, `Network`) never reach the
//! HTTP transport; they are folded into the response envelope by
//! [`crate::types::NowPlayingResponse`]. `Config` only occurs at startup.

/// Errors produced while configuring the relay or talking to Spotify.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The token exchange failed, or a refreshed token was rejected.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A data endpoint answered with an unexpected status or payload shape.
    #[error("Unexpected response from Spotify: {0}")]
    UpstreamData(String),

    /// A data endpoint answered with a non-success status other than `401`.
    #[error("Unexpected response from Spotify: {url} returned {status}: {body}")]
    UpstreamStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// Transport level failure reaching Spotify, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Binding or serving the local HTTP listener failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
