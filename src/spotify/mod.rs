//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API the relay needs:
//!
//! ```text
//! NowPlayingResolver
//!          ↓
//! SpotifyClient::fetch  ── 401 ──→ TokenManager::invalidate_and_refresh
//!          ↓                              ↓
//! GET /me/player/...               POST /api/token (refresh_token grant)
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - OAuth 2.0 refresh token grant against the accounts service
//! - [`client`] - [`SpotifyClient`], authenticated GET with a single re-auth retry
//! - [`player`] - `currently-playing` and `recently-played` endpoints
//!
//! ## Error Types
//!
//! Every function returns [`crate::error::Result`]:
//! - **`Error::Auth`** - token grant failed or a refreshed token was rejected
//! - **`Error::UpstreamData`** - unexpected status or payload from a data endpoint
//! - **`Error::Network`** - transport failure or timeout
//!
//! ## Endpoints
//!
//! - `POST /api/token` - refresh token exchange
//! - `GET /me/player/currently-playing` - active playback, `204` when idle
//! - `GET /me/player/recently-played?limit=1` - last played track

pub mod auth;
pub mod client;
pub mod player;

pub use client::SpotifyClient;
