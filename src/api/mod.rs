//! # API Module
//!
//! HTTP endpoints served by the relay.
//!
//! ## Endpoints
//!
//! - [`now_playing`] - answers `GET` on every path with the now-playing
//!   envelope:
//!
//! ```json
//! {
//!   "isPlaying": true,
//!   "title": "...",
//!   "artist": "...",
//!   "albumImageUrl": "...",
//!   "songUrl": "..."
//! }
//! ```
//!
//! or, when anything upstream fails, `{"isPlaying": false, "error": "..."}`.
//! The status is `200` either way so embedding widgets see a stable contract.
//! Responses carry `Cache-Control: s-maxage=1, stale-while-revalidate` for
//! CDN caching.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use nowplaying_relay::api::now_playing;
//!
//! let app = Router::new()
//!     .route("/", get(now_playing))
//!     .layer(Extension(resolver));
//! ```

mod now_playing;

pub use now_playing::{CACHE_CONTROL_VALUE, now_playing};
