use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Bearer token issued by the Spotify accounts service.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Never print the token itself.
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccessToken(len={})", self.0.len())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<AccessToken>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
}

/// `GET /me/player/currently-playing`
///
/// `item` is kept as raw JSON: it can be an episode instead of a track, and is
/// only decoded once the resolver decides to use it.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentlyPlaying {
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub item: Option<serde_json::Value>,
}

/// `GET /me/player/recently-played`
#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayed {
    #[serde(default)]
    pub items: Vec<PlayHistory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayHistory {
    pub track: Track,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub name: String,
    pub artists: Vec<Artist>,
    pub album: Album,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

/// The track record handed to widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub is_playing: bool,
    pub title: String,
    pub artist: String,
    pub album_image_url: String,
    pub song_url: String,
}

impl NowPlaying {
    /// Extracts the widget fields from a track.
    ///
    /// The first artist and the first album image are used; Spotify lists
    /// images largest first.
    pub fn from_track(track: Track, is_playing: bool) -> Result<Self> {
        let artist = track
            .artists
            .into_iter()
            .next()
            .ok_or_else(|| Error::UpstreamData(format!("track '{}' has no artists", track.name)))?;
        let image = track.album.images.into_iter().next().ok_or_else(|| {
            Error::UpstreamData(format!("album of track '{}' has no images", track.name))
        })?;

        Ok(NowPlaying {
            is_playing,
            title: track.name,
            artist: artist.name,
            album_image_url: image.url,
            song_url: track.external_urls.spotify,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub is_playing: bool,
    pub error: String,
}

/// JSON body returned for every request: either the track fields or an error,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NowPlayingResponse {
    Track(NowPlaying),
    Error(ErrorBody),
}

impl NowPlayingResponse {
    pub fn error(message: impl Into<String>) -> Self {
        NowPlayingResponse::Error(ErrorBody {
            is_playing: false,
            error: message.into(),
        })
    }

    pub fn is_playing(&self) -> bool {
        match self {
            NowPlayingResponse::Track(track) => track.is_playing,
            NowPlayingResponse::Error(_) => false,
        }
    }

    /// Pretty printed with a two space indent.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            let fallback = serde_json::json!({ "isPlaying": false, "error": e.to_string() });
            serde_json::to_string_pretty(&fallback).unwrap_or_default()
        })
    }
}

impl From<Result<NowPlaying>> for NowPlayingResponse {
    fn from(result: Result<NowPlaying>) -> Self {
        match result {
            Ok(track) => NowPlayingResponse::Track(track),
            Err(e) => NowPlayingResponse::error(e.to_string()),
        }
    }
}
