use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    spotify::SpotifyClient,
    types::{NowPlaying, NowPlayingResponse, Track},
};

/// Decides which track to report: the one playing right now, or else the
/// most recently played one.
#[derive(Clone)]
pub struct NowPlayingResolver {
    client: SpotifyClient,
}

impl NowPlayingResolver {
    pub fn new(client: SpotifyClient) -> Self {
        NowPlayingResolver { client }
    }

    pub async fn resolve(&self) -> Result<NowPlaying> {
        // A throttled or failing currently-playing endpoint is not fatal, the
        // recently played track is still worth showing.
        let current = match self.client.currently_playing().await {
            Ok(current) => current,
            Err(Error::UpstreamStatus { status, .. }) => {
                warn!(%status, "currently playing unavailable, falling back");
                None
            }
            Err(e) => return Err(e),
        };

        if let Some(current) = current {
            if current.is_playing {
                let item = current.item.ok_or_else(|| {
                    Error::UpstreamData("playback is active but no item was reported".to_string())
                })?;
                let track: Track = serde_json::from_value(item).map_err(|e| {
                    Error::UpstreamData(format!("currently playing item is not a track: {}", e))
                })?;
                return NowPlaying::from_track(track, true);
            }
        }

        debug!("nothing playing, falling back to recently played");
        let recent = self.client.recently_played().await?.ok_or_else(|| {
            Error::UpstreamData("recently played returned no content".to_string())
        })?;
        let entry = recent.items.into_iter().next().ok_or_else(|| {
            Error::UpstreamData("recently played returned no items".to_string())
        })?;

        NowPlaying::from_track(entry.track, false)
    }

    /// Resolves and folds any failure into the error envelope.
    pub async fn respond(&self) -> NowPlayingResponse {
        let result = self.resolve().await;
        if let Err(e) = &result {
            warn!("failed to resolve now playing: {}", e);
        }
        NowPlayingResponse::from(result)
    }
}
