use crate::{
    error::Result,
    spotify::SpotifyClient,
    types::{CurrentlyPlaying, RecentlyPlayed},
};

pub const CURRENTLY_PLAYING_PATH: &str = "me/player/currently-playing";
pub const RECENTLY_PLAYED_PATH: &str = "me/player/recently-played?limit=1";

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-the-users-currently-playing-track
    ///
    /// `None` when Spotify answers `204`: no active device.
    pub async fn currently_playing(&self) -> Result<Option<CurrentlyPlaying>> {
        self.fetch(&self.url(CURRENTLY_PLAYING_PATH)).await
    }

    /// https://developer.spotify.com/documentation/web-api/reference/get-recently-played
    ///
    /// Only the most recent entry is requested.
    pub async fn recently_played(&self) -> Result<Option<RecentlyPlayed>> {
        self.fetch(&self.url(RECENTLY_PLAYED_PATH)).await
    }
}
