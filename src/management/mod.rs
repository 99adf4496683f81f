mod auth;
mod now_playing;

pub use auth::TokenManager;
pub use now_playing::NowPlayingResolver;
