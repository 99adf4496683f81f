//! Spotify Now-Playing Relay Library
//!
//! This library exposes a single HTTP endpoint reporting what is currently (or
//! was most recently) playing on a Spotify account, for embedding in widgets
//! such as personal websites and badges.
//!
//! # Modules
//!
//! - `api` - HTTP handler producing the now-playing envelope
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy and the crate `Result` alias
//! - `logging` - `tracing` subscriber setup
//! - `management` - Token cache and now-playing resolution
//! - `server` - axum router and listener
//! - `spotify` - Spotify Web API client
//! - `types` - Upstream payloads and the response envelope
//! - `utils` - Small helpers
//!
//! # Example
//!
//! ```
//! use nowplaying_relay::{config::Config, management::NowPlayingResolver, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> nowplaying_relay::error::Result<()> {
//!     let config = Config::from_env()?;
//!     let resolver = NowPlayingResolver::new(SpotifyClient::from_config(&config)?);
//!     println!("{}", resolver.respond().await.to_json_pretty());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints a success message with a green checkmark.
///
/// The macro accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for unrecoverable startup errors such as missing credentials;
/// request handling never calls it.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues the operator should notice.
///
/// # Example
///
/// ```
/// warning!("Could not load .env file: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
