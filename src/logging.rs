use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Calling this
/// twice is harmless; the second call leaves the first subscriber in place.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
