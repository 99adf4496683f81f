use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    api,
    error::{Error, Result},
    management::NowPlayingResolver,
};

/// Router answering `GET` on any path with the now-playing envelope.
pub fn router(resolver: NowPlayingResolver) -> Router {
    Router::new()
        .route("/", get(api::now_playing))
        .route("/{*path}", get(api::now_playing))
        .layer(Extension(resolver))
        .layer(TraceLayer::new_for_http())
}

/// Binds `address` and serves until the process is stopped.
pub async fn start_api_server(address: &str, resolver: NowPlayingResolver) -> Result<()> {
    let addr = SocketAddr::from_str(address)
        .map_err(|e| Error::Config(format!("invalid server address '{}': {}", address, e)))?;

    let listener = TcpListener::bind(&addr).await?;

    serve(listener, resolver).await
}

/// Serves on an already bound listener.
pub async fn serve(listener: TcpListener, resolver: NowPlayingResolver) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("listening on http://{}", addr);
    }

    axum::serve(listener, router(resolver))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(_) => std::future::pending::<()>().await,
    }
}
