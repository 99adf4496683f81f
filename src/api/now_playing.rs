use axum::{
    Extension,
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
};

use crate::management::NowPlayingResolver;

pub const CACHE_CONTROL_VALUE: &str = "s-maxage=1, stale-while-revalidate";

/// Always answers `200`; upstream failures travel inside the JSON body.
pub async fn now_playing(Extension(resolver): Extension<NowPlayingResolver>) -> impl IntoResponse {
    let body = resolver.respond().await.to_json_pretty();

    (
        [
            (CONTENT_TYPE, "application/json"),
            (CACHE_CONTROL, CACHE_CONTROL_VALUE),
        ],
        body,
    )
}
