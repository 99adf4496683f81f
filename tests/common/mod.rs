#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Extension, Json, Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use nowplaying_relay::{
    config::{Config, Credentials},
    management::NowPlayingResolver,
    spotify::SpotifyClient,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const REFRESH_TOKEN: &str = "refresh-token";

/// One scripted answer of the fake Spotify.
#[derive(Clone, Debug)]
pub enum Reply {
    Json(StatusCode, Value),
    Status(StatusCode),
    /// Answers `401` unless the request carries `Bearer token-<n>` with
    /// `n` at least the given value.
    OkWithTokenAtLeast(usize, Value),
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Reply::Json(StatusCode::OK, body)
    }
}

/// Scripted endpoint: the n-th call gets the n-th reply, the last one repeats.
#[derive(Default)]
pub struct Endpoint {
    replies: Mutex<Vec<Reply>>,
    calls: AtomicUsize,
    bearers: Mutex<Vec<String>>,
    delay: Mutex<Option<Duration>>,
}

impl Endpoint {
    async fn wait(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn next(&self, headers: &HeaderMap) -> Reply {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(auth) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
            self.bearers.lock().unwrap().push(auth.to_string());
        }
        let replies = self.replies.lock().unwrap();
        replies
            .get(n)
            .or_else(|| replies.last())
            .cloned()
            .unwrap_or(Reply::Status(StatusCode::NOT_FOUND))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn bearers(&self) -> Vec<String> {
        self.bearers.lock().unwrap().clone()
    }
}

/// In-process stand-in for the Spotify accounts service and Web API.
#[derive(Default)]
pub struct FakeSpotify {
    pub token: Endpoint,
    pub currently_playing: Endpoint,
    pub recently_played: Endpoint,
    pub basic_auth: Mutex<Vec<String>>,
    pub token_forms: Mutex<Vec<String>>,
}

impl FakeSpotify {
    /// Without scripted token replies every grant succeeds, handing out
    /// `token-1`, `token-2`, ...
    pub fn new() -> Arc<Self> {
        Arc::new(FakeSpotify::default())
    }

    pub fn token_replies(self: &Arc<Self>, replies: Vec<Reply>) -> Arc<Self> {
        *self.token.replies.lock().unwrap() = replies;
        Arc::clone(self)
    }

    pub fn currently_playing_replies(self: &Arc<Self>, replies: Vec<Reply>) -> Arc<Self> {
        *self.currently_playing.replies.lock().unwrap() = replies;
        Arc::clone(self)
    }

    pub fn recently_played_replies(self: &Arc<Self>, replies: Vec<Reply>) -> Arc<Self> {
        *self.recently_played.replies.lock().unwrap() = replies;
        Arc::clone(self)
    }

    pub fn token_delay(self: &Arc<Self>, delay: Duration) -> Arc<Self> {
        *self.token.delay.lock().unwrap() = Some(delay);
        Arc::clone(self)
    }

    pub fn recently_played_delay(self: &Arc<Self>, delay: Duration) -> Arc<Self> {
        *self.recently_played.delay.lock().unwrap() = Some(delay);
        Arc::clone(self)
    }

    /// Serves the fake on an ephemeral port and returns its base URL.
    pub async fn start(self: &Arc<Self>) -> String {
        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/me/player/currently-playing", get(currently_playing))
            .route("/v1/me/player/recently-played", get(recently_played))
            .layer(Extension(Arc::clone(self)));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }
}

async fn token(
    Extension(fake): Extension<Arc<FakeSpotify>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    fake.token.wait().await;

    if let Some(auth) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        fake.basic_auth.lock().unwrap().push(auth.to_string());
    }
    fake.token_forms.lock().unwrap().push(body);

    let has_script = !fake.token.replies.lock().unwrap().is_empty();
    let reply = fake.token.next(&HeaderMap::new());
    if has_script {
        return render(reply, &headers);
    }

    let n = fake.token.calls();
    Json(json!({
        "access_token": format!("token-{}", n),
        "token_type": "Bearer",
        "scope": "user-read-currently-playing user-read-recently-played",
        "expires_in": 3600
    }))
    .into_response()
}

async fn currently_playing(
    Extension(fake): Extension<Arc<FakeSpotify>>,
    headers: HeaderMap,
) -> Response {
    fake.currently_playing.wait().await;
    let reply = fake.currently_playing.next(&headers);
    render(reply, &headers)
}

async fn recently_played(
    Extension(fake): Extension<Arc<FakeSpotify>>,
    headers: HeaderMap,
) -> Response {
    fake.recently_played.wait().await;
    let reply = fake.recently_played.next(&headers);
    render(reply, &headers)
}

fn render(reply: Reply, headers: &HeaderMap) -> Response {
    match reply {
        Reply::Json(status, body) => (status, Json(body)).into_response(),
        Reply::Status(status) => status.into_response(),
        Reply::OkWithTokenAtLeast(min, body) => {
            let n = headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.strip_prefix("Bearer token-"))
                .and_then(|n| n.parse::<usize>().ok())
                .unwrap_or(0);
            if n >= min {
                (StatusCode::OK, Json(body)).into_response()
            } else {
                StatusCode::UNAUTHORIZED.into_response()
            }
        }
    }
}

pub fn track(name: &str, artist: &str, image: &str, url: &str) -> Value {
    json!({
        "name": name,
        "artists": [{ "name": artist, "id": "artist-id" }],
        "album": {
            "name": "Album",
            "images": [
                { "url": image, "width": 640, "height": 640 },
                { "url": format!("{}-small", image), "width": 64, "height": 64 }
            ]
        },
        "external_urls": { "spotify": url },
        "id": "track-id",
        "type": "track"
    })
}

pub fn playing(item: Value) -> Value {
    json!({ "is_playing": true, "currently_playing_type": "track", "item": item })
}

pub fn paused(item: Value) -> Value {
    json!({ "is_playing": false, "currently_playing_type": "track", "item": item })
}

pub fn history(item: Value) -> Value {
    json!({ "items": [{ "track": item, "played_at": "2026-10-18T09:00:00.000Z" }], "limit": 1 })
}

/// Config against the fake with a custom outbound timeout.
pub fn config_with_timeout(base_url: &str, timeout_secs: u64) -> Config {
    Config::from_lookup(|name| match name {
        "CLIENT_ID" => Some(CLIENT_ID.to_string()),
        "CLIENT_SECRET" => Some(CLIENT_SECRET.to_string()),
        "REFRESH_TOKEN" => Some(REFRESH_TOKEN.to_string()),
        "SPOTIFY_API_URL" => Some(format!("{}/v1", base_url)),
        "SPOTIFY_API_TOKEN_URL" => Some(format!("{}/api/token", base_url)),
        "HTTP_TIMEOUT_SECS" => Some(timeout_secs.to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn config(base_url: &str) -> Config {
    config_with_timeout(base_url, 2)
}

pub fn credentials() -> Credentials {
    Credentials {
        client_id: CLIENT_ID.to_string(),
        client_secret: CLIENT_SECRET.to_string(),
        refresh_token: REFRESH_TOKEN.to_string(),
    }
}

pub fn resolver(base_url: &str) -> NowPlayingResolver {
    NowPlayingResolver::new(SpotifyClient::from_config(&config(base_url)).unwrap())
}
