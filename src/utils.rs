use base64::{Engine, engine::general_purpose::STANDARD};

use crate::config::Credentials;

/// Value of the `Authorization` header for the client credentials:
/// `Basic base64(client_id:client_secret)`.
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", STANDARD.encode(raw))
}

/// Joins an API base URL and an endpoint path with exactly one slash.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
