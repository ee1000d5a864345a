//! The one route this server exists for.
//!
//! `GET /` returns a fixed plain-text greeting. There is no state to read,
//! nothing to parse, and no way for the handler to fail — every response is
//! byte-identical. Anything other than `GET /` falls through to axum's
//! built-in 404 (unknown path) or 405 (wrong method) handling.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

/// The greeting payload, byte-for-byte.
pub const GREETING: &str = "Hello from AWS DevOps Project using EC2 and GitHub Actions!";

/// Build the axum router with the single root route.
pub fn router() -> Router {
    Router::new().route("/", get(greeting))
}

/// `GET /` — always 200 with the greeting.
///
/// axum serves `&'static str` bodies as `text/plain; charset=utf-8`.
pub async fn greeting() -> impl IntoResponse {
    (StatusCode::OK, GREETING)
}
