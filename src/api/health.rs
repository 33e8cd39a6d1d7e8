//! Liveness probe endpoint.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// `GET /ping` — always returns 200 with the plaintext body `ok`.
///
/// Has no dependencies and never blocks, so it is safe to use as a
/// liveness probe. Query strings and request headers are ignored.
pub async fn ping() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "ok",
    )
}
