//! Unified HTTP error type for axum request handlers.
//!
//! [`AppError`] wraps [`anyhow::Error`] and converts it into a `500` response
//! via [`IntoResponse`]. Handlers return `Result<T, AppError>` and propagate
//! failures with `?`; no retry is attempted at this layer.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn uid(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
//!     let id = state.uids.generate()?;
//!     Ok(Json(UidResponse { id }))
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Wraps [`anyhow::Error`] so it can be returned from axum handlers.
///
/// Any type that implements `Into<anyhow::Error>` (which includes `io::Error`
/// and [`crate::uid::UidError`]) converts into an [`AppError`] via the blanket
/// [`From`] implementation.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "handler error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(e: E) -> Self {
        Self(e.into())
    }
}
