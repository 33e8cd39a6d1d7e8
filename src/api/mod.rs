//! HTTP surface: two fixed routes and the state they share.
//!
//! Handlers only translate HTTP concerns; identifier logic lives in
//! [`crate::uid`]. Anything outside `/ping` and `/uid` falls through to
//! axum's default `404`.

pub mod health;
pub mod uid;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::uid::UidGenerator;

/// Shared application state injected into handlers via [`axum::extract::State`].
#[derive(Debug)]
pub struct AppState {
    /// Process-wide identifier generator; safe for concurrent use.
    pub uids: UidGenerator,
}

impl AppState {
    pub fn new(uids: UidGenerator) -> Self {
        Self { uids }
    }
}

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", get(health::ping))
        .route("/uid", get(uid::uid))
        .with_state(state)
}
