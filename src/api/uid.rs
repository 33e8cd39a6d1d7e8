//! Identifier endpoint (`GET /uid`).

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::{api::AppState, error::AppError, uid::Uid};

/// Body of a successful `/uid` response: `{"id":"<identifier>"}`.
#[derive(Debug, Serialize)]
pub struct UidResponse {
    pub id: Uid,
}

/// `GET /uid` — mint a fresh identifier.
///
/// The response is JSON with an explicit UTF-8 charset and is readable from
/// any origin. An entropy failure becomes a `500` through [`AppError`].
pub async fn uid(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let id = state.uids.generate()?;
    debug!(%id, "minted uid");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json; charset=utf-8"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        Json(UidResponse { id }),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt; // oneshot

    use crate::{
        api::{router, AppState},
        uid::{
            testing::{FailingEntropy, FixedClock, FixedEntropy},
            UidGenerator,
        },
    };

    fn get_uid() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/uid")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn uid_returns_json_id_with_cors_header() {
        let state = Arc::new(AppState::new(UidGenerator::new(
            FixedClock(1_728_042_909_768),
            FixedEntropy([0, 0, 0, 0, 0, 1]),
        )));

        let resp = router(state).oneshot(get_uid()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"id":"m1uo4qq01"}"#);
    }

    #[tokio::test]
    async fn uid_body_has_exactly_one_base36_id_key() {
        let state = Arc::new(AppState::new(UidGenerator::system()));

        let resp = router(state).oneshot(get_uid()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let obj = json.as_object().expect("body should be a JSON object");
        assert_eq!(obj.len(), 1, "unexpected keys: {obj:?}");

        let id = obj["id"].as_str().expect("id should be a string");
        assert!(!id.is_empty());
        assert!(
            id.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()),
            "id is not base36: {id}"
        );
    }

    #[tokio::test]
    async fn consecutive_requests_get_distinct_ids() {
        let app = router(Arc::new(AppState::new(UidGenerator::system())));

        let mut ids = Vec::new();
        for _ in 0..2 {
            let resp = app.clone().oneshot(get_uid()).await.unwrap();
            let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            ids.push(json["id"].as_str().unwrap().to_string());
        }
        assert_ne!(ids[0], ids[1]);
    }

    #[tokio::test]
    async fn entropy_failure_is_a_server_error() {
        let state = Arc::new(AppState::new(UidGenerator::new(FixedClock(0), FailingEntropy)));

        let resp = router(state).oneshot(get_uid()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(
            json["error"].as_str().unwrap().contains("random source unavailable"),
            "error text not propagated: {json:?}"
        );
    }
}
