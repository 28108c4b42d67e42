//! The whole-snapshot state endpoint.
//!
//! `GET /api/state` returns `{ state, updatedAt }`; `PUT /api/state`
//! replaces the stored snapshot and returns `{ ok: true }`. Any other
//! method answers 405 with an `Allow` header. The document is one JSON
//! blob per deployment, last write wins.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::main_lib::AppState;

fn valid_state(value: &Value) -> bool {
    value.is_object()
}

async fn get_state(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let doc = state.state_repo.get_document()?;
    let (stored, updated_at) = match doc {
        Some((raw, updated_at)) => {
            // A corrupt stored blob reads as the empty state.
            let parsed: Value = serde_json::from_str(&raw).unwrap_or_else(|_| json!({}));
            let parsed = if valid_state(&parsed) { parsed } else { json!({}) };
            (parsed, updated_at)
        }
        None => (json!({}), None),
    };
    Ok(Json(json!({ "state": stored, "updatedAt": updated_at })))
}

#[derive(Deserialize)]
struct PutStateBody {
    #[serde(default)]
    state: Value,
}

async fn put_state(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PutStateBody>,
) -> ApiResult<Json<Value>> {
    let snapshot = if valid_state(&body.state) {
        body.state
    } else {
        json!({})
    };
    state
        .state_repo
        .upsert_document(snapshot.to_string(), Utc::now().to_rfc3339())
        .await?;
    Ok(Json(json!({ "ok": true })))
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, PUT")],
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/state",
        get(get_state).put(put_state).fallback(method_not_allowed),
    )
}
