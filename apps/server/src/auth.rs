//! Shared-secret access gate.
//!
//! Every API route requires the `x-access-code` header to equal the
//! configured code (whitespace-trimmed, exact). There is no per-user
//! identity, token expiry, or rate limiting behind this gate.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::main_lib::AppState;

pub const ACCESS_CODE_HEADER: &str = "x-access-code";

pub async fn require_access_code(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(ACCESS_CODE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim);

    match provided {
        Some(code) if code == state.access_code.trim() => next.run(request).await,
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )
            .into_response(),
    }
}
