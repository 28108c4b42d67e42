//! Collections API for connection counts.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use lifeplan_core::connections::{ConnectionLog, ConnectionRepositoryTrait};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_connections(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Option<ConnectionLog>>> {
    Ok(Json(state.connection_repo.get_connections(&date).await?))
}

async fn put_connections(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(log): Json<ConnectionLog>,
) -> ApiResult<Json<Value>> {
    state.connection_repo.upsert_connections(&date, log).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn delete_connections(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.connection_repo.delete_connections(&date).await?;
    Ok(Json(json!({ "ok": true })))
}

#[derive(Deserialize)]
struct RangeBody {
    dates: Vec<String>,
}

async fn connections_range(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RangeBody>,
) -> ApiResult<Json<BTreeMap<String, ConnectionLog>>> {
    Ok(Json(
        state.connection_repo.connections_range(&body.dates).await?,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/connections/range", post(connections_range))
        .route(
            "/connections/{date}",
            get(get_connections)
                .put(put_connections)
                .delete(delete_connections),
        )
}
