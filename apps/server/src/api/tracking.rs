//! Collections API for the daily logs.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use lifeplan_core::tracking::{
    DayLogs, ProtocolLogEntry, RangeLogs, TimetableLogEntry, TrackingRepositoryTrait,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct RangeBody {
    dates: Vec<String>,
}

async fn timetable_day(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DayLogs<TimetableLogEntry>>> {
    Ok(Json(state.tracking_repo.timetable_day(&date).await?))
}

async fn upsert_timetable(
    Path((date, task_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Json(entry): Json<TimetableLogEntry>,
) -> ApiResult<Json<Value>> {
    state
        .tracking_repo
        .upsert_timetable(&date, &task_id, entry)
        .await?;
    Ok(Json(json!({ "ok": true })))
}

async fn timetable_range(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RangeBody>,
) -> ApiResult<Json<RangeLogs<TimetableLogEntry>>> {
    Ok(Json(state.tracking_repo.timetable_range(&body.dates).await?))
}

async fn clear_timetable_day(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.tracking_repo.clear_timetable_day(&date).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn protocol_day(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DayLogs<ProtocolLogEntry>>> {
    Ok(Json(state.tracking_repo.protocol_day(&date).await?))
}

async fn upsert_protocol(
    Path((date, item_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Json(entry): Json<ProtocolLogEntry>,
) -> ApiResult<Json<Value>> {
    state
        .tracking_repo
        .upsert_protocol(&date, &item_id, entry)
        .await?;
    Ok(Json(json!({ "ok": true })))
}

async fn protocol_range(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RangeBody>,
) -> ApiResult<Json<RangeLogs<ProtocolLogEntry>>> {
    Ok(Json(state.tracking_repo.protocol_range(&body.dates).await?))
}

async fn clear_protocol_day(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.tracking_repo.clear_protocol_day(&date).await?;
    Ok(Json(json!({ "ok": true })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tracking/timetable/range", post(timetable_range))
        .route(
            "/tracking/timetable/{date}",
            get(timetable_day).delete(clear_timetable_day),
        )
        .route(
            "/tracking/timetable/{date}/{task_id}",
            axum::routing::put(upsert_timetable),
        )
        .route("/tracking/protocol/range", post(protocol_range))
        .route(
            "/tracking/protocol/{date}",
            get(protocol_day).delete(clear_protocol_day),
        )
        .route(
            "/tracking/protocol/{date}/{item_id}",
            axum::routing::put(upsert_protocol),
        )
}
