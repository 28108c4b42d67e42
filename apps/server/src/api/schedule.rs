//! Collections API for work items and meetings.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use lifeplan_core::schedule::{
    MeetingItem, MeetingItemUpdate, ScheduleRepositoryTrait, WorkItem, WorkItemUpdate,
};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_work(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<WorkItem>>> {
    Ok(Json(state.schedule_repo.list_work().await?))
}

async fn insert_work(
    State(state): State<Arc<AppState>>,
    Json(item): Json<WorkItem>,
) -> ApiResult<Json<Value>> {
    state.schedule_repo.insert_work(item).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn update_work(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<WorkItemUpdate>,
) -> ApiResult<Json<Value>> {
    state.schedule_repo.update_work(&id, update).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn delete_work(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.schedule_repo.delete_work(&id).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn list_meetings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<MeetingItem>>> {
    Ok(Json(state.schedule_repo.list_meetings().await?))
}

async fn insert_meeting(
    State(state): State<Arc<AppState>>,
    Json(item): Json<MeetingItem>,
) -> ApiResult<Json<Value>> {
    state.schedule_repo.insert_meeting(item).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn update_meeting(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<MeetingItemUpdate>,
) -> ApiResult<Json<Value>> {
    state.schedule_repo.update_meeting(&id, update).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn delete_meeting(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.schedule_repo.delete_meeting(&id).await?;
    Ok(Json(json!({ "ok": true })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/schedule/work", get(list_work).post(insert_work))
        .route(
            "/schedule/work/{id}",
            axum::routing::patch(update_work).delete(delete_work),
        )
        .route("/schedule/meetings", get(list_meetings).post(insert_meeting))
        .route(
            "/schedule/meetings/{id}",
            axum::routing::patch(update_meeting).delete(delete_meeting),
        )
}
