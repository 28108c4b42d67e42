//! Collections API for planning entries.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use lifeplan_core::planning::{
    DailyPlan, MonthlyPlan, MonthlyPlanRecord, PlanningRepositoryTrait, WeeklyPlan,
};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_monthly(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<MonthlyPlanRecord>>> {
    Ok(Json(state.planning_repo.list_monthly().await?))
}

async fn get_monthly(
    Path(month_key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Option<MonthlyPlan>>> {
    Ok(Json(state.planning_repo.get_monthly(&month_key).await?))
}

async fn put_monthly(
    Path(month_key): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(plan): Json<MonthlyPlan>,
) -> ApiResult<Json<Value>> {
    state.planning_repo.upsert_monthly(&month_key, plan).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn get_weekly(
    Path(week_key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Option<WeeklyPlan>>> {
    Ok(Json(state.planning_repo.get_weekly(&week_key).await?))
}

async fn put_weekly(
    Path(week_key): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(plan): Json<WeeklyPlan>,
) -> ApiResult<Json<Value>> {
    state.planning_repo.upsert_weekly(&week_key, plan).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn get_daily(
    Path(date_key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Option<DailyPlan>>> {
    Ok(Json(state.planning_repo.get_daily(&date_key).await?))
}

async fn put_daily(
    Path(date_key): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(plan): Json<DailyPlan>,
) -> ApiResult<Json<Value>> {
    state.planning_repo.upsert_daily(&date_key, plan).await?;
    Ok(Json(json!({ "ok": true })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/planning/monthly", get(list_monthly))
        .route("/planning/monthly/{key}", get(get_monthly).put(put_monthly))
        .route("/planning/weekly/{key}", get(get_weekly).put(put_weekly))
        .route("/planning/daily/{key}", get(get_daily).put(put_daily))
}
