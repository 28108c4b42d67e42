//! Collections API for the settings document, plus the maintenance
//! actions (day reset, full export).

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use lifeplan_core::settings::{Settings, SettingsRepositoryTrait};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Option<Settings>>> {
    Ok(Json(state.settings_repo.get_settings().await?))
}

async fn put_settings(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<Settings>,
) -> ApiResult<Json<Value>> {
    state.settings_repo.upsert_settings(settings).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn clear_today(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    state.settings_service.clear_today().await?;
    Ok(Json(json!({ "ok": true })))
}

async fn export_all(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let export = state
        .settings_service
        .export_all(
            &state.idea_service,
            &state.brand_service,
            &state.planning_service,
            &state.schedule_service,
        )
        .await?;
    Ok(Json(export))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/settings", get(get_settings).put(put_settings))
        .route("/settings/clear-today", post(clear_today))
        .route("/settings/export", get(export_all))
}
