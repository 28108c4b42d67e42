//! Collections API for ideas.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use lifeplan_core::ideas::{Idea, IdeaRepositoryTrait, IdeaUpdate};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_ideas(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Idea>>> {
    Ok(Json(state.idea_repo.list_ideas().await?))
}

async fn insert_idea(
    State(state): State<Arc<AppState>>,
    Json(idea): Json<Idea>,
) -> ApiResult<Json<Value>> {
    state.idea_repo.insert_idea(idea).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn update_idea(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<IdeaUpdate>,
) -> ApiResult<Json<Value>> {
    state.idea_repo.update_idea(&id, update).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn delete_idea(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.idea_repo.delete_idea(&id).await?;
    Ok(Json(json!({ "ok": true })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ideas", get(list_ideas).post(insert_idea))
        .route("/ideas/{id}", axum::routing::patch(update_idea).delete(delete_idea))
}
