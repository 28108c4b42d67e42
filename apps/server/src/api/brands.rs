//! Collections API for the brand lifecycle tables.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use lifeplan_core::brands::{
    ArchivedBrand, BrandRepositoryTrait, CurrentBrand, LiveBrand, PipelineBrand,
    PipelineBrandUpdate,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_current(State(state): State<Arc<AppState>>) -> ApiResult<Json<Option<CurrentBrand>>> {
    Ok(Json(state.brand_repo.get_current().await?))
}

async fn put_current(
    State(state): State<Arc<AppState>>,
    Json(brand): Json<CurrentBrand>,
) -> ApiResult<Json<Value>> {
    state.brand_repo.save_current(brand).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn delete_current(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    state.brand_repo.clear_current().await?;
    Ok(Json(json!({ "ok": true })))
}

async fn list_pipeline(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<PipelineBrand>>> {
    Ok(Json(state.brand_repo.list_pipeline().await?))
}

async fn insert_pipeline(
    State(state): State<Arc<AppState>>,
    Json(brand): Json<PipelineBrand>,
) -> ApiResult<Json<Value>> {
    state.brand_repo.insert_pipeline(brand).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn update_pipeline(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<PipelineBrandUpdate>,
) -> ApiResult<Json<Value>> {
    state.brand_repo.update_pipeline(&id, update).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn delete_pipeline(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.brand_repo.delete_pipeline(&id).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn list_live(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<LiveBrand>>> {
    Ok(Json(state.brand_repo.list_live().await?))
}

async fn insert_live(
    State(state): State<Arc<AppState>>,
    Json(brand): Json<LiveBrand>,
) -> ApiResult<Json<Value>> {
    state.brand_repo.insert_live(brand).await?;
    Ok(Json(json!({ "ok": true })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RevenueBody {
    date_key: String,
    amount: Decimal,
}

async fn put_revenue(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<RevenueBody>,
) -> ApiResult<Json<Value>> {
    state
        .brand_repo
        .set_live_revenue(&id, &body.date_key, body.amount)
        .await?;
    Ok(Json(json!({ "ok": true })))
}

async fn delete_live(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.brand_repo.delete_live(&id).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn list_archive(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<ArchivedBrand>>> {
    Ok(Json(state.brand_repo.list_archive().await?))
}

async fn insert_archive(
    State(state): State<Arc<AppState>>,
    Json(brand): Json<ArchivedBrand>,
) -> ApiResult<Json<Value>> {
    state.brand_repo.insert_archive(brand).await?;
    Ok(Json(json!({ "ok": true })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/brands/current",
            get(get_current).put(put_current).delete(delete_current),
        )
        .route("/brands/pipeline", get(list_pipeline).post(insert_pipeline))
        .route(
            "/brands/pipeline/{id}",
            axum::routing::patch(update_pipeline).delete(delete_pipeline),
        )
        .route("/brands/live", get(list_live).post(insert_live))
        .route("/brands/live/{id}", axum::routing::delete(delete_live))
        .route("/brands/live/{id}/revenue", put(put_revenue))
        .route("/brands/archive", get(list_archive).post(insert_archive))
}
