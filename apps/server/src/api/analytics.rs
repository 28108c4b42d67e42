//! Derived views: the dashboard analytics report and the day view.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use lifeplan_core::analytics::AnalyticsReport;
use lifeplan_core::calendar::{
    date_key, day_type_for, days_remaining_in_zone, parse_date_key, zone_for,
};
use lifeplan_core::errors::ValidationError;
use lifeplan_core::templates::{base_timetable, protocol_items};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct RangeQuery {
    start: String,
    end: String,
}

async fn analytics_report(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RangeQuery>,
) -> ApiResult<Json<AnalyticsReport>> {
    let parse = |raw: &str| {
        parse_date_key(raw).ok_or_else(|| {
            ApiError::from(lifeplan_core::Error::from(ValidationError::InvalidInput(
                format!("not a date key: {}", raw),
            )))
        })
    };
    let start = parse(&query.start)?;
    let end = parse(&query.end)?;
    Ok(Json(state.analytics_service.report(start, end).await?))
}

#[derive(Deserialize)]
struct DayQuery {
    #[serde(default)]
    date: Option<String>,
}

/// Everything the home screen needs for one day: the derived zone and day
/// type, the day's templates, and the stored logs (auto protocol marks
/// applied first).
async fn today_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DayQuery>,
) -> ApiResult<Json<Value>> {
    let date = query
        .date
        .as_deref()
        .and_then(parse_date_key)
        .unwrap_or_else(|| Utc::now().date_naive());
    let key = date_key(date);
    let zone = zone_for(date);
    let day_type = day_type_for(date);

    state
        .tracking_service
        .ensure_auto_marks(&key, zone, day_type)
        .await?;

    let timetable = state.tracking_service.timetable_day(&key).await?;
    let protocol = state.tracking_service.protocol_day(&key).await?;
    let connections = state.connection_service.count(&key).await?;
    let work = state.schedule_service.work_for(&key).await?;
    let meetings = state.schedule_service.meetings_for(&key).await?;

    Ok(Json(json!({
        "dateKey": key,
        "zone": zone,
        "dayType": day_type,
        "daysRemainingInZone": days_remaining_in_zone(date),
        "timetable": base_timetable(zone, day_type),
        "protocolItems": protocol_items(zone, day_type)
            .iter()
            .map(|item| json!({ "id": item.id, "label": item.label }))
            .collect::<Vec<_>>(),
        "timetableLogs": timetable,
        "protocolLogs": protocol,
        "connections": connections,
        "work": work,
        "meetings": meetings,
    })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics", get(analytics_report))
        .route("/today", get(today_view))
}
