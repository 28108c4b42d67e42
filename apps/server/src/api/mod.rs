//! HTTP API surface.

mod analytics;
mod brands;
mod connections;
mod ideas;
mod planning;
mod schedule;
mod settings;
mod state;
mod tracking;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_access_code;
use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    let collections = Router::new()
        .merge(ideas::router())
        .merge(brands::router())
        .merge(planning::router())
        .merge(schedule::router())
        .merge(connections::router())
        .merge(tracking::router())
        .merge(settings::router());

    let api = Router::new()
        .merge(state::router())
        .merge(analytics::router())
        .nest("/collections", collections);

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_access_code,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
