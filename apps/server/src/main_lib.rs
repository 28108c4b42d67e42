//! Application state wiring.

use std::sync::Arc;

use lifeplan_core::analytics::AnalyticsService;
use lifeplan_core::brands::BrandService;
use lifeplan_core::connections::ConnectionService;
use lifeplan_core::ideas::IdeaService;
use lifeplan_core::planning::PlanningService;
use lifeplan_core::schedule::ScheduleService;
use lifeplan_core::settings::SettingsService;
use lifeplan_core::tracking::TrackingService;
use lifeplan_storage_sqlite::state::CloudStateRepository;
use lifeplan_storage_sqlite::tables;
use lifeplan_storage_sqlite::db;

use crate::config::Config;

/// Everything the handlers need. The domain services run directly on the
/// table repositories (the server IS the richer backend, so there is no
/// remote side here); the repositories are also exposed for the raw
/// collections API that remote clients use.
pub struct AppState {
    pub access_code: String,
    pub state_repo: Arc<CloudStateRepository>,

    pub idea_repo: Arc<tables::ideas::IdeaRepository>,
    pub brand_repo: Arc<tables::brands::BrandRepository>,
    pub planning_repo: Arc<tables::planning::PlanningRepository>,
    pub schedule_repo: Arc<tables::schedule::ScheduleRepository>,
    pub connection_repo: Arc<tables::connections::ConnectionRepository>,
    pub tracking_repo: Arc<tables::tracking::TrackingRepository>,
    pub settings_repo: Arc<tables::settings::SettingsRepository>,

    pub idea_service: Arc<IdeaService>,
    pub brand_service: Arc<BrandService>,
    pub planning_service: Arc<PlanningService>,
    pub schedule_service: Arc<ScheduleService>,
    pub connection_service: Arc<ConnectionService>,
    pub tracking_service: Arc<TrackingService>,
    pub settings_service: Arc<SettingsService>,
    pub analytics_service: Arc<AnalyticsService>,
}

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let (pool, writer) = db::init(&config.db_path)?;

    let state_repo = Arc::new(CloudStateRepository::new(Arc::clone(&pool), writer.clone()));

    let idea_repo = Arc::new(tables::ideas::IdeaRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));
    let brand_repo = Arc::new(tables::brands::BrandRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));
    let planning_repo = Arc::new(tables::planning::PlanningRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));
    let schedule_repo = Arc::new(tables::schedule::ScheduleRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));
    let connection_repo = Arc::new(tables::connections::ConnectionRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));
    let tracking_repo = Arc::new(tables::tracking::TrackingRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));
    let settings_repo = Arc::new(tables::settings::SettingsRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));

    let idea_service = Arc::new(IdeaService::new(idea_repo.clone(), None));
    let brand_service = Arc::new(BrandService::new(brand_repo.clone(), None));
    let planning_service = Arc::new(PlanningService::new(planning_repo.clone(), None));
    let schedule_service = Arc::new(ScheduleService::new(schedule_repo.clone(), None));
    let connection_service = Arc::new(ConnectionService::new(connection_repo.clone(), None));
    let tracking_service = Arc::new(TrackingService::new(tracking_repo.clone(), None));
    let settings_service = Arc::new(SettingsService::new(
        settings_repo.clone(),
        None,
        Arc::clone(&tracking_service),
        Arc::clone(&connection_service),
    ));
    let analytics_service = Arc::new(AnalyticsService::new(
        Arc::clone(&tracking_service),
        Arc::clone(&connection_service),
        Arc::clone(&brand_service),
    ));

    Ok(Arc::new(AppState {
        access_code: config.access_code.clone(),
        state_repo,
        idea_repo,
        brand_repo,
        planning_repo,
        schedule_repo,
        connection_repo,
        tracking_repo,
        settings_repo,
        idea_service,
        brand_service,
        planning_service,
        schedule_service,
        connection_service,
        tracking_service,
        settings_service,
        analytics_service,
    }))
}
