//! Planning module - monthly, weekly, and daily planning entries.

mod planning_local;
mod planning_model;
mod planning_service;
mod planning_traits;

pub use planning_local::LocalPlanningRepository;
pub use planning_model::{DailyPlan, MonthlyPlan, MonthlyPlanRecord, WeeklyPlan};
pub use planning_service::PlanningService;
pub use planning_traits::PlanningRepositoryTrait;
