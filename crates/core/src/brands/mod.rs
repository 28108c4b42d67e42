//! Brands module - the idea-to-archive brand pipeline.
//!
//! Lifecycle: pipeline entry -> current brand (singleton, phases 1-3) ->
//! live brand (revenue-tracked) -> archived brand (terminal). Transitions
//! are one-directional.

mod brands_local;
mod brands_model;
mod brands_service;
#[cfg(test)]
mod brands_service_tests;
mod brands_traits;

pub use brands_local::LocalBrandRepository;
pub use brands_model::{
    ArchivedBrand, ChecklistItem, CurrentBrand, CurrentBrandUpdate, DailyLogEntry, LiveBrand,
    NewCurrentBrand, NewLiveBrand, NewPipelineBrand, PhaseData, PhaseOne, PhaseThree, PhaseTwo,
    PipelineBrand, PipelineBrandUpdate, ReorderDirection,
};
pub use brands_service::BrandService;
pub use brands_traits::BrandRepositoryTrait;
