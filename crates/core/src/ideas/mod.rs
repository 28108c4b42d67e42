//! Ideas module - business-idea capture.

mod ideas_local;
mod ideas_model;
mod ideas_service;
mod ideas_traits;

pub use ideas_local::LocalIdeaRepository;
pub use ideas_model::{Idea, IdeaUpdate, NewIdea};
pub use ideas_service::IdeaService;
pub use ideas_traits::IdeaRepositoryTrait;
