//! Schedule module - work items and meetings.

mod schedule_local;
mod schedule_model;
mod schedule_service;
mod schedule_traits;

pub use schedule_local::LocalScheduleRepository;
pub use schedule_model::{
    MeetingItem, MeetingItemUpdate, NewMeetingItem, NewWorkItem, WorkItem, WorkItemUpdate,
};
pub use schedule_service::ScheduleService;
pub use schedule_traits::ScheduleRepositoryTrait;
