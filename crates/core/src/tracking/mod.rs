//! Tracking module - per-day timetable completion and protocol logs.

mod tracking_local;
mod tracking_model;
mod tracking_service;
mod tracking_traits;

pub use tracking_local::LocalTrackingRepository;
pub use tracking_model::{
    DayLogs, ProtocolLogEntry, ProtocolStatus, RangeLogs, TaskStatus, TimetableLogEntry,
};
pub use tracking_service::TrackingService;
pub use tracking_traits::TrackingRepositoryTrait;
