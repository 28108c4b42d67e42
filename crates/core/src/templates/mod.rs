//! Static daily templates selected by zone and day type.

mod protocol;
mod timetable;

pub use protocol::{auto_protocol_items, protocol_items, ProtocolItem, ALL_PROTOCOL_IDS};
pub use timetable::{
    base_timetable, diet_items, required_tasks, timetable_for_date, workout_items, TaskCategory,
    TimetableTask,
};
