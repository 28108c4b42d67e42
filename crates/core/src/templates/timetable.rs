//! Static timetable templates.
//!
//! The timetable for a given day is fixed data keyed by zone and day type;
//! only the per-task completion logs are persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{day_type_for, zone_for, DayType, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Sleep,
    Fitness,
    Travel,
    Food,
    Work,
}

/// One time-boxed entry of a daily template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableTask {
    pub id: &'static str,
    pub time: &'static str,
    pub title: &'static str,
    pub category: TaskCategory,
    pub optional: bool,
}

const fn task(
    id: &'static str,
    time: &'static str,
    title: &'static str,
    category: TaskCategory,
) -> TimetableTask {
    TimetableTask {
        id,
        time,
        title,
        category,
        optional: false,
    }
}

const fn optional_task(
    id: &'static str,
    time: &'static str,
    title: &'static str,
    category: TaskCategory,
) -> TimetableTask {
    TimetableTask {
        id,
        time,
        title,
        category,
        optional: true,
    }
}

use TaskCategory::{Fitness, Food, Sleep, Travel, Work};

const WORKING_TIMETABLE: &[TimetableTask] = &[
    task("w1", "05:30", "Wake up, drink 1L warm water, freshen up", Sleep),
    task("w2", "06:00-07:00", "Yoga (morning)", Fitness),
    task("w3", "07:30-09:00", "Gym", Fitness),
    task("w4", "09:00-10:30", "Bath, skincare, travel to office", Travel),
    task(
        "w5",
        "10:30",
        "Breakfast: High-protein meal + 2 fruits + 1 banana + multivitamin + shilajit + Vitamin C + B12 + Vitamin D 2000IU",
        Food,
    ),
    task("w6", "10:45", "15-min roof walk", Fitness),
    task("w7", "11:00", "Filter coffee + Headspace meditation (10-15 min)", Food),
    task(
        "w8",
        "11:30-14:30",
        "Deep work sprint (3 hours, no interruptions, build & solve)",
        Work,
    ),
    task("w9", "14:30-15:30", "Lunch (tiffin) + post-lunch roof walk (me time)", Food),
    task("w10", "15:30-16:00", "Read book with coffee", Work),
    task("w11", "16:00-16:10", "Short meditation", Work),
    task("w12", "16:10-16:30", "Team meeting", Work),
    task("w13", "16:30-17:30", "Work with team", Work),
    task("w14", "17:30-18:00", "Pack up, close all devices", Work),
    task("w15", "18:00-19:15", "Yoga (evening batch, 18:15 start)", Fitness),
    task("w16", "20:00", "Home, cook dinner (easy, same daily)", Food),
    task("w17", "21:00", "Post-dinner walk", Fitness),
    task("w18", "22:00", "Chamomile tea", Food),
    task("w19", "22:30-23:00", "Shutdown & sleep (audio story on speaker)", Sleep),
];

const NOMAD_TIMETABLE: &[TimetableTask] = &[
    task("n1", "06:00", "Wake up, water", Sleep),
    task("n2", "06:30-07:30", "Yoga", Fitness),
    task("n3", "07:30-08:30", "HIIT / bodyweight", Fitness),
    task("n4", "09:00", "High-protein healthy breakfast", Food),
    task("n5", "09:30-11:00", "Exploration walk", Fitness),
    task("n6", "11:00-12:30", "Deep work sprint", Work),
    task("n7", "12:30-20:00", "Travel, exploration, healthy meals", Travel),
    task("n8", "20:00-21:00", "Light healthy dinner", Food),
    task("n9", "21:00-22:00", "Post-dinner walk", Fitness),
    task("n10", "22:30-23:00", "Shutdown & sleep", Sleep),
];

const SUNDAY_TIMETABLE: &[TimetableTask] = &[
    task("s1", "Anytime", "Wake up when rested", Sleep),
    optional_task(
        "s2",
        "Morning",
        "Morning movement: light yoga or walk (optional)",
        Fitness,
    ),
    task(
        "s3",
        "Day Block",
        "Go out and explore OR stay home and fully recharge",
        Travel,
    ),
    task("s4", "Evening", "Light dinner, early sleep", Food),
];

// Wednesday swaps the midday blocks for AI-tooling research; the bookends
// follow the active zone.
const WEDNESDAY_WORKING_TIMETABLE: &[TimetableTask] = &[
    task("wed-w1", "05:30", "Wake up, drink 1L warm water, freshen up", Sleep),
    task("wed-w2", "06:00-07:00", "Yoga (morning)", Fitness),
    task("wed-w3", "07:30-09:00", "Gym", Fitness),
    task(
        "wed-w4",
        "10:30",
        "Breakfast: High-protein meal + 2 fruits + 1 banana + multivitamin + shilajit + Vitamin C + B12 + Vitamin D 2000IU",
        Food,
    ),
    task(
        "wed-working-1",
        "11:00-13:00",
        "Research all new AI tools launched in the last 7 days (ProductHunt, X/Twitter, newsletters, YouTube)",
        Work,
    ),
    task("wed-working-2", "13:00-15:00", "Test the most promising tools found", Work),
    task("wed-working-3", "15:00-16:00", "Lunch + walk (me time)", Food),
    task(
        "wed-working-4",
        "16:00-17:30",
        "Watch an informative / educational podcast",
        Work,
    ),
    task("wed-w5", "18:00-19:15", "Yoga (evening batch)", Fitness),
    task("wed-w6", "20:00", "Home, cook dinner", Food),
    task("wed-w7", "21:00", "Post-dinner walk", Fitness),
    task("wed-w8", "22:30-23:00", "Shutdown & sleep", Sleep),
];

const WEDNESDAY_NOMAD_TIMETABLE: &[TimetableTask] = &[
    task("wed-n1", "06:00", "Wake up, water", Sleep),
    task("wed-n2", "06:30-07:30", "Yoga", Fitness),
    task("wed-n3", "07:30-08:30", "HIIT / bodyweight", Fitness),
    task("wed-n4", "09:00", "High-protein healthy breakfast", Food),
    task(
        "wed-nomad-1",
        "11:00-13:00",
        "Research all new AI tools launched in the last 7 days (ProductHunt, X/Twitter, newsletters, YouTube)",
        Work,
    ),
    task("wed-nomad-2", "13:00-15:00", "Test the most promising tools found", Work),
    task("wed-nomad-3", "15:00-16:00", "Lunch + walk (me time)", Food),
    task(
        "wed-nomad-4",
        "16:00-17:30",
        "Watch an informative / educational podcast",
        Work,
    ),
    task("wed-n5", "20:00-21:00", "Light healthy dinner", Food),
    task("wed-n6", "21:00-22:00", "Post-dinner walk", Fitness),
    task("wed-n7", "22:30-23:00", "Shutdown & sleep", Sleep),
];

/// The template for a zone/day-type pair. Sunday wins over the zone split;
/// Wednesday selects a zone-specific variant.
pub fn base_timetable(zone: Zone, day_type: DayType) -> &'static [TimetableTask] {
    match day_type {
        DayType::Sunday => SUNDAY_TIMETABLE,
        DayType::Wednesday => match zone {
            Zone::Working => WEDNESDAY_WORKING_TIMETABLE,
            Zone::Nomad => WEDNESDAY_NOMAD_TIMETABLE,
        },
        DayType::Normal => match zone {
            Zone::Working => WORKING_TIMETABLE,
            Zone::Nomad => NOMAD_TIMETABLE,
        },
    }
}

pub fn timetable_for_date(date: NaiveDate) -> &'static [TimetableTask] {
    base_timetable(zone_for(date), day_type_for(date))
}

/// The tasks that count toward a day's completion percentage.
pub fn required_tasks(tasks: &'static [TimetableTask]) -> Vec<&'static TimetableTask> {
    tasks.iter().filter(|task| !task.optional).collect()
}

fn parse_start_hour(time_label: &str) -> Option<u32> {
    let start = time_label.split('-').next()?.trim();
    start.split(':').next()?.parse().ok()
}

/// Fitness entries of a template. On Wednesdays only the morning sessions
/// (start hour before 11:00) count as the workout.
pub fn workout_items(
    tasks: &'static [TimetableTask],
    day_type: DayType,
) -> Vec<&'static TimetableTask> {
    let fitness = tasks
        .iter()
        .filter(|task| task.category == TaskCategory::Fitness);
    if day_type != DayType::Wednesday {
        return fitness.collect();
    }
    fitness
        .filter(|task| matches!(parse_start_hour(task.time), Some(hour) if hour < 11))
        .collect()
}

/// Food entries of a template.
pub fn diet_items(tasks: &'static [TimetableTask]) -> Vec<&'static TimetableTask> {
    tasks
        .iter()
        .filter(|task| task.category == TaskCategory::Food)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_selection_by_zone_and_day_type() {
        assert_eq!(base_timetable(Zone::Working, DayType::Normal).len(), 19);
        assert_eq!(base_timetable(Zone::Nomad, DayType::Normal).len(), 10);
        assert_eq!(base_timetable(Zone::Working, DayType::Sunday).len(), 4);
        // Sunday beats the zone split.
        assert_eq!(
            base_timetable(Zone::Nomad, DayType::Sunday),
            base_timetable(Zone::Working, DayType::Sunday)
        );
        assert!(base_timetable(Zone::Working, DayType::Wednesday)
            .iter()
            .any(|t| t.id == "wed-working-1"));
        assert!(base_timetable(Zone::Nomad, DayType::Wednesday)
            .iter()
            .any(|t| t.id == "wed-nomad-1"));
    }

    #[test]
    fn required_tasks_drop_optional_entries() {
        let sunday = base_timetable(Zone::Working, DayType::Sunday);
        let required = required_tasks(sunday);
        assert_eq!(required.len(), 3);
        assert!(required.iter().all(|t| !t.optional));
    }

    #[test]
    fn wednesday_workout_keeps_only_morning_sessions() {
        let tasks = base_timetable(Zone::Working, DayType::Wednesday);
        let workout = workout_items(tasks, DayType::Wednesday);
        assert!(workout.iter().all(|t| t.id != "wed-w5"));
        assert!(workout.iter().any(|t| t.id == "wed-w2"));

        // Outside Wednesday all fitness entries count.
        let normal = base_timetable(Zone::Working, DayType::Normal);
        assert_eq!(workout_items(normal, DayType::Normal).len(), 5);
    }

    #[test]
    fn diet_items_are_the_food_category() {
        let tasks = base_timetable(Zone::Nomad, DayType::Normal);
        let diet = diet_items(tasks);
        assert_eq!(diet.len(), 2);
        assert!(diet.iter().all(|t| t.category == TaskCategory::Food));
    }
}
