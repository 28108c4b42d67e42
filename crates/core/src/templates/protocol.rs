//! Static behavioral-protocol checklists.

use crate::calendar::{DayType, Zone};

/// One pass/fail checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolItem {
    pub id: &'static str,
    pub label: &'static str,
}

const fn item(id: &'static str, label: &'static str) -> ProtocolItem {
    ProtocolItem { id, label }
}

/// Every protocol id that can appear in a log, across all templates.
pub const ALL_PROTOCOL_IDS: [&str; 6] = [
    "no_fap",
    "no_sugar",
    "no_phone",
    "headspace",
    "completed_tasks",
    "worked_out",
];

const WORKING_PROTOCOL: &[ProtocolItem] = &[
    item("no_fap", "\u{1F6AB} No Fap"),
    item("no_sugar", "\u{1F36C} No Sugar"),
    item("no_phone", "\u{1F4F5} No Phone at Home"),
    item("headspace", "\u{1F9D8} Headspace (Meditation)"),
    item("completed_tasks", "\u{2705} Completed All Tasks"),
    item("worked_out", "\u{1F4AA} Worked Out"),
];

const NOMAD_PROTOCOL: &[ProtocolItem] = &[
    item("no_fap", "\u{1F6AB} No Fap"),
    item("no_sugar", "\u{1F36C} No Sugar"),
    item("headspace", "\u{1F9D8} Headspace (Meditation)"),
    item("completed_tasks", "\u{2705} Completed All Tasks"),
    item("worked_out", "\u{1F4AA} Worked Out"),
];

const SUNDAY_PROTOCOL: &[ProtocolItem] = &[
    item("no_fap", "\u{1F6AB} No Fap"),
    item("no_sugar", "\u{1F36C} No Sugar"),
];

/// The checklist in effect for a zone/day-type pair.
pub fn protocol_items(zone: Zone, day_type: DayType) -> &'static [ProtocolItem] {
    if day_type == DayType::Sunday {
        return SUNDAY_PROTOCOL;
    }
    match zone {
        Zone::Working => WORKING_PROTOCOL,
        Zone::Nomad => NOMAD_PROTOCOL,
    }
}

/// Items recorded automatically without user input: Sundays mark the items
/// dropped from the Sunday checklist as not-applicable, the nomad zone
/// waives the phone rule.
pub fn auto_protocol_items(zone: Zone, day_type: DayType) -> &'static [&'static str] {
    if day_type == DayType::Sunday {
        return &["no_phone", "headspace", "completed_tasks", "worked_out"];
    }
    match zone {
        Zone::Nomad => &["no_phone"],
        Zone::Working => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_shrinks_by_context() {
        assert_eq!(protocol_items(Zone::Working, DayType::Normal).len(), 6);
        assert_eq!(protocol_items(Zone::Nomad, DayType::Normal).len(), 5);
        assert_eq!(protocol_items(Zone::Working, DayType::Sunday).len(), 2);
        // Wednesday keeps the zone checklist.
        assert_eq!(protocol_items(Zone::Nomad, DayType::Wednesday).len(), 5);
    }

    #[test]
    fn auto_items_cover_what_the_checklist_drops() {
        assert_eq!(
            auto_protocol_items(Zone::Working, DayType::Sunday),
            &["no_phone", "headspace", "completed_tasks", "worked_out"]
        );
        assert_eq!(auto_protocol_items(Zone::Nomad, DayType::Normal), &["no_phone"]);
        assert!(auto_protocol_items(Zone::Working, DayType::Normal).is_empty());
    }
}
