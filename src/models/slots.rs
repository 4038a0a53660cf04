//! The fixed school-day slot table.
//!
//! The institution's teaching day is a hard-coded invariant: eight 45-minute
//! periods between 08:00 and 15:15, with a mid-morning break and a lunch
//! break. Break slots render as merged rows and never hold lessons.

use std::sync::OnceLock;

use chrono::NaiveTime;

/// One row of the school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Ordinal of the teaching period; `None` for break slots.
    pub period: Option<u8>,
    /// Display label for break slots.
    pub label: Option<&'static str>,
}

impl TimeSlot {
    pub fn is_break(&self) -> bool {
        self.period.is_none()
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid wall-clock time")
}

fn teaching(period: u8, start: (u32, u32), end: (u32, u32)) -> TimeSlot {
    TimeSlot {
        start: hm(start.0, start.1),
        end: hm(end.0, end.1),
        period: Some(period),
        label: None,
    }
}

fn pause(label: &'static str, start: (u32, u32), end: (u32, u32)) -> TimeSlot {
    TimeSlot {
        start: hm(start.0, start.1),
        end: hm(end.0, end.1),
        period: None,
        label: Some(label),
    }
}

/// The full school day, breaks included, in chronological order.
pub fn school_day() -> &'static [TimeSlot] {
    static SLOTS: OnceLock<Vec<TimeSlot>> = OnceLock::new();
    SLOTS.get_or_init(|| {
        vec![
            teaching(1, (8, 0), (8, 45)),
            teaching(2, (8, 45), (9, 30)),
            pause("Break", (9, 30), (10, 0)),
            teaching(3, (10, 0), (10, 45)),
            teaching(4, (10, 45), (11, 30)),
            teaching(5, (11, 30), (12, 15)),
            pause("Lunch", (12, 15), (13, 0)),
            teaching(6, (13, 0), (13, 45)),
            teaching(7, (13, 45), (14, 30)),
            teaching(8, (14, 30), (15, 15)),
        ]
    })
}

/// Teaching slots only, in chronological order.
pub fn teaching_slots() -> impl Iterator<Item = &'static TimeSlot> {
    school_day().iter().filter(|slot| !slot.is_break())
}

/// The teaching slot whose start matches the given time exactly.
///
/// Break starts intentionally resolve to `None`: a lesson aligned with a
/// break is not placeable in the grid.
pub fn teaching_slot_at(start: NaiveTime) -> Option<&'static TimeSlot> {
    teaching_slots().find(|slot| slot.start == start)
}
