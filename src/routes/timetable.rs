use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::api::LessonId;
use crate::models::{Lesson, TimeSlot};

// =========================================================
// Timetable grid types
// =========================================================

/// One slot row of the school day as exposed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotInfo {
    pub start: NaiveTime,
    pub end: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u8>,
    pub is_break: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl From<&TimeSlot> for TimeSlotInfo {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            start: slot.start,
            end: slot.end,
            period: slot.period,
            is_break: slot.is_break(),
            label: slot.label.map(str::to_string),
        }
    }
}

/// Display projection of a lesson inside a cell or agenda row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<LessonId>,
    pub subject_name: String,
    pub class_name: String,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
}

impl From<&Lesson> for LessonSummary {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id,
            subject_name: lesson.subject_name.clone(),
            class_name: lesson.class_name.clone(),
            starts_at: lesson.starts_at,
            ends_at: lesson.ends_at,
            title: lesson.title.clone(),
            topic: lesson.topic.clone(),
            location: lesson.location.clone(),
            teacher_name: lesson.teacher_name.clone(),
        }
    }
}

/// One teaching period of one day: the lessons whose start matches the
/// slot start. Unbounded capacity; parallel classes stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodCell {
    pub period: u8,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub lessons: Vec<LessonSummary>,
}

/// One day column of a week page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    /// Short weekday name ("Sun".."Sat"), precomputed for the renderer.
    pub weekday: String,
    /// Styling-only flag; has no effect on filtering or ordering.
    pub is_today: bool,
    pub periods: Vec<PeriodCell>,
}

/// One paginated display week: seven day columns, Sunday first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekPage {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Whether this page contains today's date. Styling-only.
    pub is_current: bool,
    pub days: Vec<DayColumn>,
}

/// The full grid view model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableGridData {
    /// The fixed slot table, breaks included, for row headers.
    pub slots: Vec<TimeSlotInfo>,
    pub weeks: Vec<WeekPage>,
    /// Lessons that survived filtering.
    pub total_lessons: usize,
    /// Lessons placed into a teaching slot; the remainder start at times
    /// that align with no slot and are invisible in grid view.
    pub placed_lessons: usize,
}

/// Route function name constant for the timetable grid
pub const GET_TIMETABLE_GRID: &str = "get_timetable_grid";
