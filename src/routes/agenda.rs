use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::routes::timetable::LessonSummary;

// =========================================================
// Agenda (flat list) types
// =========================================================

/// One day of the agenda: lessons sorted ascending by start time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaDay {
    pub date: NaiveDate,
    /// Short weekday name ("Sun".."Sat").
    pub weekday: String,
    /// Styling-only flag; has no effect on filtering or ordering.
    pub is_today: bool,
    pub lessons: Vec<LessonSummary>,
}

/// The flat chronological view model: days sorted ascending.
///
/// An empty `days` list means no lessons survived filtering; the renderer
/// is expected to show its empty-state message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaData {
    pub days: Vec<AgendaDay>,
    pub total_lessons: usize,
}

/// Route function name constant for the timetable agenda
pub const GET_TIMETABLE_AGENDA: &str = "get_timetable_agenda";
