//! Public API surface for the timetable backend.
//!
//! This file consolidates the identifier newtypes, the roster aggregate,
//! and re-exports of the view-model DTO types. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::routes::agenda::AgendaData;
pub use crate::routes::agenda::AgendaDay;
pub use crate::routes::landing::RosterInfo;
pub use crate::routes::timetable::DayColumn;
pub use crate::routes::timetable::LessonSummary;
pub use crate::routes::timetable::PeriodCell;
pub use crate::routes::timetable::TimeSlotInfo;
pub use crate::routes::timetable::TimetableGridData;
pub use crate::routes::timetable::WeekPage;

use serde::{Deserialize, Serialize};

/// Roster identifier (storage primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RosterId(pub i64);

/// Lesson identifier, as assigned by the school data store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonId(pub i64);

impl RosterId {
    pub fn new(value: i64) -> Self {
        RosterId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl LessonId {
    pub fn new(value: i64) -> Self {
        LessonId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RosterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for LessonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RosterId> for i64 {
    fn from(id: RosterId) -> Self {
        id.0
    }
}

pub use crate::models::{Lesson, RosterWarning};

/// A stored lesson roster: one uploaded batch of normalized lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Assigned on store; `None` for a roster that has not been persisted.
    pub id: Option<RosterId>,
    pub name: String,
    /// SHA-256 of the uploaded JSON payload, used for idempotent re-uploads.
    pub checksum: String,
    pub lessons: Vec<Lesson>,
}

/// Optional filters applied when fetching lessons from a roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonFilter {
    /// Keep only lessons whose class name matches exactly.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Keep only lessons whose subject name matches exactly.
    #[serde(default)]
    pub subject_name: Option<String>,
}

impl LessonFilter {
    pub fn matches(&self, lesson: &Lesson) -> bool {
        if let Some(ref class_name) = self.class_name {
            if &lesson.class_name != class_name {
                return false;
            }
        }
        if let Some(ref subject_name) = self.subject_name {
            if &lesson.subject_name != subject_name {
                return false;
            }
        }
        true
    }
}
