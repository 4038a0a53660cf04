//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST
//! API. The view-model DTOs are re-exported from the routes module since
//! they already derive Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Agenda
    AgendaData,
    AgendaDay,
    // Timetable grid
    DayColumn,
    LessonSummary,
    PeriodCell,
    // Landing
    RosterInfo,
    RosterWarning,
    TimeSlotInfo,
    TimetableGridData,
    WeekPage,
};
use crate::services::ViewMode;

/// Request body for importing a roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRosterRequest {
    /// Display name for the roster
    pub name: String,
    /// The lesson records as exported by the school data store
    pub lessons_json: serde_json::Value,
}

/// Response for roster import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRosterResponse {
    pub roster_id: i64,
    /// Lessons that survived normalization
    pub lesson_count: usize,
    /// True when an identical payload was already stored
    pub deduplicated: bool,
    /// Degraded records, in upload order
    pub warnings: Vec<RosterWarning>,
}

/// Query parameters for the timetable endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TimetableQuery {
    /// Output shape; defaults to the grid
    #[serde(default)]
    pub view: ViewMode,
    /// Drop lessons before today (default: true)
    #[serde(default)]
    pub upcoming: Option<bool>,
    /// Range anchor date (default: the current week)
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Keep only lessons of this class
    #[serde(default)]
    pub class: Option<String>,
    /// Keep only lessons of this subject
    #[serde(default)]
    pub subject: Option<String>,
}

/// Timetable response, tagged with the view that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum TimetableResponse {
    Grid(TimetableGridData),
    List(AgendaData),
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository backend status
    pub repository: String,
}

/// Roster list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterListResponse {
    /// List of rosters
    pub rosters: Vec<RosterInfoDto>,
    /// Total count
    pub total: usize,
}

/// Roster info DTO for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterInfoDto {
    pub roster_id: i64,
    pub roster_name: String,
    pub lesson_count: usize,
}

impl From<RosterInfo> for RosterInfoDto {
    fn from(info: RosterInfo) -> Self {
        Self {
            roster_id: info.roster_id.value(),
            roster_name: info.roster_name,
            lesson_count: info.lesson_count,
        }
    }
}
