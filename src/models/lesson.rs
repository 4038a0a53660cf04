//! Lesson records and the roster normalization pass.
//!
//! Lessons arrive from the school data store in a nested wire shape with
//! several optional paths (`class_subject.subject_offering.subject...`).
//! All of that is resolved exactly once here, producing flat [`Lesson`]
//! records; downstream code never branches on which nested shape is present.
//!
//! Normalization never fails a whole roster: a record with an unparseable
//! date is dropped and reported in the warning list, a missing or
//! unparseable time degrades to a fallback value with a warning.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::api::LessonId;

/// Fallback subject shown when neither the nested subject nor a lesson
/// title is available.
const FALLBACK_SUBJECT: &str = "Lesson";

/// Fallback start time for records without a usable `start_time`.
fn fallback_time() -> NaiveTime {
    NaiveTime::MIN
}

// ============================================================================
// Normalized model
// ============================================================================

/// A fully resolved lesson record.
///
/// Grouping identity is `(lesson_date, starts_at)`; several lessons may
/// legitimately share it (parallel classes in one slot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<LessonId>,
    pub lesson_date: NaiveDate,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub subject_name: String,
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
}

/// A record-level degradation discovered while normalizing a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterWarning {
    /// Position of the offending record in the uploaded list.
    pub index: usize,
    /// Stable warning code for programmatic handling.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl RosterWarning {
    fn new(index: usize, code: &str, message: impl Into<String>) -> Self {
        Self {
            index,
            code: code.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Wire shape
// ============================================================================

/// A lesson as exported by the school data store.
///
/// Every field is optional; the normalization pass decides what each
/// absence means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLesson {
    #[serde(default)]
    pub lesson_id: Option<i64>,
    #[serde(default)]
    pub lesson_title: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub lesson_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub class_subject: Option<RawClassSubject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawClassSubject {
    #[serde(default)]
    pub class: Option<RawClass>,
    #[serde(default)]
    pub subject_offering: Option<RawSubjectOffering>,
    #[serde(default)]
    pub teacher: Option<RawTeacher>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawClass {
    #[serde(default)]
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubjectOffering {
    #[serde(default)]
    pub subject: Option<RawSubject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubject {
    #[serde(default)]
    pub subject_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTeacher {
    #[serde(default)]
    pub name: Option<String>,
}

impl RawLesson {
    fn subject_name(&self) -> String {
        self.class_subject
            .as_ref()
            .and_then(|cs| cs.subject_offering.as_ref())
            .and_then(|so| so.subject.as_ref())
            .and_then(|s| s.subject_name.clone())
            .or_else(|| self.lesson_title.clone())
            .unwrap_or_else(|| FALLBACK_SUBJECT.to_string())
    }

    fn class_name(&self) -> String {
        self.class_subject
            .as_ref()
            .and_then(|cs| cs.class.as_ref())
            .and_then(|c| c.class_name.clone())
            .unwrap_or_default()
    }

    fn teacher_name(&self) -> Option<String> {
        self.class_subject
            .as_ref()
            .and_then(|cs| cs.teacher.as_ref())
            .and_then(|t| t.name.clone())
    }
}

// ============================================================================
// Defensive parsing
// ============================================================================

/// Parse a calendar date from the wire format.
///
/// Accepts plain `YYYY-MM-DD` as well as a full RFC 3339 timestamp (the
/// store emits both, depending on the column type).
pub fn parse_lesson_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Parse a wall-clock time from the wire format, truncated to the minute.
///
/// Accepts `HH:MM` and `HH:MM:SS`; second components are discarded since
/// the slot table works at minute granularity.
pub fn parse_wall_time(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()?;
    NaiveTime::from_hms_opt(parsed.hour(), parsed.minute(), 0)
}

// ============================================================================
// Normalization
// ============================================================================

/// Normalize an uploaded roster into flat lesson records.
///
/// Records without a parseable date are excluded entirely; they do not
/// affect the date range of any view built from the result. Every
/// degradation is reported in the returned warning list.
pub fn normalize_roster(raw: &[RawLesson]) -> (Vec<Lesson>, Vec<RosterWarning>) {
    let mut lessons = Vec::with_capacity(raw.len());
    let mut warnings = Vec::new();

    for (index, record) in raw.iter().enumerate() {
        match normalize_record(record, index, &mut warnings) {
            Some(lesson) => lessons.push(lesson),
            None => continue,
        }
    }

    (lessons, warnings)
}

fn normalize_record(
    record: &RawLesson,
    index: usize,
    warnings: &mut Vec<RosterWarning>,
) -> Option<Lesson> {
    let lesson_date = match record.lesson_date.as_deref() {
        Some(raw) => match parse_lesson_date(raw) {
            Some(date) => date,
            None => {
                warnings.push(RosterWarning::new(
                    index,
                    "MALFORMED_DATE",
                    format!("unparseable lesson_date {:?}, record dropped", raw),
                ));
                return None;
            }
        },
        None => {
            warnings.push(RosterWarning::new(
                index,
                "MISSING_DATE",
                "missing lesson_date, record dropped",
            ));
            return None;
        }
    };

    let starts_at = match record.start_time.as_deref() {
        Some(raw) => match parse_wall_time(raw) {
            Some(time) => time,
            None => {
                warnings.push(RosterWarning::new(
                    index,
                    "MALFORMED_START_TIME",
                    format!("unparseable start_time {:?}, defaulting to 00:00", raw),
                ));
                fallback_time()
            }
        },
        None => {
            warnings.push(RosterWarning::new(
                index,
                "MISSING_START_TIME",
                "missing start_time, defaulting to 00:00",
            ));
            fallback_time()
        }
    };

    let ends_at = record
        .end_time
        .as_deref()
        .and_then(parse_wall_time)
        .unwrap_or_else(|| {
            warnings.push(RosterWarning::new(
                index,
                "MISSING_END_TIME",
                "missing or unparseable end_time, defaulting to start time",
            ));
            starts_at
        });

    Some(Lesson {
        id: record.lesson_id.map(LessonId::new),
        lesson_date,
        starts_at,
        ends_at,
        subject_name: record.subject_name(),
        class_name: record.class_name(),
        title: record.lesson_title.clone(),
        topic: record.topic.clone(),
        location: record.location.clone(),
        teacher_name: record.teacher_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_lesson(date: &str, start: &str) -> RawLesson {
        RawLesson {
            lesson_date: Some(date.to_string()),
            start_time: Some(start.to_string()),
            end_time: Some("09:30:00".to_string()),
            lesson_title: Some("Algebra".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_date_plain() {
        assert_eq!(
            parse_lesson_date("2026-08-06"),
            NaiveDate::from_ymd_opt(2026, 8, 6)
        );
    }

    #[test]
    fn test_parse_date_rfc3339() {
        assert_eq!(
            parse_lesson_date("2026-08-06T00:00:00+00:00"),
            NaiveDate::from_ymd_opt(2026, 8, 6)
        );
    }

    #[test]
    fn test_parse_date_garbage() {
        assert_eq!(parse_lesson_date("not-a-date"), None);
        assert_eq!(parse_lesson_date(""), None);
    }

    #[test]
    fn test_parse_time_truncates_seconds() {
        assert_eq!(
            parse_wall_time("08:45:30"),
            NaiveTime::from_hms_opt(8, 45, 0)
        );
        assert_eq!(parse_wall_time("08:45"), NaiveTime::from_hms_opt(8, 45, 0));
    }

    #[test]
    fn test_parse_time_garbage() {
        assert_eq!(parse_wall_time("noon"), None);
        assert_eq!(parse_wall_time("25:00"), None);
    }

    #[test]
    fn test_normalize_resolves_nested_subject() {
        let mut record = raw_lesson("2026-08-06", "08:00:00");
        record.class_subject = Some(RawClassSubject {
            class: Some(RawClass {
                class_name: Some("4B".to_string()),
            }),
            subject_offering: Some(RawSubjectOffering {
                subject: Some(RawSubject {
                    subject_name: Some("Mathematics".to_string()),
                }),
            }),
            teacher: Some(RawTeacher {
                name: Some("M. Joseph".to_string()),
            }),
        });

        let (lessons, warnings) = normalize_roster(&[record]);
        assert!(warnings.is_empty());
        assert_eq!(lessons[0].subject_name, "Mathematics");
        assert_eq!(lessons[0].class_name, "4B");
        assert_eq!(lessons[0].teacher_name.as_deref(), Some("M. Joseph"));
    }

    #[test]
    fn test_normalize_subject_falls_back_to_title() {
        let record = raw_lesson("2026-08-06", "08:00:00");
        let (lessons, _) = normalize_roster(&[record]);
        assert_eq!(lessons[0].subject_name, "Algebra");
    }

    #[test]
    fn test_normalize_subject_final_fallback() {
        let record = RawLesson {
            lesson_date: Some("2026-08-06".to_string()),
            start_time: Some("08:00".to_string()),
            end_time: Some("08:45".to_string()),
            ..Default::default()
        };
        let (lessons, _) = normalize_roster(&[record]);
        assert_eq!(lessons[0].subject_name, "Lesson");
        assert_eq!(lessons[0].class_name, "");
    }

    #[test]
    fn test_normalize_drops_malformed_date() {
        let bad = raw_lesson("not-a-date", "08:00:00");
        let good = raw_lesson("2026-08-06", "08:00:00");
        let (lessons, warnings) = normalize_roster(&[bad, good]);

        assert_eq!(lessons.len(), 1);
        assert_eq!(
            lessons[0].lesson_date,
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].index, 0);
        assert_eq!(warnings[0].code, "MALFORMED_DATE");
    }

    #[test]
    fn test_normalize_missing_start_degrades_to_midnight() {
        let mut record = raw_lesson("2026-08-06", "08:00:00");
        record.start_time = None;
        let (lessons, warnings) = normalize_roster(&[record]);

        assert_eq!(lessons[0].starts_at, NaiveTime::MIN);
        assert!(warnings.iter().any(|w| w.code == "MISSING_START_TIME"));
    }

    #[test]
    fn test_normalize_empty_roster() {
        let (lessons, warnings) = normalize_roster(&[]);
        assert!(lessons.is_empty());
        assert!(warnings.is_empty());
    }
}
