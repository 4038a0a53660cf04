//! Acceptance tests for the timetable builder invariants.

use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeSet;

use crate::models::{normalize_roster, Lesson, RawLesson};
use crate::services::timetable::{TimetableBuilder, TimetableOptions};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn lesson(day: NaiveDate, start: NaiveTime, subject: &str) -> Lesson {
    Lesson {
        id: None,
        lesson_date: day,
        starts_at: start,
        ends_at: start + chrono::Duration::minutes(45),
        subject_name: subject.to_string(),
        class_name: "4B".to_string(),
        title: None,
        topic: None,
        location: None,
        teacher_name: None,
    }
}

fn raw(date: &str, start: &str) -> RawLesson {
    RawLesson {
        lesson_date: Some(date.to_string()),
        start_time: Some(start.to_string()),
        end_time: Some("15:15:00".to_string()),
        lesson_title: Some("Lesson".to_string()),
        ..Default::default()
    }
}

/// Every distinct lesson date in scope appears in exactly one week page.
#[test]
fn test_coverage_invariant() {
    let today = date(2026, 8, 2);
    let builder = TimetableBuilder::with_today(today);
    let lessons = vec![
        lesson(date(2026, 8, 3), time(8, 0), "A"),
        lesson(date(2026, 8, 14), time(8, 0), "B"),
        lesson(date(2026, 9, 1), time(8, 0), "C"),
        lesson(date(2026, 9, 1), time(10, 0), "D"),
    ];
    let grid = builder.build_grid(&lessons, &TimetableOptions::default());

    let lesson_dates: BTreeSet<NaiveDate> = lessons.iter().map(|l| l.lesson_date).collect();
    for lesson_date in &lesson_dates {
        let covering = grid
            .weeks
            .iter()
            .filter(|week| week.days.iter().any(|d| d.date == *lesson_date))
            .count();
        assert_eq!(covering, 1, "date {} covered by {} weeks", lesson_date, covering);
    }

    // Dates carrying lessons, restricted to the union of week dates, equal
    // the distinct dates of the filtered input.
    let dates_with_lessons: BTreeSet<NaiveDate> = grid
        .weeks
        .iter()
        .flat_map(|week| week.days.iter())
        .filter(|day| day.periods.iter().any(|p| !p.lessons.is_empty()))
        .map(|day| day.date)
        .collect();
    assert_eq!(dates_with_lessons, lesson_dates);
}

/// A slot-aligned lesson appears in that slot's bucket and no other.
#[test]
fn test_slot_match_invariant() {
    let today = date(2026, 8, 6);
    let builder = TimetableBuilder::with_today(today);
    let lessons = vec![
        lesson(today, time(8, 45), "Chemistry"),
        lesson(today, time(14, 30), "History"),
    ];
    let grid = builder.build_grid(&lessons, &TimetableOptions::default());

    let day = grid.weeks[0].days.iter().find(|d| d.date == today).unwrap();
    for cell in &day.periods {
        let expected: Vec<&str> = match cell.period {
            2 => vec!["Chemistry"],
            8 => vec!["History"],
            _ => vec![],
        };
        let actual: Vec<&str> = cell
            .lessons
            .iter()
            .map(|l| l.subject_name.as_str())
            .collect();
        assert_eq!(actual, expected, "period {}", cell.period);
    }
}

/// Lessons sharing `(date, start)` are all retained; count preserved.
#[test]
fn test_no_loss_with_multiplicity() {
    let today = date(2026, 8, 6);
    let builder = TimetableBuilder::with_today(today);
    let lessons = vec![
        lesson(today, time(11, 30), "Mathematics"),
        lesson(today, time(11, 30), "French"),
        lesson(today, time(11, 30), "Art"),
    ];
    let grid = builder.build_grid(&lessons, &TimetableOptions::default());

    let day = grid.weeks[0].days.iter().find(|d| d.date == today).unwrap();
    let cell = day.periods.iter().find(|p| p.period == 5).unwrap();
    assert_eq!(cell.lessons.len(), 3);
    assert_eq!(grid.placed_lessons, 3);
}

/// Permuting the input changes nothing structurally.
#[test]
fn test_determinism_under_permutation() {
    let today = date(2026, 8, 2);
    let builder = TimetableBuilder::with_today(today);
    let mut lessons = vec![
        lesson(date(2026, 8, 3), time(8, 0), "A"),
        lesson(date(2026, 8, 3), time(10, 0), "B"),
        lesson(date(2026, 8, 4), time(8, 0), "C"),
        lesson(date(2026, 8, 14), time(13, 0), "D"),
    ];
    let forward = builder.build_grid(&lessons, &TimetableOptions::default());
    lessons.reverse();
    let reversed = builder.build_grid(&lessons, &TimetableOptions::default());

    // No two lessons share (date, start) here, so even bucket-internal
    // order must agree.
    assert_eq!(
        serde_json::to_value(&forward).unwrap(),
        serde_json::to_value(&reversed).unwrap()
    );
}

/// Yesterday's lesson disappears from range and buckets alike.
#[test]
fn test_upcoming_filter_excludes_past_entirely() {
    let today = date(2026, 8, 6);
    let builder = TimetableBuilder::with_today(today);
    let lessons = vec![
        lesson(date(2026, 7, 1), time(8, 0), "Old"),
        lesson(today, time(8, 0), "Current"),
    ];
    let grid = builder.build_grid(&lessons, &TimetableOptions::default());

    // July is not in the range at all.
    assert!(grid.weeks.iter().all(|w| w.start >= date(2026, 8, 2)));
    let subjects: Vec<String> = grid
        .weeks
        .iter()
        .flat_map(|w| w.days.iter())
        .flat_map(|d| d.periods.iter())
        .flat_map(|p| p.lessons.iter())
        .map(|l| l.subject_name.clone())
        .collect();
    assert_eq!(subjects, vec!["Current"]);
}

/// A malformed date never reaches the builder; the valid record does.
#[test]
fn test_malformed_date_is_absent_from_output() {
    let (lessons, warnings) = normalize_roster(&[
        raw("not-a-date", "08:00:00"),
        raw("2026-08-06", "08:00:00"),
    ]);
    assert_eq!(warnings.len(), 1);

    let builder = TimetableBuilder::with_today(date(2026, 8, 6));
    let grid = builder.build_grid(&lessons, &TimetableOptions::default());
    assert_eq!(grid.total_lessons, 1);
    assert_eq!(grid.weeks.len(), 1);
}

/// List mode sorts within a day by start time.
#[test]
fn test_list_mode_ordering() {
    let today = date(2026, 8, 6);
    let builder = TimetableBuilder::with_today(today);
    let lessons = vec![
        lesson(today, time(10, 0), "Second"),
        lesson(today, time(8, 45), "First"),
        lesson(today, time(13, 0), "Third"),
    ];
    let agenda = builder.build_agenda(&lessons, &TimetableOptions::default());

    let order: Vec<&str> = agenda.days[0]
        .lessons
        .iter()
        .map(|l| l.subject_name.as_str())
        .collect();
    assert_eq!(order, vec!["First", "Second", "Third"]);
}

/// Grid and agenda agree on which lessons are in scope.
#[test]
fn test_grid_and_agenda_share_scope() {
    let today = date(2026, 8, 6);
    let builder = TimetableBuilder::with_today(today);
    let lessons = vec![
        lesson(date(2026, 8, 5), time(8, 0), "Past"),
        lesson(today, time(9, 30), "BreakAligned"),
        lesson(today, time(8, 0), "Placed"),
    ];
    let options = TimetableOptions::default();

    let grid = builder.build_grid(&lessons, &options);
    let agenda = builder.build_agenda(&lessons, &options);

    // Both drop the past lesson; the break-aligned lesson counts in both
    // but is only visible in the agenda.
    assert_eq!(grid.total_lessons, 2);
    assert_eq!(agenda.total_lessons, 2);
    assert_eq!(grid.placed_lessons, 1);
    assert!(agenda.days[0]
        .lessons
        .iter()
        .any(|l| l.subject_name == "BreakAligned"));
}
