//! Timetable view-model construction.
//!
//! [`TimetableBuilder`] is the pure core of this crate: it converts an
//! arbitrarily ordered slice of normalized lessons into either a
//! week-paginated grid or a flat chronological agenda. It performs no I/O,
//! never mutates its input, and derives the whole model fresh on every
//! call, so it is safe to invoke on every render.
//!
//! Both views consume one shared bucketing pass (date to time-sorted
//! lessons, in a `BTreeMap` so iteration order is deterministic), which
//! keeps their edge-case handling identical.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::{
    AgendaData, AgendaDay, DayColumn, LessonFilter, LessonSummary, PeriodCell, RosterId,
    TimeSlotInfo, TimetableGridData, WeekPage,
};
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::{school_day, teaching_slot_at, Lesson, Week};

/// Output shape of a timetable request.
///
/// Making this an enum removes the out-of-range view mode error class
/// entirely; an unknown value is rejected during query deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Grid,
    List,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Grid
    }
}

/// Options controlling a single build.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableOptions {
    /// Explicit range anchor; the generated week range is extended to
    /// include this date's week. Defaults to the current week.
    pub reference_date: Option<NaiveDate>,
    /// Drop lessons dated strictly before today.
    pub upcoming_only: bool,
}

impl Default for TimetableOptions {
    fn default() -> Self {
        Self {
            reference_date: None,
            upcoming_only: true,
        }
    }
}

/// Pure builder turning lesson lists into timetable view models.
///
/// "Today" is captured once at construction. [`TimetableBuilder::new`]
/// reads the local system date; tests (and anything else that needs a
/// pinned clock) use [`TimetableBuilder::with_today`].
#[derive(Debug, Clone)]
pub struct TimetableBuilder {
    today: NaiveDate,
}

impl TimetableBuilder {
    /// Builder anchored to the local system date.
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Builder anchored to an explicit date.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Build the week-paginated grid view.
    ///
    /// The week sequence spans from the week containing the earliest
    /// in-scope lesson through the week containing the latest, extended
    /// to cover `reference_date`'s week when one is given. With no
    /// lessons in scope the result is a single week: the reference week,
    /// or the current week when no reference is given. Every in-scope
    /// lesson date therefore falls in exactly one page.
    pub fn build_grid(&self, lessons: &[Lesson], options: &TimetableOptions) -> TimetableGridData {
        let by_date = self.bucket_by_date(lessons, options);

        let anchor = options.reference_date.unwrap_or(self.today);
        let weeks = match (by_date.keys().next(), by_date.keys().next_back()) {
            (Some(&first), Some(&last)) => Week::span(first.min(anchor), last.max(anchor)),
            _ => vec![Week::containing(anchor)],
        };

        let total_lessons: usize = by_date.values().map(Vec::len).sum();
        let placed_lessons = by_date
            .values()
            .flatten()
            .filter(|lesson| teaching_slot_at(lesson.starts_at).is_some())
            .count();

        let week_pages = weeks
            .iter()
            .map(|week| self.build_week_page(week, &by_date))
            .collect();

        TimetableGridData {
            slots: school_day().iter().map(TimeSlotInfo::from).collect(),
            weeks: week_pages,
            total_lessons,
            placed_lessons,
        }
    }

    /// Build the flat chronological agenda view.
    ///
    /// Days are ascending; lessons within a day are ascending by start
    /// time, input order preserved for ties. Days without lessons are
    /// omitted here (unlike the grid, which renders empty columns).
    pub fn build_agenda(&self, lessons: &[Lesson], options: &TimetableOptions) -> AgendaData {
        let by_date = self.bucket_by_date(lessons, options);

        let total_lessons = by_date.values().map(Vec::len).sum();
        let days = by_date
            .into_iter()
            .map(|(date, day_lessons)| AgendaDay {
                date,
                weekday: date.format("%a").to_string(),
                is_today: date == self.today,
                lessons: day_lessons.into_iter().map(LessonSummary::from).collect(),
            })
            .collect();

        AgendaData {
            days,
            total_lessons,
        }
    }

    /// The shared normalization pass both views consume: scope filtering,
    /// date bucketing, and a stable per-day sort by start time.
    fn bucket_by_date<'a>(
        &self,
        lessons: &'a [Lesson],
        options: &TimetableOptions,
    ) -> BTreeMap<NaiveDate, Vec<&'a Lesson>> {
        let mut by_date: BTreeMap<NaiveDate, Vec<&'a Lesson>> = BTreeMap::new();
        for lesson in lessons {
            if options.upcoming_only && lesson.lesson_date < self.today {
                continue;
            }
            by_date.entry(lesson.lesson_date).or_default().push(lesson);
        }
        for day_lessons in by_date.values_mut() {
            day_lessons.sort_by_key(|lesson| lesson.starts_at);
        }
        by_date
    }

    fn build_week_page(
        &self,
        week: &Week,
        by_date: &BTreeMap<NaiveDate, Vec<&Lesson>>,
    ) -> WeekPage {
        let days = week
            .dates()
            .iter()
            .map(|&date| {
                let day_lessons: &[&Lesson] =
                    by_date.get(&date).map(Vec::as_slice).unwrap_or_default();
                DayColumn {
                    date,
                    weekday: date.format("%a").to_string(),
                    is_today: date == self.today,
                    periods: build_period_cells(day_lessons),
                }
            })
            .collect();

        WeekPage {
            start: week.start(),
            end: week.end(),
            is_current: week.contains(self.today),
            days,
        }
    }
}

impl Default for TimetableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Bucket one day's lessons into the teaching slots.
///
/// A lesson lands in the cell whose slot start equals its start time
/// exactly; break slots take no lessons, so a lesson aligned with a break
/// (or with no slot at all) appears in no cell.
fn build_period_cells(day_lessons: &[&Lesson]) -> Vec<PeriodCell> {
    school_day()
        .iter()
        .filter_map(|slot| {
            let period = slot.period?;
            let lessons = day_lessons
                .iter()
                .filter(|lesson| lesson.starts_at == slot.start)
                .map(|lesson| LessonSummary::from(*lesson))
                .collect();
            Some(PeriodCell {
                period,
                start: slot.start,
                end: slot.end,
                lessons,
            })
        })
        .collect()
}

// ============================================================================
// Service entry points
// ============================================================================

/// Fetch a roster's lessons and build the grid view.
pub async fn get_timetable_grid(
    repo: &dyn FullRepository,
    roster_id: RosterId,
    filter: &LessonFilter,
    options: &TimetableOptions,
) -> RepositoryResult<TimetableGridData> {
    let lessons = crate::db::services::fetch_lessons(repo, roster_id, filter).await?;
    Ok(TimetableBuilder::new().build_grid(&lessons, options))
}

/// Fetch a roster's lessons and build the agenda view.
pub async fn get_timetable_agenda(
    repo: &dyn FullRepository,
    roster_id: RosterId,
    filter: &LessonFilter,
    options: &TimetableOptions,
) -> RepositoryResult<AgendaData> {
    let lessons = crate::db::services::fetch_lessons(repo, roster_id, filter).await?;
    Ok(TimetableBuilder::new().build_agenda(&lessons, options))
}
