//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the storage
//! operations and the HTTP surface. Services orchestrate repository calls
//! and implement the view-model construction.

pub mod roster_processor;

pub mod timetable;

#[cfg(test)]
#[path = "timetable_tests.rs"]
mod timetable_tests;

pub use roster_processor::{import_roster, ImportError, ImportOutcome};
pub use timetable::{
    get_timetable_agenda, get_timetable_grid, TimetableBuilder, TimetableOptions, ViewMode,
};
