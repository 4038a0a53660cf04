//! # Timetable Backend
//!
//! School timetable view-model engine.
//!
//! This crate provides a Rust backend for a school management system's
//! timetable screens, offering ingestion and normalization of lesson
//! rosters and construction of weekly timetable view models. The backend
//! exposes a REST API via Axum for the web front end.
//!
//! ## Features
//!
//! - **Roster Ingestion**: Parse lesson rosters from the school data
//!   store's JSON export, resolving nested optional shapes into flat
//!   typed records and surfacing degraded records as warnings
//! - **Timetable Grids**: Bucket lessons into the fixed school-day slot
//!   table across Sunday-first week pages
//! - **Agenda Lists**: Flat chronological day-grouped views
//! - **HTTP API**: RESTful endpoints for front-end integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes, the roster aggregate, and DTO re-exports
//! - [`models`]: Lesson normalization, the slot table, week arithmetic
//! - [`db`]: Storage operations, repository pattern, and service layer
//! - [`services`]: Roster ingestion and timetable view-model construction
//! - [`routes`]: Route-specific view-model types
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The timetable builder itself is pure and synchronous: it owns no
//! state, does no I/O, and derives its entire output from the lesson
//! slice and an injected "today", so it is trivially safe to run on
//! every request.

pub mod api;

pub mod config;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
