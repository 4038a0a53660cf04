//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    HealthResponse, ImportRosterRequest, ImportRosterResponse, RosterInfoDto, RosterListResponse,
    TimetableQuery, TimetableResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{LessonFilter, RosterId};
use crate::db::services as db_services;
use crate::services::timetable::TimetableOptions;
use crate::services::{self, ViewMode};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Roster CRUD
// =============================================================================

/// GET /v1/rosters
///
/// List all stored rosters.
pub async fn list_rosters(State(state): State<AppState>) -> HandlerResult<RosterListResponse> {
    let rosters = db_services::list_rosters(state.repository.as_ref()).await?;

    let roster_dtos: Vec<RosterInfoDto> = rosters.into_iter().map(Into::into).collect();
    let total = roster_dtos.len();

    Ok(Json(RosterListResponse {
        rosters: roster_dtos,
        total,
    }))
}

/// POST /v1/rosters
///
/// Import a roster. Individual malformed records degrade to warnings in
/// the response; only a payload that is not a lesson array at all is
/// rejected.
pub async fn import_roster(
    State(state): State<AppState>,
    Json(request): Json<ImportRosterRequest>,
) -> Result<(StatusCode, Json<ImportRosterResponse>), AppError> {
    let payload = serde_json::to_string(&request.lessons_json)
        .map_err(|e| AppError::BadRequest(format!("Invalid roster JSON: {}", e)))?;

    let outcome =
        services::import_roster(state.repository.as_ref(), request.name, &payload).await?;

    let status = if outcome.deduplicated {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((
        status,
        Json(ImportRosterResponse {
            roster_id: outcome.roster_id.value(),
            lesson_count: outcome.lesson_count,
            deduplicated: outcome.deduplicated,
            warnings: outcome.warnings,
        }),
    ))
}

/// DELETE /v1/rosters/{roster_id}
///
/// Remove a stored roster.
pub async fn delete_roster(
    State(state): State<AppState>,
    Path(roster_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let removed =
        db_services::delete_roster(state.repository.as_ref(), RosterId::new(roster_id)).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "roster {} does not exist",
            roster_id
        )))
    }
}

// =============================================================================
// Timetable views
// =============================================================================

/// GET /v1/rosters/{roster_id}/timetable
///
/// Build the timetable view model for a roster. The `view` query
/// parameter selects the output shape; `class`/`subject` filter the
/// lessons before the build.
pub async fn get_timetable(
    State(state): State<AppState>,
    Path(roster_id): Path<i64>,
    Query(query): Query<TimetableQuery>,
) -> HandlerResult<TimetableResponse> {
    let roster_id = RosterId::new(roster_id);
    let filter = LessonFilter {
        class_name: query.class,
        subject_name: query.subject,
    };
    let options = TimetableOptions {
        reference_date: query.reference_date,
        upcoming_only: query.upcoming.unwrap_or(true),
    };

    let repo = state.repository.as_ref();
    let response = match query.view {
        ViewMode::Grid => TimetableResponse::Grid(
            services::get_timetable_grid(repo, roster_id, &filter, &options).await?,
        ),
        ViewMode::List => TimetableResponse::List(
            services::get_timetable_agenda(repo, roster_id, &filter, &options).await?,
        ),
    };

    Ok(Json(response))
}
