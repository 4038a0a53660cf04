//! Roster ingestion pipeline.
//!
//! Handles an uploaded roster end to end: parse the JSON payload, run the
//! normalization pass (collecting degradation warnings), checksum the
//! payload, and store the result, emitting progress logs along the way.

use crate::api::{Roster, RosterId, RosterWarning};
use crate::db::repository::{FullRepository, RepositoryError};
use crate::db::services as db_services;
use crate::models::{normalize_roster, RawLesson};

/// Error type for roster imports.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The payload was not a JSON array of lesson records. This is the
    /// fail-fast case; individual malformed records inside a valid array
    /// degrade to warnings instead.
    #[error("invalid roster payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result of a completed import.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub roster_id: RosterId,
    /// Lessons that survived normalization.
    pub lesson_count: usize,
    /// True when an identical payload was uploaded before and the
    /// existing roster was reused.
    pub deduplicated: bool,
    pub warnings: Vec<RosterWarning>,
}

/// Import a roster payload: parse, normalize, checksum, store.
///
/// Individual malformed records never fail the import; they are dropped
/// or degraded per the normalization rules and reported in
/// [`ImportOutcome::warnings`].
pub async fn import_roster(
    repo: &dyn FullRepository,
    name: String,
    payload: &str,
) -> Result<ImportOutcome, ImportError> {
    tracing::info!(roster = %name, "starting roster import");

    let raw: Vec<RawLesson> = serde_json::from_str(payload)?;
    let (lessons, warnings) = normalize_roster(&raw);
    tracing::info!(
        received = raw.len(),
        normalized = lessons.len(),
        "normalized roster records"
    );
    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "degraded records in roster upload"
        );
    }

    let lesson_count = lessons.len();
    let roster = Roster {
        id: None,
        name,
        checksum: db_services::roster_checksum(payload),
        lessons,
    };

    let outcome = db_services::store_roster(repo, &roster).await?;
    if outcome.deduplicated {
        tracing::info!(roster_id = %outcome.roster_id, "identical payload already stored, reusing roster");
    } else {
        tracing::info!(roster_id = %outcome.roster_id, "stored roster");
    }

    Ok(ImportOutcome {
        roster_id: outcome.roster_id,
        lesson_count,
        deduplicated: outcome.deduplicated,
        warnings,
    })
}
