//! High-level service layer over the repository.
//!
//! These functions implement the cross-cutting storage logic (checksum
//! deduplication, listings, lesson fetches) against any
//! [`FullRepository`] backend. Application code should call these rather
//! than the repository traits directly.

use crate::api::{LessonFilter, Roster, RosterId, RosterInfo};
use crate::db::checksum::calculate_checksum;
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::Lesson;

/// Result of storing a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOutcome {
    pub roster_id: RosterId,
    /// True when an identical payload was already stored and the existing
    /// roster was returned instead of creating a new one.
    pub deduplicated: bool,
}

/// Check that the repository backend is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Store a roster, deduplicating on payload checksum.
///
/// A roster whose checksum matches an already-stored one is not stored
/// again; the existing ID is returned with `deduplicated` set.
pub async fn store_roster(
    repo: &dyn FullRepository,
    roster: &Roster,
) -> RepositoryResult<StoreOutcome> {
    if !roster.checksum.is_empty() {
        if let Some(existing) = repo.find_roster_by_checksum(&roster.checksum).await? {
            return Ok(StoreOutcome {
                roster_id: existing,
                deduplicated: true,
            });
        }
    }

    let roster_id = repo.store_roster(roster).await?;
    Ok(StoreOutcome {
        roster_id,
        deduplicated: false,
    })
}

/// Compute the checksum for a roster payload.
///
/// Thin wrapper so callers outside `db` do not reach into the checksum
/// module directly.
pub fn roster_checksum(payload: &str) -> String {
    calculate_checksum(payload)
}

/// List all stored rosters.
pub async fn list_rosters(repo: &dyn FullRepository) -> RepositoryResult<Vec<RosterInfo>> {
    repo.list_rosters().await
}

/// Fetch a stored roster by ID.
pub async fn get_roster(repo: &dyn FullRepository, roster_id: RosterId) -> RepositoryResult<Roster> {
    repo.get_roster(roster_id).await
}

/// Delete a roster by ID.
pub async fn delete_roster(
    repo: &dyn FullRepository,
    roster_id: RosterId,
) -> RepositoryResult<bool> {
    repo.delete_roster(roster_id).await
}

/// Fetch a roster's lessons with the given filter applied.
pub async fn fetch_lessons(
    repo: &dyn FullRepository,
    roster_id: RosterId,
    filter: &LessonFilter,
) -> RepositoryResult<Vec<Lesson>> {
    repo.fetch_lessons(roster_id, filter).await
}
