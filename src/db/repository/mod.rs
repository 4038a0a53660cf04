//! Repository traits for roster storage.
//!
//! The traits are split by concern: [`RosterRepository`] covers the
//! roster aggregate lifecycle, [`LessonRepository`] covers lesson-level
//! queries. [`FullRepository`] is the umbrella bound the application
//! works against, so backends implement both halves once and everything
//! else stays backend-agnostic.

mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{LessonFilter, Roster, RosterId, RosterInfo};
use crate::models::Lesson;

/// Repository trait for roster aggregate operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Store a roster and return its assigned ID.
    ///
    /// The roster's own `id` field is ignored; storage always assigns a
    /// fresh identifier.
    async fn store_roster(&self, roster: &Roster) -> RepositoryResult<RosterId>;

    /// Fetch a stored roster by ID.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` if no such roster exists
    async fn get_roster(&self, roster_id: RosterId) -> RepositoryResult<Roster>;

    /// List all stored rosters, ordered by ID.
    async fn list_rosters(&self) -> RepositoryResult<Vec<RosterInfo>>;

    /// Find a roster whose payload checksum matches.
    ///
    /// Used for idempotent re-uploads: a matching checksum means the
    /// identical payload was stored before.
    async fn find_roster_by_checksum(&self, checksum: &str)
        -> RepositoryResult<Option<RosterId>>;

    /// Delete a roster.
    ///
    /// # Returns
    /// * `Ok(true)` if a roster was removed, `Ok(false)` if none existed
    async fn delete_roster(&self, roster_id: RosterId) -> RepositoryResult<bool>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}

/// Repository trait for lesson-level queries.
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// Fetch a roster's lessons, applying the given filter.
    ///
    /// Lessons are returned in stored order; view construction does its
    /// own sorting.
    async fn fetch_lessons(
        &self,
        roster_id: RosterId,
        filter: &LessonFilter,
    ) -> RepositoryResult<Vec<Lesson>>;

    /// Count a roster's lessons without fetching them.
    async fn count_lessons(&self, roster_id: RosterId) -> RepositoryResult<usize>;
}

/// Umbrella trait for backends implementing every repository concern.
pub trait FullRepository: RosterRepository + LessonRepository {}

impl<T: RosterRepository + LessonRepository> FullRepository for T {}
