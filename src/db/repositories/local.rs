//! In-memory repository for unit testing and local deployments.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{LessonFilter, Roster, RosterId, RosterInfo};
use crate::db::repository::{
    ErrorContext, LessonRepository, RepositoryError, RepositoryResult, RosterRepository,
};
use crate::models::Lesson;

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    rosters: BTreeMap<i64, Roster>,
}

/// In-memory [`FullRepository`](crate::db::repository::FullRepository)
/// implementation.
///
/// Rosters live in a `BTreeMap` behind a `parking_lot::RwLock`; the lock
/// is never held across an await point. Data does not survive the
/// process.
#[derive(Debug, Default)]
pub struct LocalRepository {
    inner: RwLock<Store>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(roster_id: RosterId, operation: &str) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("roster {} does not exist", roster_id),
            ErrorContext::new(operation)
                .with_entity("roster")
                .with_entity_id(roster_id),
        )
    }
}

#[async_trait]
impl RosterRepository for LocalRepository {
    async fn store_roster(&self, roster: &Roster) -> RepositoryResult<RosterId> {
        let mut store = self.inner.write();
        store.next_id += 1;
        let id = RosterId::new(store.next_id);

        let mut stored = roster.clone();
        stored.id = Some(id);
        store.rosters.insert(id.value(), stored);
        Ok(id)
    }

    async fn get_roster(&self, roster_id: RosterId) -> RepositoryResult<Roster> {
        self.inner
            .read()
            .rosters
            .get(&roster_id.value())
            .cloned()
            .ok_or_else(|| Self::not_found(roster_id, "get_roster"))
    }

    async fn list_rosters(&self) -> RepositoryResult<Vec<RosterInfo>> {
        Ok(self
            .inner
            .read()
            .rosters
            .values()
            .map(|roster| RosterInfo {
                roster_id: roster.id.unwrap_or(RosterId::new(0)),
                roster_name: roster.name.clone(),
                lesson_count: roster.lessons.len(),
            })
            .collect())
    }

    async fn find_roster_by_checksum(
        &self,
        checksum: &str,
    ) -> RepositoryResult<Option<RosterId>> {
        Ok(self
            .inner
            .read()
            .rosters
            .values()
            .find(|roster| roster.checksum == checksum)
            .and_then(|roster| roster.id))
    }

    async fn delete_roster(&self, roster_id: RosterId) -> RepositoryResult<bool> {
        Ok(self
            .inner
            .write()
            .rosters
            .remove(&roster_id.value())
            .is_some())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl LessonRepository for LocalRepository {
    async fn fetch_lessons(
        &self,
        roster_id: RosterId,
        filter: &LessonFilter,
    ) -> RepositoryResult<Vec<Lesson>> {
        let store = self.inner.read();
        let roster = store
            .rosters
            .get(&roster_id.value())
            .ok_or_else(|| Self::not_found(roster_id, "fetch_lessons"))?;

        Ok(roster
            .lessons
            .iter()
            .filter(|lesson| filter.matches(lesson))
            .cloned()
            .collect())
    }

    async fn count_lessons(&self, roster_id: RosterId) -> RepositoryResult<usize> {
        let store = self.inner.read();
        store
            .rosters
            .get(&roster_id.value())
            .map(|roster| roster.lessons.len())
            .ok_or_else(|| Self::not_found(roster_id, "count_lessons"))
    }
}
