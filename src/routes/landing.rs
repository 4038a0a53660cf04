use crate::api::RosterId;
use serde::{Deserialize, Serialize};

/// Roster information with lesson counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterInfo {
    pub roster_id: RosterId,
    pub roster_name: String,
    pub lesson_count: usize,
}

pub const LIST_ROSTERS: &str = "list_rosters";
pub const POST_ROSTER: &str = "store_roster";
