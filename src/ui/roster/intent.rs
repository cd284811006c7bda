use crate::ui::mvi::Intent;
use crate::users::ProcessedUser;

#[derive(Debug, Clone)]
pub enum RosterIntent {
    /// Replace the roster with freshly processed users, all active.
    Seed { users: Vec<ProcessedUser> },
    /// Park the first active entry with this id. No-op if none matches.
    Remove { id: String },
    /// Bring the first removed entry with this id back. No-op if none matches.
    Restore { id: String },
    QueryChanged { query: String },
    SelectNext,
    SelectPrev,
}

impl Intent for RosterIntent {}
