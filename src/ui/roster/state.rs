use crate::ui::mvi::UiState;
use crate::users::ProcessedUser;

/// Which side of the deck an entry sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub user: ProcessedUser,
    pub status: UserStatus,
}

impl RosterEntry {
    pub fn is_removed(&self) -> bool {
        self.status == UserStatus::Removed
    }
}

/// Roster of users plus the search query and card selection.
///
/// Every user lives in `entries` exactly once, tagged with a status.
/// Remove and restore re-tag the entry and move it to the tail, so each
/// status group reads oldest-move-first. A user can never be in both
/// groups or in neither.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterState {
    pub entries: Vec<RosterEntry>,
    pub query: String,
    /// Index into [`RosterState::visible`], clamped by the reducer.
    pub selected: usize,
}

impl UiState for RosterState {}

impl RosterState {
    pub fn active(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter().filter(|e| !e.is_removed())
    }

    pub fn removed(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter().filter(|e| e.is_removed())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn removed_count(&self) -> usize {
        self.removed().count()
    }

    /// Entries the card grid shows, in display order.
    ///
    /// With no query, just the active deck. With one, active matches
    /// followed by removed matches, so removed users only surface while
    /// searching. Matching is a case-insensitive substring test on the
    /// username.
    pub fn visible(&self) -> Vec<&RosterEntry> {
        if self.query.is_empty() {
            return self.active().collect();
        }

        let needle = self.query.to_lowercase();
        let matches =
            |entry: &&RosterEntry| entry.user.username.to_lowercase().contains(&needle);

        self.active()
            .filter(matches)
            .chain(self.removed().filter(matches))
            .collect()
    }

    pub fn selected_entry(&self) -> Option<&RosterEntry> {
        self.visible().get(self.selected).copied()
    }
}
