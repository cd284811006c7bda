use crate::ui::mvi::Reducer;
use crate::ui::roster::intent::RosterIntent;
use crate::ui::roster::state::{RosterEntry, RosterState, UserStatus};

pub struct RosterReducer;

impl Reducer for RosterReducer {
    type State = RosterState;
    type Intent = RosterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RosterIntent::Seed { users } => RosterState {
                entries: users
                    .into_iter()
                    .map(|user| RosterEntry {
                        user,
                        status: UserStatus::Active,
                    })
                    .collect(),
                ..RosterState::default()
            },
            RosterIntent::Remove { id } => {
                let RosterState {
                    entries,
                    query,
                    selected,
                } = state;
                let entries = move_entry(entries, &id, UserStatus::Active, UserStatus::Removed);
                clamp_selection(RosterState {
                    entries,
                    query,
                    selected,
                })
            }
            RosterIntent::Restore { id } => {
                let RosterState {
                    entries,
                    query,
                    selected,
                } = state;
                let entries = move_entry(entries, &id, UserStatus::Removed, UserStatus::Active);
                clamp_selection(RosterState {
                    entries,
                    query,
                    selected,
                })
            }
            RosterIntent::QueryChanged { query } => RosterState {
                query,
                selected: 0,
                ..state
            },
            RosterIntent::SelectNext => {
                let len = state.visible().len();
                if len == 0 {
                    return state;
                }
                let selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                RosterState { selected, ..state }
            }
            RosterIntent::SelectPrev => {
                let len = state.visible().len();
                if len == 0 {
                    return state;
                }
                let selected = if state.selected == 0 {
                    len - 1
                } else {
                    state.selected - 1
                };
                RosterState { selected, ..state }
            }
        }
    }
}

/// Re-tag the first entry matching `id` and `from`, moving it to the tail
/// so its new status group shows it last. Untouched roster when nothing
/// matches.
///
/// Exactly one entry moves even if ids collide, so no user is ever lost.
fn move_entry(
    mut entries: Vec<RosterEntry>,
    id: &str,
    from: UserStatus,
    to: UserStatus,
) -> Vec<RosterEntry> {
    let Some(pos) = entries
        .iter()
        .position(|e| e.status == from && e.user.id == id)
    else {
        return entries;
    };

    let mut entry = entries.remove(pos);
    entry.status = to;
    entries.push(entry);
    entries
}

/// Keep the selection inside the visible list after a structural change.
fn clamp_selection(mut state: RosterState) -> RosterState {
    let len = state.visible().len();
    state.selected = if len == 0 {
        0
    } else {
        state.selected.min(len - 1)
    };
    state
}
