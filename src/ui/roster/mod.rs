//! User roster feature module.
//!
//! Owns the deck of processed users, the remove/restore lifecycle, and
//! the username search.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Tagged roster entries, query, selection
//! - `intent.rs` - Seed, remove/restore, search, selection moves
//! - `reducer.rs` - State transitions
//! - `cards.rs` - Card grid rendering

mod cards;
mod intent;
mod reducer;
mod state;

pub use cards::render_card_grid;
pub use intent::RosterIntent;
pub use reducer::RosterReducer;
pub use state::{RosterEntry, RosterState, UserStatus};
