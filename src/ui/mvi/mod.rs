//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for the unidirectional data flow used by every UI feature.
//!
//! # Architecture
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ draw
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of one feature's UI, replaced wholesale on each step
//! - **Intent**: something the user asked for, carrying its payload
//! - **Reducer**: pure transition from old state plus intent to new state
//!
//! Features whose transitions need random draws implement
//! [`RandomReducer`] instead, which threads a random source through
//! `reduce` so the transition stays testable.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{RandomReducer, Reducer};
pub use state::UiState;
