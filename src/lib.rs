//! Terminal user roster with a demo counter.
//!
//! Loads a JSON dataset of users, keeps the adults, assigns each a short
//! random id, and shows them as a card grid: cards can be removed,
//! searched (removed ones included), and restored. A small counter with
//! random, next-odd, and clamped-decrement steps rides along in its own
//! panel.
//!
//! All UI state lives in MVI reducers under [`ui`]; randomness flows
//! through the [`random::RandomSource`] trait so every transition is
//! reproducible under test or a fixed seed.

pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod random;
pub mod ui;
pub mod users;
