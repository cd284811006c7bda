//! User records and the startup processing pipeline.

pub mod ident;
pub mod pipeline;
mod types;

pub use types::{Address, Company, Geo, ProcessedUser, RawUser};
