//! Application configuration.
//!
//! Loaded from `~/.config/userdeck/config.toml` when present, with serde
//! defaults covering every field so a missing or partial file still yields
//! a usable [`Config`].

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DataConfig, UiConfig};
