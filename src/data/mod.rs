//! Roster data loading.
//!
//! The default dataset is embedded at compile time with `include_str!()`,
//! so the binary runs without any files on disk. A JSON file with the same
//! shape can be supplied to replace it.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::users::RawUser;

/// Bundled roster records, JSON array of raw users.
pub const EMBEDDED_USERS: &str = include_str!("../../data/users.json");

/// Errors that can occur when loading roster data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Embedded dataset is invalid: {source}")]
    EmbeddedError {
        #[source]
        source: serde_json::Error,
    },
}

/// Loads raw user records.
///
/// - With a path, reads and parses that file.
/// - Without one, parses the embedded dataset.
pub fn load(path: Option<&Path>) -> Result<Vec<RawUser>, DataError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| DataError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

            serde_json::from_str(&content).map_err(|e| DataError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })
        }
        None => {
            serde_json::from_str(EMBEDDED_USERS).map_err(|e| DataError::EmbeddedError { source: e })
        }
    }
}
