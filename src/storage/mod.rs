//! Run history on disk.
//!
//! The history is laid out as one folder per character, each holding one
//! JSON document per finished run:
//!
//! ```text
//! <base_dir>/
//!   IRONCLAD/1594939211.run
//!   WATCHER/1595110046.run
//! ```

mod run_file;

pub use run_file::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading run history.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}
