//! Run file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::StorageError;
use crate::config::AnalysisConfig;
use crate::models::RunRecord;

/// A character folder of run files.
#[derive(Debug, Clone)]
pub struct RunFolder {
    path: PathBuf,
    extension: String,
}

impl RunFolder {
    /// Create a folder reader for files with the given extension.
    pub fn new(path: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            path,
            extension: extension.into(),
        }
    }

    /// Folder of a configured character.
    pub fn for_character(config: &AnalysisConfig, character: &str) -> Self {
        Self::new(config.character_dir(character), config.run_extension.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the folder exists.
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// List run files, sorted by path.
    pub fn list_files(&self) -> Result<Vec<PathBuf>, StorageError> {
        if !self.exists() {
            return Err(StorageError::PathNotFound(self.path.clone()));
        }

        let escaped = glob::Pattern::escape(&self.path.to_string_lossy());
        let pattern = Path::new(&escaped).join(format!("*.{}", self.extension));
        let mut files = Vec::new();

        for entry in glob::glob(&pattern.to_string_lossy())? {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => warn!("Failed to read entry in {:?}: {}", self.path, e),
            }
        }

        files.sort();
        debug!("Found {} run files in {:?}", files.len(), self.path);
        Ok(files)
    }
}

/// Read and parse one run file.
pub fn try_load_run(path: &Path) -> Result<RunRecord, StorageError> {
    let contents = fs::read_to_string(path)?;
    let run = serde_json::from_str(&contents)?;
    Ok(run)
}

/// Read one run file, logging and returning `None` on any failure.
pub fn load_run(path: &Path) -> Option<RunRecord> {
    match try_load_run(path) {
        Ok(run) => Some(run),
        Err(e) => {
            warn!("Skipping unreadable run file {:?}: {}", path, e);
            None
        }
    }
}
