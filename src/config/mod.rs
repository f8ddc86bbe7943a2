//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Characters analyzed when the config file does not list any.
pub const DEFAULT_CHARACTERS: [&str; 4] = ["DEFECT", "IRONCLAD", "THE_SILENT", "WATCHER"];

/// Analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Directory holding one folder per character
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Character folders, in report order
    #[serde(default = "default_characters")]
    pub characters: Vec<String>,

    /// Ascension level a run must have to be counted
    #[serde(default = "default_target_ascension")]
    pub target_ascension: u32,

    /// Enemy that must deal the last recorded damage for a full clear
    #[serde(default = "default_final_boss")]
    pub final_boss: String,

    /// Run file extension, without the dot
    #[serde(default = "default_run_extension")]
    pub run_extension: String,

    /// How many defeat causes the detailed report lists
    #[serde(default = "default_top_defeat_causes")]
    pub top_defeat_causes: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_characters() -> Vec<String> {
    DEFAULT_CHARACTERS.iter().map(|c| c.to_string()).collect()
}

fn default_target_ascension() -> u32 {
    20
}

fn default_final_boss() -> String {
    "The Heart".to_string()
}

fn default_run_extension() -> String {
    "run".to_string()
}

fn default_top_defeat_causes() -> usize {
    5
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            characters: default_characters(),
            target_ascension: default_target_ascension(),
            final_boss: default_final_boss(),
            run_extension: default_run_extension(),
            top_defeat_causes: default_top_defeat_causes(),
            log_level: default_log_level(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Directory holding the run files of one character.
    pub fn character_dir(&self, character: &str) -> PathBuf {
        self.base_dir.join(character)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.characters.is_empty() {
            return Err(ConfigError::ValidationError(
                "At least one character folder must be configured".to_string(),
            ));
        }

        if self.characters.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "Character folder names must not be empty".to_string(),
            ));
        }

        if self.final_boss.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Final boss must not be empty".to_string(),
            ));
        }

        if self.run_extension.is_empty()
            || self
                .run_extension
                .chars()
                .any(|c| matches!(c, '*' | '?' | '[' | ']' | '/' | '\\' | '.'))
        {
            return Err(ConfigError::ValidationError(format!(
                "Invalid run file extension: {:?}",
                self.run_extension
            )));
        }

        if self.top_defeat_causes == 0 {
            return Err(ConfigError::ValidationError(
                "top_defeat_causes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
