//! Text reports.
//!
//! Each report analyzes the configured character folders and writes a
//! human-readable summary to any [`std::io::Write`] sink. Reports implement
//! [`Report`] so the runner can invoke them one after another.

mod clear_rate;
mod detailed;
mod table;

pub use clear_rate::*;
pub use detailed::*;
pub use table::*;

use std::io::Write;

use thiserror::Error;

use crate::config::{AnalysisConfig, ConfigError};

/// Errors that can occur while generating a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// A report over the run history.
pub trait Report {
    /// Report identifier for logging.
    fn name(&self) -> &'static str;

    /// Human-readable title used in runner banners.
    fn description(&self) -> &'static str;

    /// Analyze the configured folders and write the report.
    fn generate(&self, config: &AnalysisConfig, out: &mut dyn Write) -> Result<(), ReportError>;
}

pub(crate) fn rule(width: usize) -> String {
    "=".repeat(width)
}
