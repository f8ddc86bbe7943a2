//! Report runner.
//!
//! Runs a list of reports one after another against the same configuration.
//! A failing report is recorded and the remaining reports still run.

use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::config::AnalysisConfig;
use crate::report::{ClearRateReport, DetailedReport, Report};

const WIDTH: usize = 60;

/// Result of one report.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub name: &'static str,
    pub description: &'static str,
    pub error: Option<String>,
}

impl ReportOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of a runner pass.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub outcomes: Vec<ReportOutcome>,
    pub duration: Duration,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.total()
    }
}

/// Sequential report runner.
pub struct ReportRunner {
    reports: Vec<Box<dyn Report>>,
}

impl Default for ReportRunner {
    /// Clear-rate report followed by the detailed report.
    fn default() -> Self {
        Self::new(vec![Box::new(ClearRateReport), Box::new(DetailedReport)])
    }
}

impl ReportRunner {
    pub fn new(reports: Vec<Box<dyn Report>>) -> Self {
        Self { reports }
    }

    /// Run every report in order, then print a summary.
    ///
    /// Only failures to write to `out` itself are returned as errors.
    pub fn run_all(
        &self,
        config: &AnalysisConfig,
        out: &mut dyn Write,
    ) -> std::io::Result<RunSummary> {
        let started = Instant::now();
        let mut outcomes = Vec::with_capacity(self.reports.len());

        for report in &self.reports {
            writeln!(out)?;
            writeln!(out, "{}", "=".repeat(WIDTH))?;
            writeln!(out, "Running {}...", report.description())?;
            writeln!(out, "{}", "=".repeat(WIDTH))?;

            let result = report.generate(config, out);
            let outcome = match result {
                Ok(()) => {
                    info!("Report {} completed", report.name());
                    writeln!(out)?;
                    writeln!(out, "{} completed successfully", report.description())?;
                    ReportOutcome {
                        name: report.name(),
                        description: report.description(),
                        error: None,
                    }
                }
                Err(e) => {
                    error!("Report {} failed: {}", report.name(), e);
                    writeln!(out)?;
                    writeln!(out, "{} failed: {}", report.description(), e)?;
                    ReportOutcome {
                        name: report.name(),
                        description: report.description(),
                        error: Some(e.to_string()),
                    }
                }
            };
            outcomes.push(outcome);
        }

        let summary = RunSummary {
            outcomes,
            duration: started.elapsed(),
        };

        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(WIDTH))?;
        writeln!(
            out,
            "Result: {}/{} reports completed successfully",
            summary.succeeded(),
            summary.total()
        )?;
        if summary.all_succeeded() {
            writeln!(out, "All analyses completed successfully")?;
        } else {
            writeln!(out, "Some analyses reported errors")?;
        }
        writeln!(out, "{}", "=".repeat(WIDTH))?;

        info!(
            "Ran {} reports in {:?} ({} failed)",
            summary.total(),
            summary.duration,
            summary.total() - summary.succeeded()
        );

        Ok(summary)
    }
}
