//! Basic clear-rate report.

use std::io::Write;

use tracing::info;

use super::{rule, Report, ReportError};
use crate::aggregate::analyze_all;
use crate::config::AnalysisConfig;
use crate::models::{CharacterStats, OverallStats};

const WIDTH: usize = 60;

/// Full-clear rate per character and overall.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearRateReport;

impl Report for ClearRateReport {
    fn name(&self) -> &'static str {
        "clear-rate"
    }

    fn description(&self) -> &'static str {
        "Clear rate analysis"
    }

    fn generate(&self, config: &AnalysisConfig, out: &mut dyn Write) -> Result<(), ReportError> {
        config.validate()?;
        info!("Generating {} report", self.name());

        let characters = analyze_all(config);
        write_clear_rate(out, config, &characters)
    }
}

/// Write the clear-rate report for already aggregated characters.
pub fn write_clear_rate(
    out: &mut dyn Write,
    config: &AnalysisConfig,
    characters: &[CharacterStats],
) -> Result<(), ReportError> {
    let ascension = config.target_ascension;

    writeln!(out, "{}", rule(WIDTH))?;
    writeln!(out, "Slay the Spire clear rate analysis")?;
    writeln!(
        out,
        "Criteria: Ascension {} & {} defeated",
        ascension, config.final_boss
    )?;
    writeln!(out, "{}", rule(WIDTH))?;

    for stats in characters {
        writeln!(out)?;
        writeln!(out, "[{}]", stats.character)?;

        if !stats.folder_present {
            writeln!(
                out,
                "  Folder not found: {}",
                config.character_dir(&stats.character).display()
            )?;
        } else {
            writeln!(out, "  Processed {} run files", stats.files_scanned)?;
            if stats.files_skipped > 0 {
                writeln!(out, "  Skipped {} unreadable files", stats.files_skipped)?;
            }
        }

        if stats.tier_runs == 0 {
            writeln!(out, "  No Ascension {} runs", ascension)?;
            continue;
        }

        writeln!(out, "  Ascension {} runs: {}", ascension, stats.tier_runs)?;
        writeln!(out, "  {} clears: {}", config.final_boss, stats.full_clears)?;
        writeln!(out, "  Clear rate: {:.2}%", stats.clear_rate)?;

        if !stats.full_clear_files.is_empty() {
            writeln!(out, "  Full clear files:")?;
            for file in &stats.full_clear_files {
                writeln!(out, "    - {}", file)?;
            }
        }
    }

    let overall = OverallStats::from_characters(characters);

    writeln!(out)?;
    writeln!(out, "{}", rule(WIDTH))?;
    writeln!(out, "[Overall]")?;
    writeln!(out, "Total Ascension {} runs: {}", ascension, overall.tier_runs)?;
    writeln!(
        out,
        "Total {} clears: {}",
        config.final_boss, overall.full_clears
    )?;
    if overall.tier_runs > 0 {
        writeln!(out, "Overall clear rate: {:.2}%", overall.clear_rate)?;
    } else {
        writeln!(out, "No Ascension {} runs", ascension)?;
    }
    writeln!(out, "{}", rule(WIDTH))?;

    Ok(())
}
