//! Detailed per-character report with comparison table.

use std::io::Write;

use tracing::{debug, info};

use super::{comparison_table, rule, Report, ReportError};
use crate::aggregate::analyze_all;
use crate::config::AnalysisConfig;
use crate::models::{Act, CharacterStats};

const WIDTH: usize = 80;

/// Outcome breakdown, averages, defeat causes and floors per character.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailedReport;

impl Report for DetailedReport {
    fn name(&self) -> &'static str {
        "detailed"
    }

    fn description(&self) -> &'static str {
        "Detailed analysis"
    }

    fn generate(&self, config: &AnalysisConfig, out: &mut dyn Write) -> Result<(), ReportError> {
        config.validate()?;
        info!("Generating {} report", self.name());

        let characters = analyze_all(config);
        write_detailed(out, config, &characters)
    }
}

/// Write the detailed report. Characters whose folder is missing are left out.
pub fn write_detailed(
    out: &mut dyn Write,
    config: &AnalysisConfig,
    characters: &[CharacterStats],
) -> Result<(), ReportError> {
    writeln!(out, "{}", rule(WIDTH))?;
    writeln!(out, "Slay the Spire detailed analysis report")?;
    writeln!(out, "Criteria: Ascension {}", config.target_ascension)?;
    writeln!(out, "{}", rule(WIDTH))?;

    let present: Vec<CharacterStats> = characters
        .iter()
        .filter(|c| {
            if !c.folder_present {
                debug!("Leaving {} out of the detailed report", c.character);
            }
            c.folder_present
        })
        .cloned()
        .collect();

    for stats in &present {
        write_character(out, config, stats)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", rule(WIDTH))?;
    writeln!(out, "[Character comparison]")?;
    writeln!(out, "{}", rule(WIDTH))?;
    for line in comparison_table(&present, WIDTH) {
        writeln!(out, "{}", line)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", rule(WIDTH))?;
    writeln!(out, "Analysis complete")?;
    writeln!(out, "{}", rule(WIDTH))?;

    Ok(())
}

fn write_character(
    out: &mut dyn Write,
    config: &AnalysisConfig,
    stats: &CharacterStats,
) -> Result<(), ReportError> {
    writeln!(out)?;
    writeln!(out, "[{}] detailed analysis", stats.character)?;
    writeln!(out, "{}", "-".repeat(50))?;
    writeln!(
        out,
        "  Ascension {} runs: {}",
        config.target_ascension, stats.tier_runs
    )?;
    writeln!(out, "  {} clears: {}", config.final_boss, stats.full_clears)?;
    writeln!(out, "  Other victories: {}", stats.other_victories)?;
    writeln!(out, "  Defeats: {}", stats.defeats)?;
    writeln!(out, "  {} clear rate: {:.2}%", config.final_boss, stats.clear_rate)?;
    writeln!(out, "  Victory rate: {:.2}%", stats.victory_rate)?;
    writeln!(
        out,
        "  Average playtime: {:.1} min",
        stats.avg_playtime_minutes()
    )?;
    writeln!(out, "  Average floor reached: {:.1}", stats.avg_floor)?;

    if !stats.defeat_causes.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "  Top defeat causes (top {}):",
            config.top_defeat_causes
        )?;
        for (i, (cause, count)) in stats
            .top_defeat_causes(config.top_defeat_causes)
            .iter()
            .enumerate()
        {
            writeln!(out, "    {}. {}: {}", i + 1, cause, count)?;
        }
    }

    if !stats.defeat_floors.is_empty() {
        writeln!(out)?;
        writeln!(out, "  Defeat floor distribution:")?;
        for act in Act::ALL {
            writeln!(
                out,
                "    {} ({}): {}",
                act,
                act.floor_range(),
                stats.defeats_by_act.get(act)
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActBuckets;
    use std::collections::BTreeMap;

    fn ironclad() -> CharacterStats {
        CharacterStats {
            character: "IRONCLAD".to_string(),
            folder_present: true,
            files_scanned: 3,
            tier_runs: 3,
            full_clears: 1,
            other_victories: 1,
            defeats: 1,
            defeat_causes: BTreeMap::from([("Spike".to_string(), 1)]),
            defeat_floors: vec![15],
            playtimes: vec![3600.0, 2400.0],
            floors_reached: vec![57, 51, 15],
            clear_rate: 100.0 / 3.0,
            victory_rate: 200.0 / 3.0,
            avg_playtime: 3000.0,
            avg_floor: 41.0,
            defeats_by_act: ActBuckets {
                act_1: 1,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn render(characters: &[CharacterStats]) -> String {
        let mut buf = Vec::new();
        write_detailed(&mut buf, &AnalysisConfig::default(), characters).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_character_section() {
        let text = render(&[ironclad()]);

        assert!(text.contains("[IRONCLAD] detailed analysis\n"));
        assert!(text.contains("  Ascension 20 runs: 3\n"));
        assert!(text.contains("  The Heart clears: 1\n"));
        assert!(text.contains("  Other victories: 1\n"));
        assert!(text.contains("  Defeats: 1\n"));
        assert!(text.contains("  The Heart clear rate: 33.33%\n"));
        assert!(text.contains("  Victory rate: 66.67%\n"));
        assert!(text.contains("  Average playtime: 50.0 min\n"));
        assert!(text.contains("  Average floor reached: 41.0\n"));
        assert!(text.contains("  Top defeat causes (top 5):\n    1. Spike: 1\n"));
        assert!(text.contains("    Act 1 (1-16): 1\n"));
        assert!(text.contains("    Act 4 (51+): 0\n"));
    }

    #[test]
    fn test_comparison_table_included() {
        let text = render(&[ironclad()]);

        assert!(text.contains("[Character comparison]"));
        assert!(text.contains("IRONCLAD     3        1      66.7    % 33.33   % 50.0    m\n"));
        assert!(text.contains("Overall      3        1               33.33   %\n"));
        assert!(text.contains("Analysis complete\n"));
    }

    #[test]
    fn test_missing_folder_left_out() {
        let text = render(&[ironclad(), CharacterStats::missing("WATCHER")]);

        assert!(!text.contains("WATCHER"));
        assert!(text.contains("Overall      3        1"));
    }

    #[test]
    fn test_no_defeats_skips_sections() {
        let mut stats = ironclad();
        stats.defeats = 0;
        stats.defeat_causes.clear();
        stats.defeat_floors.clear();

        let text = render(&[stats]);
        assert!(!text.contains("Top defeat causes"));
        assert!(!text.contains("Defeat floor distribution"));
    }
}
