//! Fixed-width character comparison table.

use crate::models::{CharacterStats, OverallStats};

/// Column header line.
pub fn comparison_header() -> String {
    format!(
        "{:<12} {:<8} {:<6} {:<8} {:<8} {:<8}",
        "Character", "Runs", "Clears", "Victory", "Clear", "Avg time"
    )
    .trim_end()
    .to_string()
}

/// One row per character.
pub fn character_row(stats: &CharacterStats) -> String {
    format!(
        "{:<12} {:<8} {:<6} {:<8.1}% {:<8.2}% {:<8.1}m",
        stats.character,
        stats.tier_runs,
        stats.full_clears,
        stats.victory_rate,
        stats.clear_rate,
        stats.avg_playtime_minutes()
    )
}

/// Overall total row. Victory rate and playtime columns are left blank.
pub fn total_row(overall: &OverallStats) -> String {
    format!(
        "{:<12} {:<8} {:<6} {:<8} {:<8.2}%",
        "Overall", overall.tier_runs, overall.full_clears, "", overall.clear_rate
    )
}

/// Header, one row per character, separator, total row.
pub fn comparison_table(characters: &[CharacterStats], width: usize) -> Vec<String> {
    let separator = "-".repeat(width);
    let overall = OverallStats::from_characters(characters);

    let mut lines = Vec::with_capacity(characters.len() + 4);
    lines.push(comparison_header());
    lines.push(separator.clone());
    lines.extend(characters.iter().map(character_row));
    lines.push(separator);
    lines.push(total_row(&overall));
    lines
}
