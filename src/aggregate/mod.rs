//! Per-character aggregation.
//!
//! Folds every run file of a character folder into a [`CharacterStats`].
//! Unreadable files and missing folders are logged and skipped; aggregation
//! never fails.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::calculate::{bucket_defeat_floors, calculate_mean, calculate_mean_floor, calculate_rate};
use crate::classify::{classify, Criteria};
use crate::config::AnalysisConfig;
use crate::models::{CharacterStats, RunOutcome, RunRecord};
use crate::storage::{load_run, RunFolder, StorageError};

/// Running totals for one character, finalized with [`CharacterAccumulator::finish`].
#[derive(Debug, Clone, Default)]
pub struct CharacterAccumulator {
    character: String,
    files_scanned: usize,
    files_skipped: usize,
    tier_runs: u32,
    full_clears: u32,
    other_victories: u32,
    defeats: u32,
    full_clear_files: Vec<String>,
    defeat_causes: BTreeMap<String, u32>,
    defeat_floors: Vec<u32>,
    playtimes: Vec<f64>,
    floors_reached: Vec<u32>,
}

impl CharacterAccumulator {
    pub fn new(character: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            ..Default::default()
        }
    }

    /// Count a file that could not be loaded.
    pub fn skip_file(&mut self) {
        self.files_scanned += 1;
        self.files_skipped += 1;
    }

    /// Fold one loaded run. `outcome` is `None` for runs outside the target tier.
    pub fn record(&mut self, file_name: &str, run: &RunRecord, outcome: Option<RunOutcome>) {
        self.files_scanned += 1;

        let Some(outcome) = outcome else {
            return;
        };

        self.tier_runs += 1;
        self.floors_reached.push(run.floor_reached);
        if run.playtime > 0.0 {
            self.playtimes.push(run.playtime);
        }

        match outcome {
            RunOutcome::FullClear => {
                self.full_clears += 1;
                self.full_clear_files.push(file_name.to_string());
            }
            RunOutcome::OtherVictory => self.other_victories += 1,
            RunOutcome::Defeat { cause, floor } => {
                self.defeats += 1;
                *self.defeat_causes.entry(cause).or_insert(0) += 1;
                self.defeat_floors.push(floor);
            }
        }
    }

    /// Compute derived metrics.
    pub fn finish(mut self) -> CharacterStats {
        self.full_clear_files.sort();

        CharacterStats {
            clear_rate: calculate_rate(self.full_clears, self.tier_runs),
            victory_rate: calculate_rate(self.full_clears + self.other_victories, self.tier_runs),
            avg_playtime: calculate_mean(&self.playtimes),
            avg_floor: calculate_mean_floor(&self.floors_reached),
            defeats_by_act: bucket_defeat_floors(&self.defeat_floors),
            character: self.character,
            folder_present: true,
            files_scanned: self.files_scanned,
            files_skipped: self.files_skipped,
            tier_runs: self.tier_runs,
            full_clears: self.full_clears,
            other_victories: self.other_victories,
            defeats: self.defeats,
            full_clear_files: self.full_clear_files,
            defeat_causes: self.defeat_causes,
            defeat_floors: self.defeat_floors,
            playtimes: self.playtimes,
            floors_reached: self.floors_reached,
        }
    }
}

/// Fold the given run files into an accumulator.
pub fn aggregate_files<P: AsRef<Path>>(
    character: &str,
    files: &[P],
    criteria: &Criteria<'_>,
) -> CharacterAccumulator {
    let mut acc = CharacterAccumulator::new(character);

    for path in files {
        let path = path.as_ref();
        let Some(run) = load_run(path) else {
            acc.skip_file();
            continue;
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let outcome = classify(&run, criteria);
        debug!("{}: {:?}", file_name, outcome);
        acc.record(&file_name, &run, outcome);
    }

    acc
}

/// Analyze one character folder.
pub fn analyze_character(config: &AnalysisConfig, character: &str) -> CharacterStats {
    let folder = RunFolder::for_character(config, character);
    let files = match folder.list_files() {
        Ok(files) => files,
        Err(StorageError::PathNotFound(path)) => {
            warn!("Character folder not found: {:?}", path);
            return CharacterStats::missing(character);
        }
        Err(e) => {
            warn!("Failed to list run files for {}: {}", character, e);
            return CharacterStats::missing(character);
        }
    };

    let criteria = Criteria::from_config(config);
    let stats = aggregate_files(character, &files, &criteria).finish();

    info!(
        "{}: {} files, {} skipped, {} runs at A{}, {} full clears",
        character,
        stats.files_scanned,
        stats.files_skipped,
        stats.tier_runs,
        config.target_ascension,
        stats.full_clears
    );

    stats
}

/// Analyze every configured character, in configured order.
pub fn analyze_all(config: &AnalysisConfig) -> Vec<CharacterStats> {
    config
        .characters
        .iter()
        .map(|character| analyze_character(config, character))
        .collect()
}
