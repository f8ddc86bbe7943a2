//! Run classification.
//!
//! A run only counts toward the statistics when it was played at the target
//! ascension. Counted runs are then split three ways:
//! - full clear: victory where the final boss dealt the last recorded damage
//! - other victory
//! - defeat, with the killer and the floor it happened on

use crate::config::AnalysisConfig;
use crate::models::{RunOutcome, RunRecord, UNKNOWN_CAUSE};

/// What a run is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criteria<'a> {
    pub target_ascension: u32,
    pub final_boss: &'a str,
}

impl<'a> Criteria<'a> {
    pub fn new(target_ascension: u32, final_boss: &'a str) -> Self {
        Self {
            target_ascension,
            final_boss,
        }
    }

    pub fn from_config(config: &'a AnalysisConfig) -> Self {
        Self::new(config.target_ascension, &config.final_boss)
    }
}

/// Whether the run was played at the target ascension.
pub fn belongs_to_target_tier(run: &RunRecord, target_ascension: u32) -> bool {
    run.ascension_level == Some(i64::from(target_ascension))
}

/// Whether the run is a full clear.
///
/// A victory without any recorded damage is not a full clear: the killing
/// blow cannot be attributed to the final boss.
pub fn is_full_clear(run: &RunRecord, criteria: &Criteria<'_>) -> bool {
    belongs_to_target_tier(run, criteria.target_ascension)
        && run.victory
        && run.last_enemy() == Some(criteria.final_boss)
}

/// Classify a run, or `None` when it is not at the target ascension.
pub fn classify(run: &RunRecord, criteria: &Criteria<'_>) -> Option<RunOutcome> {
    if !belongs_to_target_tier(run, criteria.target_ascension) {
        return None;
    }

    let outcome = if is_full_clear(run, criteria) {
        RunOutcome::FullClear
    } else if run.victory {
        RunOutcome::OtherVictory
    } else {
        RunOutcome::Defeat {
            cause: run
                .killed_by
                .clone()
                .unwrap_or_else(|| UNKNOWN_CAUSE.to_string()),
            floor: run.floor_reached,
        }
    };

    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DamageEvent;

    const HEART: &str = "The Heart";

    fn criteria() -> Criteria<'static> {
        Criteria::new(20, HEART)
    }

    fn run(ascension: i64, victory: bool, enemies: &[&str]) -> RunRecord {
        RunRecord {
            ascension_level: Some(ascension),
            victory,
            damage_taken: enemies
                .iter()
                .map(|e| DamageEvent {
                    enemies: e.to_string(),
                    ..Default::default()
                })
                .collect(),
            floor_reached: 57,
            playtime: 3000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_target_tier() {
        assert!(belongs_to_target_tier(&run(20, true, &[]), 20));
        assert!(!belongs_to_target_tier(&run(19, true, &[]), 20));
        assert!(!belongs_to_target_tier(&RunRecord::default(), 20));
    }

    #[test]
    fn test_full_clear() {
        let r = run(20, true, &["Jaw Worm", HEART]);
        assert!(is_full_clear(&r, &criteria()));
        assert_eq!(classify(&r, &criteria()), Some(RunOutcome::FullClear));
    }

    #[test]
    fn test_defeat_is_not_full_clear() {
        let mut r = run(20, false, &["Jaw Worm", HEART]);
        r.killed_by = Some(HEART.to_string());
        r.floor_reached = 56;

        assert!(!is_full_clear(&r, &criteria()));
        assert_eq!(
            classify(&r, &criteria()),
            Some(RunOutcome::Defeat {
                cause: HEART.to_string(),
                floor: 56
            })
        );
    }

    #[test]
    fn test_victory_without_damage_is_other_victory() {
        let r = run(20, true, &[]);

        assert!(!is_full_clear(&r, &criteria()));
        assert_eq!(classify(&r, &criteria()), Some(RunOutcome::OtherVictory));
    }

    #[test]
    fn test_heart_not_last_is_other_victory() {
        let r = run(20, true, &[HEART, "Awakened One"]);
        assert_eq!(classify(&r, &criteria()), Some(RunOutcome::OtherVictory));
    }

    #[test]
    fn test_other_tier_excluded() {
        let r = run(15, true, &[HEART]);

        assert!(!is_full_clear(&r, &criteria()));
        assert_eq!(classify(&r, &criteria()), None);
    }

    #[test]
    fn test_defeat_defaults() {
        let r = RunRecord {
            ascension_level: Some(20),
            ..Default::default()
        };

        assert_eq!(
            classify(&r, &criteria()),
            Some(RunOutcome::Defeat {
                cause: "Unknown".to_string(),
                floor: 0
            })
        );
    }

    #[test]
    fn test_custom_boss() {
        let r = run(20, true, &["Corrupt Heart"]);
        let custom = Criteria::new(20, "Corrupt Heart");

        assert!(is_full_clear(&r, &custom));
        assert!(!is_full_clear(&r, &criteria()));
    }

    #[test]
    fn test_criteria_from_config() {
        let config = AnalysisConfig::default();
        assert_eq!(Criteria::from_config(&config), Criteria::new(20, "The Heart"));
    }
}
