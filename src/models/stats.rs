//! Derived statistics models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Act a floor belongs to, used to bucket defeat floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Act {
    One,
    Two,
    Three,
    Four,
}

impl Act {
    pub const ALL: [Act; 4] = [Act::One, Act::Two, Act::Three, Act::Four];

    /// Act for a floor number. Floors at or below 16 (including 0) count as act 1.
    pub fn from_floor(floor: u32) -> Self {
        if floor <= 16 {
            Act::One
        } else if floor <= 33 {
            Act::Two
        } else if floor <= 50 {
            Act::Three
        } else {
            Act::Four
        }
    }

    /// Floor range label for reports.
    pub fn floor_range(&self) -> &'static str {
        match self {
            Act::One => "1-16",
            Act::Two => "17-33",
            Act::Three => "34-50",
            Act::Four => "51+",
        }
    }
}

impl std::fmt::Display for Act {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Act::One => write!(f, "Act 1"),
            Act::Two => write!(f, "Act 2"),
            Act::Three => write!(f, "Act 3"),
            Act::Four => write!(f, "Act 4"),
        }
    }
}

/// Defeat count per act.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActBuckets {
    pub act_1: u32,
    pub act_2: u32,
    pub act_3: u32,
    pub act_4: u32,
}

impl ActBuckets {
    pub fn add(&mut self, act: Act) {
        match act {
            Act::One => self.act_1 += 1,
            Act::Two => self.act_2 += 1,
            Act::Three => self.act_3 += 1,
            Act::Four => self.act_4 += 1,
        }
    }

    pub fn get(&self, act: Act) -> u32 {
        match act {
            Act::One => self.act_1,
            Act::Two => self.act_2,
            Act::Three => self.act_3,
            Act::Four => self.act_4,
        }
    }

    pub fn total(&self) -> u32 {
        self.act_1 + self.act_2 + self.act_3 + self.act_4
    }
}

/// Finalized statistics for one character folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterStats {
    /// Character folder name
    pub character: String,

    /// False when the folder did not exist
    pub folder_present: bool,

    /// Run files found in the folder
    pub files_scanned: usize,

    /// Run files that could not be read or parsed
    pub files_skipped: usize,

    /// Runs at the target ascension
    pub tier_runs: u32,

    pub full_clears: u32,

    pub other_victories: u32,

    pub defeats: u32,

    /// File names of full clears, sorted
    pub full_clear_files: Vec<String>,

    /// Defeat cause -> occurrences
    pub defeat_causes: BTreeMap<String, u32>,

    pub defeat_floors: Vec<u32>,

    /// Playtimes in seconds, only runs with a positive playtime
    pub playtimes: Vec<f64>,

    /// Floor reached, one entry per tier run
    pub floors_reached: Vec<u32>,

    /// Full clears / tier runs, in percent
    pub clear_rate: f64,

    /// All victories / tier runs, in percent
    pub victory_rate: f64,

    /// Seconds
    pub avg_playtime: f64,

    pub avg_floor: f64,

    pub defeats_by_act: ActBuckets,
}

impl CharacterStats {
    /// Statistics for a character with no readable folder.
    pub fn missing(character: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            folder_present: false,
            ..Default::default()
        }
    }

    pub fn victories(&self) -> u32 {
        self.full_clears + self.other_victories
    }

    pub fn avg_playtime_minutes(&self) -> f64 {
        self.avg_playtime / 60.0
    }

    /// Outcome buckets add up to the tier run count.
    pub fn is_consistent(&self) -> bool {
        self.full_clears + self.other_victories + self.defeats == self.tier_runs
    }

    /// Most frequent defeat causes, ties broken by name.
    pub fn top_defeat_causes(&self, limit: usize) -> Vec<(&str, u32)> {
        let mut causes: Vec<(&str, u32)> = self
            .defeat_causes
            .iter()
            .map(|(cause, count)| (cause.as_str(), *count))
            .collect();
        causes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        causes.truncate(limit);
        causes
    }
}

/// Totals across all characters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallStats {
    pub tier_runs: u32,
    pub full_clears: u32,
    pub other_victories: u32,
    pub defeats: u32,
    pub clear_rate: f64,
    pub victory_rate: f64,
}

impl OverallStats {
    /// Sum the counters of every character.
    pub fn from_characters(characters: &[CharacterStats]) -> Self {
        let tier_runs = characters.iter().map(|c| c.tier_runs).sum();
        let full_clears = characters.iter().map(|c| c.full_clears).sum();
        let other_victories = characters.iter().map(|c| c.other_victories).sum();
        let defeats = characters.iter().map(|c| c.defeats).sum();

        Self {
            tier_runs,
            full_clears,
            other_victories,
            defeats,
            clear_rate: crate::calculate::calculate_rate(full_clears, tier_runs),
            victory_rate: crate::calculate::calculate_rate(full_clears + other_victories, tier_runs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stats(character: &str, full: u32, other: u32, defeats: u32) -> CharacterStats {
        CharacterStats {
            character: character.to_string(),
            folder_present: true,
            tier_runs: full + other + defeats,
            full_clears: full,
            other_victories: other,
            defeats,
            ..Default::default()
        }
    }

    #[test]
    fn test_act_from_floor() {
        assert_eq!(Act::from_floor(0), Act::One);
        assert_eq!(Act::from_floor(1), Act::One);
        assert_eq!(Act::from_floor(16), Act::One);
        assert_eq!(Act::from_floor(17), Act::Two);
        assert_eq!(Act::from_floor(33), Act::Two);
        assert_eq!(Act::from_floor(34), Act::Three);
        assert_eq!(Act::from_floor(50), Act::Three);
        assert_eq!(Act::from_floor(51), Act::Four);
        assert_eq!(Act::from_floor(57), Act::Four);
    }

    #[test]
    fn test_act_display() {
        assert_eq!(format!("{} ({})", Act::One, Act::One.floor_range()), "Act 1 (1-16)");
        assert_eq!(format!("{} ({})", Act::Four, Act::Four.floor_range()), "Act 4 (51+)");
    }

    #[test]
    fn test_act_buckets() {
        let mut buckets = ActBuckets::default();
        for floor in [3, 15, 20, 40, 51, 55] {
            buckets.add(Act::from_floor(floor));
        }

        assert_eq!(
            buckets,
            ActBuckets {
                act_1: 2,
                act_2: 1,
                act_3: 1,
                act_4: 2
            }
        );
        assert_eq!(buckets.get(Act::Four), 2);
        assert_eq!(buckets.total(), 6);
    }

    #[test]
    fn test_top_defeat_causes_ordering() {
        let mut s = stats("IRONCLAD", 0, 0, 6);
        s.defeat_causes.insert("Spike".to_string(), 1);
        s.defeat_causes.insert("The Champ".to_string(), 3);
        s.defeat_causes.insert("Gremlin Nob".to_string(), 1);
        s.defeat_causes.insert("Time Eater".to_string(), 1);

        let top = s.top_defeat_causes(3);
        assert_eq!(
            top,
            vec![("The Champ", 3), ("Gremlin Nob", 1), ("Spike", 1)]
        );
    }

    #[test]
    fn test_missing_character() {
        let s = CharacterStats::missing("WATCHER");
        assert!(!s.folder_present);
        assert_eq!(s.tier_runs, 0);
        assert_eq!(s.clear_rate, 0.0);
        assert!(s.is_consistent());
    }

    #[test]
    fn test_overall_from_characters() {
        let overall = OverallStats::from_characters(&[
            stats("DEFECT", 2, 1, 7),
            stats("IRONCLAD", 1, 0, 9),
        ]);

        assert_eq!(overall.tier_runs, 20);
        assert_eq!(overall.full_clears, 3);
        assert_eq!(overall.other_victories, 1);
        assert_eq!(overall.defeats, 16);
        assert!((overall.clear_rate - 15.0).abs() < 1e-9);
        assert!((overall.victory_rate - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_empty() {
        let overall = OverallStats::from_characters(&[]);
        assert_eq!(overall, OverallStats::default());
    }

    #[test]
    fn test_character_stats_serialization() {
        let s = stats("DEFECT", 1, 1, 1);
        let json = serde_json::to_string(&s).unwrap();
        let parsed: CharacterStats = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.character, "DEFECT");
        assert_eq!(parsed.tier_runs, 3);
    }
}
