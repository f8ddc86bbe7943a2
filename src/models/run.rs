//! Run record as written by the game at the end of a run.

use serde::{Deserialize, Serialize};

/// One entry of a run's `damage_taken` history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageEvent {
    /// Enemy (or encounter) name that dealt the damage
    #[serde(default)]
    pub enemies: String,

    #[serde(default)]
    pub floor: Option<f64>,

    #[serde(default)]
    pub damage: Option<f64>,
}

/// A completed run.
///
/// Only the fields used by the analysis are modelled; everything else in
/// the file is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    #[serde(default)]
    pub ascension_level: Option<i64>,

    #[serde(default)]
    pub victory: bool,

    #[serde(default)]
    pub damage_taken: Vec<DamageEvent>,

    #[serde(default)]
    pub killed_by: Option<String>,

    #[serde(default)]
    pub floor_reached: u32,

    /// Seconds
    #[serde(default)]
    pub playtime: f64,
}

impl RunRecord {
    /// Enemy that dealt the last recorded damage of the run.
    pub fn last_enemy(&self) -> Option<&str> {
        self.damage_taken.last().map(|d| d.enemies.as_str())
    }
}
