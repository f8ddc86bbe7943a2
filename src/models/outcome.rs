//! Classification result for a single run.

use serde::{Deserialize, Serialize};

/// Cause recorded when a defeat has no `killed_by`.
pub const UNKNOWN_CAUSE: &str = "Unknown";

/// How a tier-matching run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Victory with the final boss dealing the last recorded damage
    FullClear,
    /// Any other victory
    OtherVictory,
    Defeat { cause: String, floor: u32 },
}

impl RunOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, RunOutcome::FullClear | RunOutcome::OtherVictory)
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::FullClear => write!(f, "full clear"),
            RunOutcome::OtherVictory => write!(f, "other victory"),
            RunOutcome::Defeat { cause, floor } => {
                write!(f, "defeat ({} on floor {})", cause, floor)
            }
        }
    }
}
