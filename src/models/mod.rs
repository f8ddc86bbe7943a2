//! Core data models for run analysis.

mod outcome;
mod run;
mod stats;

pub use outcome::*;
pub use run::*;
pub use stats::*;
