//! # Spire Stats
//!
//! Clear-rate statistics over a local Slay the Spire run history.
//!
//! ## Architecture
//!
//! - **models**: Run records, run outcomes and derived statistics
//! - **storage**: Run file discovery and loading
//! - **classify**: Ascension filtering and full-clear / victory / defeat classification
//! - **aggregate**: Per-character folding of run files into statistics
//! - **calculate**: Rate, mean and act bucketing helpers
//! - **report**: Clear-rate and detailed text reports
//! - **runner**: Sequential execution of several reports
//! - **config**: Configuration loading and validation

pub mod aggregate;
pub mod calculate;
pub mod classify;
pub mod config;
pub mod models;
pub mod report;
pub mod runner;
pub mod storage;

pub use models::*;
