//! Statistics calculation helpers.
//!
//! Rates are expressed in percent and are zero when there is nothing to
//! divide by.

use crate::models::{Act, ActBuckets};

/// Percentage of `count` over `total`, 0.0 when `total` is zero.
pub fn calculate_rate(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Arithmetic mean, 0.0 for an empty slice.
pub fn calculate_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Mean floor, 0.0 for an empty slice.
pub fn calculate_mean_floor(floors: &[u32]) -> f64 {
    if floors.is_empty() {
        0.0
    } else {
        floors.iter().map(|&f| f as f64).sum::<f64>() / floors.len() as f64
    }
}

/// Count defeat floors per act.
pub fn bucket_defeat_floors(floors: &[u32]) -> ActBuckets {
    let mut buckets = ActBuckets::default();
    for &floor in floors {
        buckets.add(Act::from_floor(floor));
    }
    buckets
}
