//! core::curve
//!
//! The experience curve: how many bytes a level costs.
//!
//! Advancing from level `L` to `L + 1` costs `5000 * 1.2^(L - 1)` bytes. The
//! cumulative cost of reaching level `k + 1` is
//!
//! ```text
//! cum_0 = 0
//! cum_k = cum_(k-1) + 5000 * 1.2^(k-1)
//! ```
//!
//! and `level(bytes) = 1 + max { k : cum_k <= bytes }`.
//!
//! # Thresholds
//!
//! The cumulative sums are materialized once into an ascending table of
//! integer thresholds (`ceil(cum_k)`), covering every threshold representable
//! as a `u64`. Byte totals are integers, so `cum_k <= bytes` holds exactly
//! when `ceil(cum_k) <= bytes`. Lookups are a binary search over that table,
//! so [`level_for`] and [`next_level_exp`] always agree on the boundary.
//!
//! # Example
//!
//! ```
//! use git_level::core::curve::{level_for, next_level_exp};
//!
//! assert_eq!(level_for(0), 1);
//! assert_eq!(next_level_exp(0), 5000);
//! assert_eq!(level_for(5000), 2);
//! assert_eq!(next_level_exp(5000), 6000);
//! ```

use std::sync::OnceLock;

/// Level every user starts at.
pub const INIT_LEVEL: u32 = 1;

/// Bytes needed to go from level 1 to level 2.
pub const BASE_EXP: u64 = 5000;

/// Multiplier applied to the per-level cost after each level.
pub const GROWTH_RATE: f64 = 1.2;

/// Accumulated float error below this is treated as an exact integer.
const SNAP_EPSILON: f64 = 1e-6;

/// Ascending cumulative thresholds; entry `k - 1` is `ceil(cum_k)`.
fn thresholds() -> &'static [u64] {
    static THRESHOLDS: OnceLock<Vec<u64>> = OnceLock::new();
    THRESHOLDS.get_or_init(build_thresholds)
}

fn build_thresholds() -> Vec<u64> {
    let limit = u64::MAX as f64;
    let mut table = Vec::new();
    let mut accumulated = 0.0_f64;
    let mut required = BASE_EXP as f64;

    loop {
        accumulated += required;
        if accumulated >= limit {
            break;
        }
        table.push(to_threshold(accumulated));
        required *= GROWTH_RATE;
    }

    table
}

fn to_threshold(accumulated: f64) -> u64 {
    let nearest = accumulated.round();
    if (accumulated - nearest).abs() < SNAP_EPSILON {
        nearest as u64
    } else {
        accumulated.ceil() as u64
    }
}

/// Number of cumulative thresholds at or below `bytes`.
fn thresholds_crossed(bytes: u64) -> usize {
    thresholds().partition_point(|&threshold| threshold <= bytes)
}

/// Level reached with `bytes` of experience.
pub fn level_for(bytes: u64) -> u32 {
    INIT_LEVEL + thresholds_crossed(bytes) as u32
}

/// Bytes remaining until the next level.
///
/// Returns `u64::MAX - bytes` when no representable threshold lies above
/// `bytes`.
pub fn next_level_exp(bytes: u64) -> u64 {
    match thresholds().get(thresholds_crossed(bytes)) {
        Some(threshold) => threshold - bytes,
        None => u64::MAX - bytes,
    }
}

/// Cumulative bytes needed to reach `level` (`cum_(level - 1)`).
///
/// Level 1 (and 0) starts at zero bytes. Levels past the table saturate at
/// `u64::MAX`.
pub fn level_floor(level: u32) -> u64 {
    if level <= INIT_LEVEL {
        return 0;
    }
    let index = (level - INIT_LEVEL - 1) as usize;
    thresholds().get(index).copied().unwrap_or(u64::MAX)
}
