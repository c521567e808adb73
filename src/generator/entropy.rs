//! Entropy estimation
//!
//! The base figure assumes uniform selection over the whole usable
//! alphabet. Two penalties then scale it down: one for repeated characters,
//! one for ascending or descending runs of consecutive code points.

use std::collections::HashSet;

/// Largest fraction the sequential-run penalty can remove
pub const MAX_SEQUENTIAL_PENALTY: f64 = 0.5;

/// `length * log2(pool_size)`, or 0 for an empty pool
pub fn base_entropy(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Distinct characters divided by length (1.0 for an empty password)
pub fn repetition_factor(password: &str) -> f64 {
    let length = password.chars().count();
    if length == 0 {
        return 1.0;
    }
    let distinct: HashSet<char> = password.chars().collect();
    distinct.len() as f64 / length as f64
}

/// Fraction of 3-character windows that form a strict run, capped at
/// [`MAX_SEQUENTIAL_PENALTY`]
pub fn sequential_penalty(password: &str) -> f64 {
    let points: Vec<u32> = password.chars().map(u32::from).collect();
    if points.len() < 3 {
        return 0.0;
    }

    let runs = points
        .windows(3)
        .filter(|w| {
            let ascending = w[1] == w[0] + 1 && w[2] == w[1] + 1;
            let descending = w[1] + 1 == w[0] && w[2] + 1 == w[1];
            ascending || descending
        })
        .count();

    let windows = points.len() - 2;
    (runs as f64 / windows as f64).min(MAX_SEQUENTIAL_PENALTY)
}

/// Estimate the entropy of a password in bits. Never negative.
pub fn score(password: &str, usable_pool_size: usize) -> f64 {
    let length = password.chars().count();
    if length == 0 {
        return 0.0;
    }

    let mut entropy = base_entropy(length, usable_pool_size);
    entropy *= repetition_factor(password);
    entropy *= 1.0 - sequential_penalty(password);
    entropy.max(0.0)
}
