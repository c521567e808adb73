//! Candidate composition
//!
//! Builds one random candidate from filtered class pools: mandated minimums
//! first, the remainder from the union of pools, then a full shuffle.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{CryptoRng, Rng};
use zeroize::Zeroize;
use crate::charset::{self, CharacterClass};
use crate::config::GenerationConfig;

/// Filtered pools for every class of one configuration.
///
/// Disabled classes get an empty pool. An enabled class whose pool is empty
/// after filtering is inactive for the call.
#[derive(Debug, Clone, Default)]
pub struct ClassPools {
    pools: [Vec<char>; 4],
    union: Vec<char>,
}

impl ClassPools {
    /// Filter every enabled class's pool
    pub fn build(config: &GenerationConfig) -> Self {
        let mut pools: [Vec<char>; 4] = Default::default();
        let mut union = Vec::new();

        for class in config.enabled_classes() {
            let filtered: Vec<char> = charset::filter(config.pool(class), config).chars().collect();
            tracing::trace!(class = class.name(), size = filtered.len(), "filtered pool");
            for c in &filtered {
                if !union.contains(c) {
                    union.push(*c);
                }
            }
            pools[class.index()] = filtered;
        }

        Self { pools, union }
    }

    /// Filtered pool of a class
    pub fn get(&self, class: CharacterClass) -> &[char] {
        &self.pools[class.index()]
    }

    /// True if the class can contribute characters
    pub fn is_active(&self, class: CharacterClass) -> bool {
        !self.get(class).is_empty()
    }

    /// Active classes, in priority order
    pub fn active_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_active(*class))
    }

    /// Distinct characters across all active pools
    pub fn union(&self) -> &[char] {
        &self.union
    }

    /// Size of the combined alphabet
    pub fn union_size(&self) -> usize {
        self.union.len()
    }
}

/// Build one candidate password.
///
/// Only cryptographically secure generators are accepted. The output has
/// `config.effective_length()` characters whenever the active minimums fit
/// in that length and at least one pool is non-empty.
///
/// # Arguments
/// * `config` - Rules supplying the length and per-class minimums
/// * `pools` - Filtered pools built from the same configuration
/// * `rng` - Cryptographically secure random source
///
/// # Example
/// ```
/// use credgen::GenerationConfig;
/// use credgen::generator::{compose, ClassPools};
///
/// let config = GenerationConfig::with_length(12);
/// let pools = ClassPools::build(&config);
/// let password = compose(&config, &pools, &mut rand::rng());
/// assert_eq!(password.chars().count(), 12);
/// ```
pub fn compose<R>(config: &GenerationConfig, pools: &ClassPools, rng: &mut R) -> String
where
    R: Rng + CryptoRng + ?Sized,
{
    let length = config.effective_length();
    let mut chars: Vec<char> = Vec::with_capacity(length);

    for class in pools.active_classes() {
        let pool = pools.get(class);
        for _ in 0..config.rule(class).min_count {
            if let Some(c) = pool.choose(rng) {
                chars.push(*c);
            }
        }
    }

    let remaining = length.saturating_sub(chars.len());
    for _ in 0..remaining {
        if let Some(c) = pools.union().choose(rng) {
            chars.push(*c);
        }
    }

    chars.shuffle(rng);
    chars.truncate(length);

    let password = chars.iter().collect();
    chars.zeroize();
    password
}
