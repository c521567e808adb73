//! Feasibility pre-check and distribution post-check

use serde::Serialize;
use crate::charset::{self, CharacterClass};
use crate::config::GenerationConfig;
use super::composer::ClassPools;

/// Per-class character counts of a password.
///
/// `other` counts characters outside every class pool, so the counts always
/// sum to the password length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    counts: [usize; 4],
    other: usize,
}

impl Distribution {
    /// Count of one class
    pub fn get(&self, class: CharacterClass) -> usize {
        self.counts[class.index()]
    }

    /// Characters that belong to no class
    pub fn other(&self) -> usize {
        self.other
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.other
    }

    /// `(class, count)` pairs in priority order
    pub fn iter(&self) -> impl Iterator<Item = (CharacterClass, usize)> + '_ {
        CharacterClass::ALL
            .into_iter()
            .map(|class| (class, self.get(class)))
    }
}

/// Outcome of the pre-check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feasibility {
    /// Reasons the configuration cannot be satisfied
    pub errors: Vec<String>,
    /// Non-fatal findings
    pub warnings: Vec<String>,
}

impl Feasibility {
    /// True if generation may proceed
    pub fn is_feasible(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors followed by warnings
    pub fn into_messages(self) -> Vec<String> {
        let mut messages = self.errors;
        messages.extend(self.warnings);
        messages
    }
}

/// Check a configuration before any attempt is made
pub fn validate_feasible(config: &GenerationConfig) -> Feasibility {
    check_feasible(config, &ClassPools::build(config))
}

pub(crate) fn check_feasible(config: &GenerationConfig, pools: &ClassPools) -> Feasibility {
    let mut result = Feasibility::default();

    if config.enabled_classes().next().is_none() {
        result.errors.push("At least one character type must be enabled".to_string());
        return result;
    }

    for class in config.enabled_classes() {
        if !pools.is_active(class) {
            result.warnings.push(format!("No {class} characters available after filtering"));
        }
    }

    let special = pools.get(CharacterClass::Special);
    if !special.is_empty()
        && special
            .iter()
            .all(|c| charset::classify_char(*c, &config.special_chars) != Some(CharacterClass::Special))
    {
        result
            .warnings
            .push("Special pool has no characters that count as special".to_string());
    }

    if pools.union_size() == 0 {
        result.errors.push("No characters available after filtering".to_string());
    }

    for class in config.enabled_classes() {
        let rule = config.rule(class);
        if let Some(max) = rule.max_count.filter(|max| rule.min_count > *max) {
            result.errors.push(format!(
                "Minimum {class} ({}) exceeds maximum {class} ({max})",
                rule.min_count
            ));
        }
    }

    let length = config.effective_length();
    let min_required = pools
        .active_classes()
        .try_fold(0usize, |acc, class| acc.checked_add(config.rule(class).min_count));
    match min_required {
        Some(min_required) if min_required <= length => {}
        Some(min_required) => result.errors.push(format!(
            "Minimum requirements ({min_required}) exceed password length ({length})"
        )),
        None => result.errors.push(format!(
            "Minimum requirements exceed password length ({length})"
        )),
    }

    // Any unbounded class, or maxima too large to add up, leaves the length reachable
    let max_allowed = pools
        .active_classes()
        .try_fold(0usize, |acc, class| acc.checked_add(config.rule(class).max_count?));
    if let Some(max_allowed) = max_allowed.filter(|max| *max < length && pools.union_size() > 0) {
        result.errors.push(format!(
            "Maximum counts ({max_allowed}) cannot fill password length ({length})"
        ));
    }

    result
}

/// Count the characters of each class in a password
pub fn distribution(password: &str, config: &GenerationConfig) -> Distribution {
    let mut result = Distribution::default();
    for c in password.chars() {
        match charset::classify_char(c, &config.special_chars) {
            Some(class) => result.counts[class.index()] += 1,
            None => result.other += 1,
        }
    }
    result
}

/// Check a password's class counts against the configured bounds
pub fn satisfies(password: &str, config: &GenerationConfig) -> bool {
    within_bounds(&distribution(password, config), config, &ClassPools::build(config))
}

pub(crate) fn within_bounds(
    distribution: &Distribution,
    config: &GenerationConfig,
    pools: &ClassPools,
) -> bool {
    pools
        .active_classes()
        .all(|class| config.rule(class).accepts(distribution.get(class)))
}
