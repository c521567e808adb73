//! Password generation
//!
//! [`generate`] validates a configuration, then composes candidates until
//! one meets every class bound or the attempt budget runs out. Every
//! outcome is returned as a [`GenerationResult`]; no business outcome is an
//! error.

mod composer;
mod entropy;
mod validator;

pub use composer::{compose, ClassPools};
pub use entropy::{base_entropy, repetition_factor, score, sequential_penalty, MAX_SEQUENTIAL_PENALTY};
pub use validator::{distribution, satisfies, validate_feasible, Distribution, Feasibility};

use rand::{CryptoRng, Rng};
use serde::Serialize;
use zeroize::Zeroize;
use crate::config::GenerationConfig;
use crate::strength::{self, StrengthLevel};
use crate::DEFAULT_MAX_ATTEMPTS;

/// How a generation call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationOutcome {
    /// A candidate met every bound
    Satisfied,
    /// The attempt budget ran out; the password is a best effort
    Degraded,
    /// The configuration can never be satisfied; no password was produced
    Rejected,
}

/// Result of password generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    /// Generated password (empty when rejected)
    pub password: String,
    /// Strength level of `entropy`
    pub strength: StrengthLevel,
    /// Estimated entropy in bits
    pub entropy: f64,
    /// How the call ended
    pub outcome: GenerationOutcome,
    /// Human-readable findings, in the order they were found
    pub warnings: Vec<String>,
    /// Class counts of `password`
    pub distribution: Distribution,
}

impl GenerationResult {
    /// True only when every enabled class count is within its bounds
    pub fn satisfied_constraints(&self) -> bool {
        self.outcome == GenerationOutcome::Satisfied
    }

    /// Description of the strength level
    pub fn strength_description(&self) -> &'static str {
        strength::describe(self.strength)
    }

    fn rejected(warnings: Vec<String>) -> Self {
        Self {
            password: String::new(),
            strength: StrengthLevel::VeryWeak,
            entropy: 0.0,
            outcome: GenerationOutcome::Rejected,
            warnings,
            distribution: Distribution::default(),
        }
    }

    fn scored(
        password: String,
        pool_size: usize,
        outcome: GenerationOutcome,
        warnings: Vec<String>,
        distribution: Distribution,
    ) -> Self {
        let entropy = entropy::score(&password, pool_size);
        Self {
            password,
            strength: strength::classify(entropy),
            entropy,
            outcome,
            warnings,
            distribution,
        }
    }
}

/// Generate a password using the thread-local CSPRNG.
///
/// Validates the configuration first, then composes up to `max_attempts`
/// candidates. If none meets every class bound, one more candidate is
/// returned as a best effort with a warning.
///
/// # Arguments
/// * `config` - Rules to satisfy
/// * `max_attempts` - Candidates to try before falling back
///
/// # Returns
/// A [`GenerationResult`]; check `outcome` before using the password
///
/// # Example
/// ```
/// use credgen::{generate, ClassRule, GenerationConfig, GenerationOutcome};
///
/// let config = GenerationConfig {
///     length: 12,
///     digits: ClassRule::at_least(3),
///     ..Default::default()
/// };
/// let result = generate(&config, 100);
/// assert_eq!(result.outcome, GenerationOutcome::Satisfied);
/// assert_eq!(result.password.len(), 12);
///
/// // Minimums that cannot fit are rejected without any attempt
/// let config = GenerationConfig {
///     length: 4,
///     digits: ClassRule::at_least(5),
///     ..Default::default()
/// };
/// assert_eq!(generate(&config, 100).outcome, GenerationOutcome::Rejected);
/// ```
pub fn generate(config: &GenerationConfig, max_attempts: usize) -> GenerationResult {
    generate_with_rng(config, max_attempts, &mut rand::rng())
}

/// Generate a password with a caller-supplied CSPRNG
pub fn generate_with_rng<R>(config: &GenerationConfig, max_attempts: usize, rng: &mut R) -> GenerationResult
where
    R: Rng + CryptoRng + ?Sized,
{
    let pools = ClassPools::build(config);
    let feasibility = validator::check_feasible(config, &pools);
    if !feasibility.is_feasible() {
        tracing::warn!(reasons = ?feasibility.errors, "configuration rejected");
        return GenerationResult::rejected(feasibility.into_messages());
    }

    let mut warnings = feasibility.warnings;
    let pool_size = pools.union_size();

    for attempt in 1..=max_attempts {
        let mut candidate = compose(config, &pools, rng);
        let dist = distribution(&candidate, config);
        if validator::within_bounds(&dist, config, &pools) {
            tracing::debug!(attempt, pool_size, "constraints satisfied");
            return GenerationResult::scored(candidate, pool_size, GenerationOutcome::Satisfied, warnings, dist);
        }
        candidate.zeroize();
    }

    tracing::warn!(max_attempts, "attempt budget exhausted, returning best effort");
    warnings.push(format!("Could not satisfy all constraints after {max_attempts} attempts"));
    let candidate = compose(config, &pools, rng);
    let dist = distribution(&candidate, config);
    GenerationResult::scored(candidate, pool_size, GenerationOutcome::Degraded, warnings, dist)
}

/// Generator bound to a working configuration
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator {
    config: GenerationConfig,
}

impl PasswordGenerator {
    /// Bind a configuration. Lowercase is enabled if no class is.
    pub fn new(mut config: GenerationConfig) -> Self {
        if config.ensure_class_enabled() {
            tracing::debug!("no character class enabled, defaulting to lowercase");
        }
        Self { config }
    }

    /// Currently bound configuration
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Replace the bound configuration for subsequent calls
    pub fn update_config(&mut self, config: GenerationConfig) {
        *self = Self::new(config);
    }

    /// Generate with the bound configuration
    pub fn generate(&self, max_attempts: usize) -> GenerationResult {
        generate(&self.config, max_attempts)
    }

    /// Generate with the bound configuration and the default attempt budget
    pub fn generate_default(&self) -> GenerationResult {
        self.generate(DEFAULT_MAX_ATTEMPTS)
    }

    /// Generate with the bound configuration and a caller-supplied CSPRNG
    pub fn generate_with_rng<R>(&self, max_attempts: usize, rng: &mut R) -> GenerationResult
    where
        R: Rng + CryptoRng + ?Sized,
    {
        generate_with_rng(&self.config, max_attempts, rng)
    }
}
