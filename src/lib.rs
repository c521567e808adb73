//! # credgen
//!
//! Credential generation engine for a password manager.
//!
//! ## Features
//!
//! - Four character classes with per-class minimum and maximum counts
//! - Ambiguous, similar-looking and custom character exclusion
//! - Retry loop with a best-effort fallback, reported as data
//! - Entropy estimate with repetition and sequence penalties
//! - Built-in presets (High Security, Memorable, PIN, Web Safe, Maximum Security)
//!
//! ## Example
//!
//! ```
//! use credgen::{generate, Preset, DEFAULT_MAX_ATTEMPTS};
//!
//! let config = Preset::HighSecurity.config();
//! let result = generate(&config, DEFAULT_MAX_ATTEMPTS);
//! assert!(result.satisfied_constraints());
//! assert_eq!(result.password.len(), 20);
//! println!("{} ({:.1} bits)", result.strength_description(), result.entropy);
//! ```

pub mod charset;
pub mod config;
pub mod generator;
pub mod presets;
pub mod strength;
pub mod error;

// Re-export main types
pub use error::{GeneratorError, Result};
pub use charset::CharacterClass;
pub use config::{ClassRule, GenerationConfig};
pub use generator::{generate, generate_with_rng, Distribution, GenerationOutcome, GenerationResult, PasswordGenerator};
pub use presets::Preset;
pub use strength::{classify, color_hint, describe, StrengthLevel};

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 4;

/// Maximum password length
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Default password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Default number of attempts before falling back to a best-effort password
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;
