//! Generation configuration
//!
//! A [`GenerationConfig`] is owned and edited by the caller. The engine only
//! reads it, once per call.

use serde::{Deserialize, Serialize};
use crate::charset::{self, CharacterClass};
use crate::error::{GeneratorError, Result};
use crate::{DEFAULT_PASSWORD_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};

/// Rules for one character class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassRule {
    /// Include this class in generated passwords
    pub enabled: bool,
    /// Minimum number of characters from this class
    pub min_count: usize,
    /// Maximum number of characters from this class (`None` = unbounded)
    pub max_count: Option<usize>,
}

impl Default for ClassRule {
    fn default() -> Self {
        Self {
            enabled: true,
            min_count: 0,
            max_count: None,
        }
    }
}

impl ClassRule {
    /// Enabled class with a minimum count
    pub fn at_least(min_count: usize) -> Self {
        Self {
            enabled: true,
            min_count,
            max_count: None,
        }
    }

    /// Disabled class
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Check whether a count falls within `[min, max-or-unbounded]`
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min_count && self.max_count.is_none_or(|max| count <= max)
    }
}

/// Configuration for password generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Requested password length
    pub length: usize,
    /// Uppercase letters (A-Z)
    pub uppercase: ClassRule,
    /// Lowercase letters (a-z)
    pub lowercase: ClassRule,
    /// Digits (0-9)
    pub digits: ClassRule,
    /// Special symbols, drawn from `special_chars`
    pub special: ClassRule,
    /// Remove `0 O o I l 1`
    pub exclude_ambiguous: bool,
    /// Collapse each confusable group to one member
    pub exclude_similar: bool,
    /// Characters never to use
    pub custom_excluded: String,
    /// Pool for the special class
    pub special_chars: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            uppercase: ClassRule::default(),
            lowercase: ClassRule::default(),
            digits: ClassRule::default(),
            special: ClassRule::default(),
            exclude_ambiguous: false,
            exclude_similar: false,
            custom_excluded: String::new(),
            special_chars: charset::SPECIAL_DEFAULT.to_string(),
        }
    }
}

impl GenerationConfig {
    /// Default configuration with the given length (clamped)
    pub fn with_length(length: usize) -> Self {
        let mut config = Self::default();
        config.set_length(length);
        config
    }

    /// Parse a configuration from JSON. Missing fields take their defaults
    /// and the length is clamped to the allowed range.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.set_length(config.length);
        config.check_values()?;
        Ok(config)
    }

    /// Encode the configuration as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Set the length, clamped to `[PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH]`
    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH);
    }

    /// Length actually used for generation
    pub fn effective_length(&self) -> usize {
        self.length.clamp(PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH)
    }

    /// Rules for a class
    pub fn rule(&self, class: CharacterClass) -> &ClassRule {
        match class {
            CharacterClass::Uppercase => &self.uppercase,
            CharacterClass::Lowercase => &self.lowercase,
            CharacterClass::Digit => &self.digits,
            CharacterClass::Special => &self.special,
        }
    }

    /// Mutable rules for a class
    pub fn rule_mut(&mut self, class: CharacterClass) -> &mut ClassRule {
        match class {
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Digit => &mut self.digits,
            CharacterClass::Special => &mut self.special,
        }
    }

    /// Unfiltered pool for a class
    pub fn pool(&self, class: CharacterClass) -> &str {
        match class {
            CharacterClass::Special => self.special_chars.as_str(),
            other => other.canonical_pool(),
        }
    }

    /// Enabled classes, in priority order
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.rule(*class).enabled)
    }

    /// Enable lowercase when no class is enabled.
    ///
    /// Returns true if the configuration was changed.
    pub fn ensure_class_enabled(&mut self) -> bool {
        if self.enabled_classes().next().is_some() {
            return false;
        }
        self.lowercase.enabled = true;
        true
    }

    /// Reject values that are malformed rather than merely infeasible
    pub fn check_values(&self) -> Result<()> {
        if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&self.length) {
            return Err(GeneratorError::InvalidConfig(format!(
                "length {} outside {}..={}",
                self.length, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
            )));
        }
        if self.special_chars.chars().any(char::is_control) {
            return Err(GeneratorError::InvalidConfig(
                "special_chars contains control characters".to_string(),
            ));
        }
        Ok(())
    }
}
