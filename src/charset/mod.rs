//! Character classes and their pools
//!
//! Every password character belongs to one of four classes. Three of them
//! have fixed pools; the special pool is taken from the configuration.

mod filter;

pub use filter::{filter, AMBIGUOUS, SIMILAR_GROUPS};

use std::fmt;
use serde::{Deserialize, Serialize};

/// Uppercase letters (A-Z)
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase letters (a-z)
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Decimal digits (0-9)
pub const DIGITS: &str = "0123456789";
/// Default special symbol pool
pub const SPECIAL_DEFAULT: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A character class with independent inclusion rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// All classes, in classification priority order
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// Position of the class in [`CharacterClass::ALL`]
    pub fn index(self) -> usize {
        match self {
            CharacterClass::Uppercase => 0,
            CharacterClass::Lowercase => 1,
            CharacterClass::Digit => 2,
            CharacterClass::Special => 3,
        }
    }

    /// Canonical pool. For `Special` this is the default set, which a
    /// configuration may replace.
    pub fn canonical_pool(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL_DEFAULT,
        }
    }

    /// Short lowercase name used in messages
    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Special => "special",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Find the class of a character.
///
/// Letters and digits are matched first, so a special pool that happens to
/// contain a letter never steals it from its letter class. Returns `None`
/// for characters outside every pool.
pub fn classify_char(c: char, special_pool: &str) -> Option<CharacterClass> {
    if c.is_ascii_uppercase() {
        Some(CharacterClass::Uppercase)
    } else if c.is_ascii_lowercase() {
        Some(CharacterClass::Lowercase)
    } else if c.is_ascii_digit() {
        Some(CharacterClass::Digit)
    } else if special_pool.contains(c) {
        Some(CharacterClass::Special)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_pools() {
        assert_eq!(CharacterClass::Uppercase.canonical_pool().len(), 26);
        assert_eq!(CharacterClass::Lowercase.canonical_pool().len(), 26);
        assert_eq!(CharacterClass::Digit.canonical_pool().len(), 10);
        assert_eq!(CharacterClass::Special.canonical_pool(), SPECIAL_DEFAULT);
    }

    #[test]
    fn test_index_matches_all() {
        for (i, class) in CharacterClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }

    #[test]
    fn test_classify_char() {
        assert_eq!(classify_char('Q', SPECIAL_DEFAULT), Some(CharacterClass::Uppercase));
        assert_eq!(classify_char('q', SPECIAL_DEFAULT), Some(CharacterClass::Lowercase));
        assert_eq!(classify_char('7', SPECIAL_DEFAULT), Some(CharacterClass::Digit));
        assert_eq!(classify_char('#', SPECIAL_DEFAULT), Some(CharacterClass::Special));
        assert_eq!(classify_char('~', SPECIAL_DEFAULT), None);
        assert_eq!(classify_char('~', "~"), Some(CharacterClass::Special));
        assert_eq!(classify_char('a', "abc"), Some(CharacterClass::Lowercase));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CharacterClass::Digit).unwrap();
        assert_eq!(json, "\"digit\"");
        let class: CharacterClass = serde_json::from_str("\"special\"").unwrap();
        assert_eq!(class, CharacterClass::Special);
    }
}
