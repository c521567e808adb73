//! Named configuration bundles

use std::fmt;
use std::str::FromStr;
use crate::config::{ClassRule, GenerationConfig};
use crate::error::{GeneratorError, Result};

/// Restricted special pool accepted by most web forms
pub const WEB_SAFE_SPECIAL: &str = "!@#$%&*";

/// Built-in presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    HighSecurity,
    Memorable,
    Pin,
    WebSafe,
    MaximumSecurity,
}

impl Preset {
    /// Every preset, in display order
    pub const ALL: [Preset; 5] = [
        Preset::HighSecurity,
        Preset::Memorable,
        Preset::Pin,
        Preset::WebSafe,
        Preset::MaximumSecurity,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Preset::HighSecurity => "High Security",
            Preset::Memorable => "Memorable",
            Preset::Pin => "PIN",
            Preset::WebSafe => "Web Safe",
            Preset::MaximumSecurity => "Maximum Security",
        }
    }

    /// Look up a preset by display name, ignoring case
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GeneratorError::UnknownPreset(name.to_string()))
    }

    /// Fresh copy of the preset's configuration.
    ///
    /// The caller replaces its working configuration with this value.
    pub fn config(self) -> GenerationConfig {
        match self {
            Preset::HighSecurity => GenerationConfig {
                length: 20,
                uppercase: ClassRule::at_least(2),
                lowercase: ClassRule::at_least(2),
                digits: ClassRule::at_least(2),
                special: ClassRule::at_least(2),
                exclude_ambiguous: true,
                ..GenerationConfig::default()
            },
            Preset::Memorable => GenerationConfig {
                length: 12,
                uppercase: ClassRule::at_least(1),
                lowercase: ClassRule::at_least(1),
                digits: ClassRule::at_least(1),
                special: ClassRule::disabled(),
                ..GenerationConfig::default()
            },
            Preset::Pin => GenerationConfig {
                length: 6,
                uppercase: ClassRule::disabled(),
                lowercase: ClassRule::disabled(),
                digits: ClassRule::default(),
                special: ClassRule::disabled(),
                ..GenerationConfig::default()
            },
            Preset::WebSafe => GenerationConfig {
                length: 16,
                uppercase: ClassRule::at_least(1),
                lowercase: ClassRule::at_least(1),
                digits: ClassRule::at_least(1),
                special: ClassRule::at_least(1),
                exclude_ambiguous: true,
                special_chars: WEB_SAFE_SPECIAL.to_string(),
                ..GenerationConfig::default()
            },
            Preset::MaximumSecurity => GenerationConfig {
                length: 32,
                uppercase: ClassRule::at_least(4),
                lowercase: ClassRule::at_least(4),
                digits: ClassRule::at_least(4),
                special: ClassRule::at_least(4),
                exclude_ambiguous: true,
                exclude_similar: true,
                ..GenerationConfig::default()
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
