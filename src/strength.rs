//! Strength levels derived from entropy

use std::fmt;
use serde::{Deserialize, Serialize};

/// Ordinal strength level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak = 0,
    Weak = 1,
    Fair = 2,
    Good = 3,
    Strong = 4,
    Excellent = 5,
}

impl StrengthLevel {
    /// All levels, weakest first
    pub const ALL: [StrengthLevel; 6] = [
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Fair,
        StrengthLevel::Good,
        StrengthLevel::Strong,
        StrengthLevel::Excellent,
    ];
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(describe(*self))
    }
}

/// Map an entropy estimate (bits) to a strength level.
///
/// Thresholds: 25, 35, 50, 70, 90. Each threshold belongs to the level above it.
pub fn classify(entropy_bits: f64) -> StrengthLevel {
    if entropy_bits < 25.0 {
        StrengthLevel::VeryWeak
    } else if entropy_bits < 35.0 {
        StrengthLevel::Weak
    } else if entropy_bits < 50.0 {
        StrengthLevel::Fair
    } else if entropy_bits < 70.0 {
        StrengthLevel::Good
    } else if entropy_bits < 90.0 {
        StrengthLevel::Strong
    } else {
        StrengthLevel::Excellent
    }
}

/// Human-readable description
pub fn describe(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::VeryWeak => "Very Weak",
        StrengthLevel::Weak => "Weak",
        StrengthLevel::Fair => "Fair",
        StrengthLevel::Good => "Good",
        StrengthLevel::Strong => "Strong",
        StrengthLevel::Excellent => "Excellent",
    }
}

/// Display colour hint (hex RGB). Rendering is up to the caller.
pub fn color_hint(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::VeryWeak => "#dc3545",
        StrengthLevel::Weak => "#fd7e14",
        StrengthLevel::Fair => "#ffc107",
        StrengthLevel::Good => "#17a2b8",
        StrengthLevel::Strong => "#28a745",
        StrengthLevel::Excellent => "#6f42c1",
    }
}
