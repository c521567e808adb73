//! Integration tests for credgen
//!
//! These exercise the public API only, with the default thread-local CSPRNG.

use std::collections::HashSet;
use credgen::charset::AMBIGUOUS;
use credgen::generator::base_entropy;
use credgen::{
    generate, CharacterClass, ClassRule, GenerationConfig, GenerationOutcome, PasswordGenerator,
    Preset, StrengthLevel, DEFAULT_MAX_ATTEMPTS,
};

fn digits_only(length: usize) -> GenerationConfig {
    GenerationConfig {
        length,
        uppercase: ClassRule::disabled(),
        lowercase: ClassRule::disabled(),
        digits: ClassRule::default(),
        special: ClassRule::disabled(),
        ..Default::default()
    }
}

#[test]
fn test_feasible_configs_keep_length() {
    for length in [4, 5, 8, 16, 31, 64, 128] {
        let config = GenerationConfig::with_length(length);
        let result = generate(&config, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(result.password.chars().count(), length);
    }
}

#[test]
fn test_satisfied_results_respect_bounds() {
    let config = GenerationConfig {
        length: 24,
        uppercase: ClassRule { enabled: true, min_count: 2, max_count: Some(6) },
        lowercase: ClassRule::at_least(3),
        digits: ClassRule { enabled: true, min_count: 1, max_count: Some(8) },
        special: ClassRule { enabled: true, min_count: 1, max_count: Some(6) },
        ..Default::default()
    };

    for _ in 0..30 {
        let result = generate(&config, DEFAULT_MAX_ATTEMPTS);
        if !result.satisfied_constraints() {
            continue;
        }
        for class in CharacterClass::ALL {
            let count = result.distribution.get(class);
            assert!(config.rule(class).accepts(count), "{class}: {count}");
        }
        assert_eq!(result.distribution.total(), result.password.chars().count());
    }
}

#[test]
fn test_passwords_are_distinct() {
    let config = GenerationConfig::default();
    let passwords: HashSet<String> = (0..20)
        .map(|_| generate(&config, DEFAULT_MAX_ATTEMPTS).password)
        .collect();
    assert_eq!(passwords.len(), 20);
}

#[test]
fn test_special_disabled_never_appears() {
    let config = GenerationConfig {
        special: ClassRule::disabled(),
        ..Default::default()
    };
    for _ in 0..50 {
        let result = generate(&config, DEFAULT_MAX_ATTEMPTS);
        assert!(result.password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(result.distribution.get(CharacterClass::Special), 0);
    }
}

#[test]
fn test_exclude_ambiguous_never_appears() {
    let config = GenerationConfig {
        length: 64,
        exclude_ambiguous: true,
        ..Default::default()
    };
    for _ in 0..50 {
        let result = generate(&config, DEFAULT_MAX_ATTEMPTS);
        assert!(!result.password.chars().any(|c| AMBIGUOUS.contains(c)));
    }
}

#[test]
fn test_custom_excluded_never_appears() {
    let config = GenerationConfig {
        length: 64,
        custom_excluded: "aeiouAEIOU0!".to_string(),
        ..Default::default()
    };
    for _ in 0..20 {
        let result = generate(&config, DEFAULT_MAX_ATTEMPTS);
        assert!(!result.password.chars().any(|c| "aeiouAEIOU0!".contains(c)));
    }
}

#[test]
fn test_infeasible_config_rejected_without_attempts() {
    let config = GenerationConfig {
        length: 5,
        uppercase: ClassRule::at_least(3),
        lowercase: ClassRule::at_least(3),
        ..Default::default()
    };
    let result = generate(&config, DEFAULT_MAX_ATTEMPTS);
    assert_eq!(result.outcome, GenerationOutcome::Rejected);
    assert!(!result.satisfied_constraints());
    assert!(result.password.is_empty());
    // A budget-exhaustion warning would mean attempts were consumed
    assert!(result.warnings.iter().all(|w| !w.contains("attempts")));
}

#[test]
fn test_digits_only_password() {
    let result = generate(&digits_only(6), DEFAULT_MAX_ATTEMPTS);
    assert_eq!(result.password.len(), 6);
    assert!(result.password.chars().all(|c| c.is_ascii_digit()));
    assert!(matches!(result.strength, StrengthLevel::VeryWeak | StrengthLevel::Weak));
}

#[test]
fn test_pin_preset() {
    let config = Preset::Pin.config();
    for _ in 0..20 {
        let result = generate(&config, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(result.password.len(), 6);
        assert!(result.password.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_high_security_preset() {
    let config = Preset::HighSecurity.config();
    for _ in 0..20 {
        let result = generate(&config, DEFAULT_MAX_ATTEMPTS);
        assert!(result.satisfied_constraints());
        let counts: Vec<usize> = CharacterClass::ALL
            .iter()
            .map(|class| result.distribution.get(*class))
            .collect();
        assert!(counts.iter().all(|count| *count >= 2), "{counts:?}");
        assert_eq!(counts.iter().sum::<usize>(), 20);
        assert!(!result.password.chars().any(|c| AMBIGUOUS.contains(c)));
    }
}

#[test]
fn test_every_preset_generates() {
    for preset in Preset::ALL {
        let config = preset.config();
        let result = generate(&config, DEFAULT_MAX_ATTEMPTS);
        assert!(result.satisfied_constraints(), "{preset}: {:?}", result.warnings);
        assert_eq!(result.password.chars().count(), config.length, "{preset}");
    }
}

#[test]
fn test_web_safe_uses_restricted_specials() {
    let config = Preset::WebSafe.config();
    for _ in 0..20 {
        let result = generate(&config, DEFAULT_MAX_ATTEMPTS);
        assert!(result
            .password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "!@#$%&*".contains(c)));
    }
}

#[test]
fn test_base_entropy_monotonic_in_length() {
    for pool_size in [10, 26, 52, 62, 88] {
        let entropies: Vec<f64> = (4..=128).map(|len| base_entropy(len, pool_size)).collect();
        assert!(entropies.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_config_json_drives_generator() {
    let config = GenerationConfig::from_json(
        r#"{"length": 12, "special": {"enabled": false}, "digits": {"min_count": 4}}"#,
    )
    .unwrap();
    let mut generator = PasswordGenerator::new(config);
    let result = generator.generate(DEFAULT_MAX_ATTEMPTS);
    assert!(result.satisfied_constraints());
    assert_eq!(result.password.len(), 12);
    assert!(result.distribution.get(CharacterClass::Digit) >= 4);

    generator.update_config(Preset::Pin.config());
    assert_eq!(generator.generate(DEFAULT_MAX_ATTEMPTS).password.len(), 6);
}
