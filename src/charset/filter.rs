//! Exclusion filtering for a single class pool

use crate::config::GenerationConfig;

/// Characters removed by `exclude_ambiguous`
pub const AMBIGUOUS: &str = "0OoIl1";

/// Confusable groups. Under `exclude_similar` each group present in a pool
/// is reduced to its first member (in table order) that the pool contains.
pub const SIMILAR_GROUPS: &[&str] = &["il1|", "O0o", "5S$", "G6", "8B", "2Z", "vw", "mn"];

/// Derive the effective pool for one class.
///
/// Steps run in a fixed order: ambiguous removal, similar-group collapse,
/// custom exclusions. The result may be empty.
pub fn filter(pool: &str, config: &GenerationConfig) -> String {
    let mut filtered: String = if config.exclude_ambiguous {
        pool.chars().filter(|c| !AMBIGUOUS.contains(*c)).collect()
    } else {
        pool.to_string()
    };

    if config.exclude_similar {
        filtered = collapse_similar(&filtered);
    }

    if !config.custom_excluded.is_empty() {
        filtered.retain(|c| !config.custom_excluded.contains(c));
    }

    filtered
}

fn collapse_similar(pool: &str) -> String {
    let representatives: Vec<Option<char>> = SIMILAR_GROUPS
        .iter()
        .map(|group| group.chars().find(|c| pool.contains(*c)))
        .collect();

    pool.chars()
        .filter(|c| {
            SIMILAR_GROUPS
                .iter()
                .zip(&representatives)
                .all(|(group, rep)| !group.contains(*c) || *rep == Some(*c))
        })
        .collect()
}
