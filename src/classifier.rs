use crate::model::Category;
use tracing::debug;

/// Accepted surface forms per category.
pub const KEYWORD_ALIASES: [(Category, &[&str]); 3] = [
    (Category::Beach, &["beach", "beaches"]),
    (Category::Temple, &["temple", "temples"]),
    (Category::Country, &["country", "countries"]),
];

type Strategy = fn(&str) -> Option<Category>;

// Order matters: exact aliases win over the suffix fallback.
const STRATEGIES: [(&str, Strategy); 2] = [
    ("alias", match_alias),
    ("suffix", match_stripped_suffix),
];

/// Maps free text to a category, `None` when unrecognized.
pub fn classify(input: &str) -> Option<Category> {
    let key = normalize(input);
    if key.is_empty() {
        return None;
    }

    for (label, strategy) in STRATEGIES {
        if let Some(category) = strategy(&key) {
            debug!("'{}' resolved to {} via {} match", key, category, label);
            return Some(category);
        }
    }

    debug!("'{}' did not match any category", key);
    None
}

pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

fn match_alias(key: &str) -> Option<Category> {
    KEYWORD_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&key))
        .map(|(category, _)| *category)
}

fn match_stripped_suffix(key: &str) -> Option<Category> {
    let root = key
        .strip_suffix("es")
        .or_else(|| key.strip_suffix('s'))
        .unwrap_or(key);

    Category::ALL.into_iter().find(|c| c.name() == root)
}
