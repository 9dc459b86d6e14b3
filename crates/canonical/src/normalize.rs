use std::borrow::Cow;
use std::collections::BTreeSet;

use unicode_normalization::UnicodeNormalization;

use crate::config::CanonicalizeConfig;
use crate::whitespace::collapse_whitespace;

/// A deduplicated set of normalized ingredient names.
///
/// Ordered so that anything derived from it (expansions, logs, serialized
/// responses) is stable across runs.
pub type IngredientSet = BTreeSet<String>;

/// Normalize a single ingredient name into a matching key.
///
/// ```rust
/// use canonical::{normalize_name, CanonicalizeConfig};
///
/// let cfg = CanonicalizeConfig::default();
/// assert_eq!(normalize_name("  Chicken Breast ", &cfg), "chicken breast");
/// ```
pub fn normalize_name(name: &str, cfg: &CanonicalizeConfig) -> String {
    let text: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(name.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(name)
    };

    let text: Cow<str> = if cfg.collapse_whitespace {
        Cow::Owned(collapse_whitespace(&text))
    } else if cfg.trim {
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
        }
    } else {
        text
    };

    if cfg.lowercase {
        text.to_lowercase()
    } else {
        text.into_owned()
    }
}

/// Normalize a list of ingredient names into a deduplicated set.
///
/// Empty input yields an empty set; there are no error conditions.
///
/// ```rust
/// use canonical::{normalize_names, CanonicalizeConfig};
///
/// let set = normalize_names(["Garlic", " garlic ", "Basil"], &CanonicalizeConfig::default());
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("garlic"));
/// ```
pub fn normalize_names<I, S>(names: I, cfg: &CanonicalizeConfig) -> IngredientSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| normalize_name(name.as_ref(), cfg))
        .filter(|name| !(cfg.drop_empty && name.is_empty()))
        .collect()
}

/// Normalize a recipe title for near-duplicate comparison (lower-case + trim).
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}
