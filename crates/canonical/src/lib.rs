//! Ingredient name normalization.
//!
//! Turns the raw strings users type ("  Chicken Breast", "GARLIC ") and the
//! names recipes declare into matching keys. Every downstream stage (semantic
//! expansion, match scoring, duplicate detection) compares these keys, never
//! the raw input.
//!
//! ## What we do
//!
//! - Lower-casing and trimming (on by default)
//! - Optional Unicode NFKC normalization
//! - Optional interior whitespace collapsing
//! - Deduplication into an ordered [`IngredientSet`]
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same input and config, same
//! output.

mod config;
mod error;
mod normalize;
mod whitespace;

pub use crate::config::CanonicalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::normalize::{normalize_name, normalize_names, normalize_title, IngredientSet};
pub use crate::whitespace::collapse_whitespace;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_pantry_round_trip() {
        let cfg = CanonicalizeConfig::default();
        let pantry = normalize_names(
            ["Chicken", "  garlic", "GARLIC", "Olive Oil ", "\t"],
            &cfg,
        );
        let expected: Vec<&str> = vec!["chicken", "garlic", "olive oil"];
        assert_eq!(pantry.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }
}
