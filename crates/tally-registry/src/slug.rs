//! Slug naming rules and near-duplicate detection.
//!
//! The catalog this registry serves is populated by independently authored
//! registration files, and the observed identifier space contains
//! near-collisions: the same calculation registered under `roi_calculator`
//! and `roi-calculator`, or under a literal file path. Slug validation
//! rejects malformed identifiers outright at registration time; folding
//! exists only so near-duplicates can be flagged for manual review, never
//! for dispatch.

use crate::error::RegistryError;
use std::collections::BTreeMap;

/// Checks that `slug` meets the naming rules: non-empty, lowercase ASCII
/// alphanumerics and hyphens only, no leading/trailing/doubled hyphen.
pub fn validate(slug: &str) -> Result<(), RegistryError> {
    let invalid = |reason: &str| RegistryError::InvalidSlug {
        slug: slug.to_string(),
        reason: reason.to_string(),
    };

    if slug.is_empty() {
        return Err(invalid("slug must not be empty"));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(invalid("slug must not start or end with a hyphen"));
    }
    if slug.contains("--") {
        return Err(invalid("slug must not contain consecutive hyphens"));
    }
    for c in slug.chars() {
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            return Err(invalid(
                "slug may only contain lowercase ASCII letters, digits and hyphens",
            ));
        }
    }
    Ok(())
}

/// Folds a slug to its comparison form: lowercased, with every separator
/// (hyphen, underscore, dot, slash, space) removed.
///
/// Two distinct slugs with the same folded form almost certainly name the
/// same calculation.
pub fn fold(slug: &str) -> String {
    slug.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Groups slugs that collide after folding. Each returned group holds two
/// or more distinct slugs, sorted; groups are ordered by folded key.
pub fn near_duplicates<'a, I>(slugs: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut by_folded: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for slug in slugs {
        by_folded.entry(fold(slug)).or_default().push(slug.to_string());
    }
    by_folded
        .into_values()
        .filter(|group| group.len() > 1)
        .map(|mut group| {
            group.sort();
            group
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_slugs() {
        validate("roi-calculator").unwrap();
        validate("401k-rollover").unwrap();
        validate("bmi").unwrap();
    }

    #[test]
    fn rejects_malformed_slugs() {
        assert!(validate("").is_err());
        assert!(validate("ROI-Calculator").is_err());
        assert!(validate("roi_calculator").is_err());
        assert!(validate("src/calculators/roi").is_err());
        assert!(validate("-roi").is_err());
        assert!(validate("roi--calculator").is_err());
    }

    #[test]
    fn folding_erases_case_and_separators() {
        assert_eq!(fold("ROI_Calculator"), "roicalculator");
        assert_eq!(fold("roi--calculator"), "roicalculator");
        assert_eq!(fold("finance/roi.calculator"), "financeroicalculator");
        assert_eq!(fold("break-even"), "breakeven");
    }

    #[test]
    fn near_duplicates_are_grouped_and_sorted() {
        let groups = near_duplicates(["tco-calculator", "roi_calculator", "roi-calculator"]);
        assert_eq!(groups, vec![vec![
            "roi-calculator".to_string(),
            "roi_calculator".to_string()
        ]]);
    }

    #[test]
    fn distinct_slugs_produce_no_groups() {
        assert!(near_duplicates(["roi-calculator", "tco-calculator"]).is_empty());
    }
}
