//! Property tests for the scoring and normalization invariants.
//!
//! - Column scores stay within [0, 1] and are exactly 0.0 for an empty column
//! - Type distributions are non-negative and sum to 1
//! - Normalization is idempotent
//! - Country matching and decomposition are deterministic and total

use proptest::prelude::*;

use column_typer::decompose::{split_company, split_phone};
use column_typer::detection::{looks_like_phone, CountryMatcher};
use column_typer::normalize::normalize_str;
use column_typer::scoring::score_column;
use column_typer::types::SemanticType;
use column_typer::{Classifier, RawValue, ReferenceList};

const COUNTRIES: [&str; 6] = ["United States", "United Kingdom", "Canada", "India", "Germany", "USA"];
const LEGAL: [&str; 5] = ["Pvt. Ltd.", "Inc.", "LLC", "Ltd", "Corp"];

fn classifier() -> Classifier {
    Classifier::from_lists(&COUNTRIES, &LEGAL).unwrap()
}

/// Cells biased toward the shapes the detectors look for, mixed with arbitrary text.
fn cell() -> impl Strategy<Value = RawValue> {
    prop::option::of(prop_oneof![
        "[ -~]{0,24}",
        "\\+?[0-9]{1,3}[ -]?[0-9]{3}[ -]?[0-9]{3,4}",
        "[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}",
        "[A-Z][a-z]{2,8} [A-Z][a-z]{2,8}( (Inc\\.|LLC|Ltd))?",
        prop::sample::select(COUNTRIES.to_vec()).prop_map(str::to_string),
        "\\PC{0,12}",
    ])
}

fn column() -> impl Strategy<Value = Vec<RawValue>> {
    prop::collection::vec(cell(), 0..40)
}

proptest! {
    #[test]
    fn column_score_is_a_fraction(values in column()) {
        let score = score_column(&values, looks_like_phone);
        prop_assert!((0.0..=1.0).contains(&score));
        if values.is_empty() {
            prop_assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn distribution_is_a_probability_distribution(values in column()) {
        let result = classifier().classify(&values);
        let mut total = 0.0;
        for (_, p) in result.distribution.iter() {
            prop_assert!(p >= 0.0);
            total += p;
        }
        prop_assert!((total - 1.0).abs() < 1e-9);

        // The label is the first most probable type in priority order.
        let best = SemanticType::ALL
            .iter()
            .map(|ty| result.distribution.probability(*ty))
            .fold(f64::MIN, f64::max);
        let first = SemanticType::ALL
            .into_iter()
            .find(|ty| result.distribution.probability(*ty) == best);
        prop_assert_eq!(Some(result.label), first);
    }

    #[test]
    fn normalization_is_idempotent(s in "\\PC{0,40}|[ \\t\\n]{0,5}[a-z ]{0,20}[ \\t\\r\\n]{0,5}") {
        let once = normalize_str(&s);
        prop_assert_eq!(normalize_str(&once), once.clone());
        prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
        prop_assert!(!once.contains("  "));
    }

    #[test]
    fn country_matching_is_deterministic(s in "[A-Za-z ]{0,20}") {
        let list = ReferenceList::new(COUNTRIES).unwrap();
        let first = CountryMatcher::new(&list).match_country(&s).map(str::to_owned);
        let again = CountryMatcher::new(&list).match_country(&s).map(str::to_owned);
        prop_assert_eq!(first, again);
    }

    #[test]
    fn phone_split_yields_only_digits(raw in prop::option::of("[ -~]{0,24}")) {
        let split = split_phone(raw.as_deref());
        if let Some(number) = &split.national_number {
            prop_assert!(!number.is_empty());
            prop_assert!(number.chars().all(|c| c.is_ascii_digit()));
        }
        if raw.as_deref().is_none_or(|r| !r.chars().any(|c| c.is_ascii_digit())) {
            prop_assert_eq!(split.country, None);
            prop_assert_eq!(split.national_number, None);
        }
    }

    #[test]
    fn company_split_never_yields_an_empty_base_name(raw in prop::option::of("[ -~]{0,30}")) {
        let legal = ReferenceList::new(LEGAL).unwrap();
        let split = split_company(raw.as_deref(), &legal);
        prop_assert!(split.base_name.as_deref().is_none_or(|b| !b.is_empty()));
        if split.base_name.is_none() && raw.as_deref().is_some_and(|r| !r.trim().is_empty()) {
            prop_assert!(split.legal_suffix.is_some());
        }
    }
}
