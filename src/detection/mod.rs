//! Per-value detectors.
//!
//! Every detector is a total boolean predicate: it never fails and returns `false` for empty
//! input. Detectors that are built from several shape checks expose them as ordered lists of
//! named [`Rule`]s, so rule order is part of the public contract and can be inspected.
//!
//! - [`looks_like_phone`]: all of [`PHONE_RULES`] must hold
//! - [`looks_like_date`]: any of [`DATE_RULES`] may hold (first match wins)
//! - [`CountryMatcher`]: exact, then fuzzy lookup against a country reference list
//! - [`looks_like_company`]: legal suffix, or multi-word text that is not a date or country

pub mod company;
pub mod country;
pub mod date;
pub mod phone;
pub mod similarity;

use std::fmt;

use serde::Serialize;

pub use company::looks_like_company;
pub use country::{match_country, CountryMatcher, DEFAULT_SIMILARITY_CUTOFF};
pub use date::{date_rule_for, is_literal_date, looks_like_date, DATE_RULES};
pub use phone::{looks_like_phone, PHONE_RULES};
pub use similarity::{NormalizedLevenshtein, RatcliffObershelp, StringSimilarity};

/// A named, total shape check over a trimmed value.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Stable rule name, useful for explaining why a value matched.
    pub name: &'static str,
    check: fn(&str) -> bool,
}

impl Rule {
    pub(crate) const fn new(name: &'static str, check: fn(&str) -> bool) -> Self {
        Self { name, check }
    }

    /// Evaluate the rule.
    pub fn holds(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The four value-level detectors a column can be scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Detector {
    Phone,
    Date,
    Country,
    Company,
}

impl Detector {
    /// All detectors in scoring order.
    pub const ALL: [Detector; 4] = [
        Detector::Phone,
        Detector::Date,
        Detector::Country,
        Detector::Company,
    ];

    /// Short name used in logs and events.
    pub fn name(self) -> &'static str {
        match self {
            Detector::Phone => "phone",
            Detector::Date => "date",
            Detector::Country => "country",
            Detector::Company => "company",
        }
    }
}

impl fmt::Display for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
