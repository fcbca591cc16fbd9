//! Column type classification.

use serde::Serialize;

use crate::decompose::split_company;
use crate::detection::{looks_like_company, looks_like_date, looks_like_phone, CountryMatcher, Detector};
use crate::error::ClassifyResult;
use crate::types::{CompanySplit, RawValue, ReferenceList, SemanticType, TypeDistribution};

use super::column::score_column;

/// Per-detector match fractions for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectorFractions {
    pub phone: f64,
    pub date: f64,
    pub country: f64,
    pub company: f64,
}

impl DetectorFractions {
    /// Fraction for one detector.
    pub fn get(&self, detector: Detector) -> f64 {
        match detector {
            Detector::Phone => self.phone,
            Detector::Date => self.date,
            Detector::Country => self.country,
            Detector::Company => self.company,
        }
    }

    /// Raw, un-normalized scores in [`SemanticType::ALL`] order.
    ///
    /// The `other` score is `max(0, 1 - max(fractions))`.
    pub fn raw_scores(&self) -> [f64; 5] {
        let strongest = self.phone.max(self.date).max(self.country).max(self.company);
        [
            self.phone,
            self.date,
            self.country,
            self.company,
            (1.0 - strongest).max(0.0),
        ]
    }

    /// Returns `true` if no detector matched any value.
    pub fn all_zero(&self) -> bool {
        Detector::ALL.into_iter().all(|d| self.get(d) == 0.0)
    }

    /// Normalized distribution over the five semantic types.
    ///
    /// When no detector matched at all the distribution is uniform, rather than putting the
    /// whole mass on `other`.
    pub fn distribution(&self) -> TypeDistribution {
        if self.all_zero() {
            return TypeDistribution::uniform();
        }
        TypeDistribution::from_raw_scores(self.raw_scores())
    }
}

/// Classification of one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnClassification {
    /// Most probable type.
    pub label: SemanticType,
    /// Probability of every type.
    pub distribution: TypeDistribution,
    /// Detector fractions the distribution was derived from.
    pub fractions: DetectorFractions,
}

/// Detectors bound to one pair of reference lists.
///
/// Build one per run; it holds no mutable state and may be shared across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    countries: CountryMatcher,
    legal_suffixes: ReferenceList,
}

impl Classifier {
    /// Create a classifier from validated reference lists.
    pub fn new(countries: &ReferenceList, legal_suffixes: ReferenceList) -> Self {
        Self::with_country_matcher(CountryMatcher::new(countries), legal_suffixes)
    }

    /// Create a classifier with a preconfigured country matcher.
    pub fn with_country_matcher(countries: CountryMatcher, legal_suffixes: ReferenceList) -> Self {
        Self {
            countries,
            legal_suffixes,
        }
    }

    /// Create a classifier from raw string lists.
    ///
    /// Returns [`crate::ClassifyError::InvalidArgument`] if either list has an empty or
    /// whitespace-only entry.
    pub fn from_lists<C, L>(countries: &[C], legal_suffixes: &[L]) -> ClassifyResult<Self>
    where
        C: AsRef<str>,
        L: AsRef<str>,
    {
        let countries = ReferenceList::new(countries.iter().map(|c| c.as_ref()))?;
        let legal_suffixes = ReferenceList::new(legal_suffixes.iter().map(|l| l.as_ref()))?;
        Ok(Self::new(&countries, legal_suffixes))
    }

    /// The country matcher in use.
    pub fn country_matcher(&self) -> &CountryMatcher {
        &self.countries
    }

    /// The legal-suffix list in use.
    pub fn legal_suffixes(&self) -> &ReferenceList {
        &self.legal_suffixes
    }

    /// Evaluate one detector on one value.
    pub fn detect(&self, detector: Detector, value: &str) -> bool {
        match detector {
            Detector::Phone => looks_like_phone(value),
            Detector::Date => looks_like_date(value),
            Detector::Country => self.countries.is_country(value),
            Detector::Company => looks_like_company(value, &self.countries, &self.legal_suffixes),
        }
    }

    /// Fraction of `values` matching `detector`.
    pub fn score(&self, values: &[RawValue], detector: Detector) -> f64 {
        score_column(values, |v| self.detect(detector, v))
    }

    /// All four detector fractions for a column.
    pub fn fractions(&self, values: &[RawValue]) -> DetectorFractions {
        DetectorFractions {
            phone: self.score(values, Detector::Phone),
            date: self.score(values, Detector::Date),
            country: self.score(values, Detector::Country),
            company: self.score(values, Detector::Company),
        }
    }

    /// Classify a column of raw values.
    pub fn classify(&self, values: &[RawValue]) -> ColumnClassification {
        let fractions = self.fractions(values);
        let distribution = fractions.distribution();
        ColumnClassification {
            label: distribution.top(),
            distribution,
            fractions,
        }
    }

    /// Split a company value using this classifier's legal suffixes.
    pub fn split_company(&self, raw: Option<&str>) -> CompanySplit {
        split_company(raw, &self.legal_suffixes)
    }
}

/// Classify one column against raw reference lists.
///
/// Returns [`crate::ClassifyError::InvalidArgument`] if a reference list is malformed.
pub fn classify_column<C, L>(
    values: &[RawValue],
    countries: &[C],
    legal_suffixes: &[L],
) -> ClassifyResult<ColumnClassification>
where
    C: AsRef<str>,
    L: AsRef<str>,
{
    Ok(Classifier::from_lists(countries, legal_suffixes)?.classify(values))
}
