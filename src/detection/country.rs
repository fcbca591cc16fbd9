//! Country name matching against a reference list.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::normalize::normalize_str;
use crate::types::ReferenceList;

use super::similarity::{RatcliffObershelp, StringSimilarity};

/// Minimum similarity ratio for a fuzzy country match.
pub const DEFAULT_SIMILARITY_CUTOFF: f64 = 0.85;

/// Exact and fuzzy lookup of country names.
///
/// Lookup is case-insensitive. An exact hit on a lowercased, normalized name wins outright;
/// otherwise the most similar reference entry is returned if it reaches the cutoff. Among
/// equally similar entries, the one listed first in the reference list wins.
#[derive(Clone)]
pub struct CountryMatcher {
    /// lowercased name -> canonical spelling (first occurrence wins)
    canonical: HashMap<String, String>,
    /// distinct lowercased names in reference-list order
    keys: Vec<String>,
    similarity: Arc<dyn StringSimilarity>,
    cutoff: f64,
}

impl CountryMatcher {
    /// Build a matcher using Ratcliff/Obershelp similarity and [`DEFAULT_SIMILARITY_CUTOFF`].
    pub fn new(countries: &ReferenceList) -> Self {
        let mut canonical = HashMap::with_capacity(countries.len());
        let mut keys = Vec::with_capacity(countries.len());
        for country in countries.iter() {
            let key = normalize_str(country).to_lowercase();
            if !canonical.contains_key(&key) {
                canonical.insert(key.clone(), country.to_owned());
                keys.push(key);
            }
        }
        Self {
            canonical,
            keys,
            similarity: Arc::new(RatcliffObershelp),
            cutoff: DEFAULT_SIMILARITY_CUTOFF,
        }
    }

    /// Replace the similarity measure used for fuzzy matching.
    pub fn with_similarity(mut self, similarity: impl StringSimilarity + 'static) -> Self {
        self.similarity = Arc::new(similarity);
        self
    }

    /// Replace the fuzzy-match cutoff.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// The fuzzy-match cutoff in use.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Number of distinct (case-insensitive) country names.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the matcher has no countries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Canonical country name for `value`, if it matches exactly or fuzzily.
    pub fn match_country(&self, value: &str) -> Option<&str> {
        let needle = normalize_str(value).to_lowercase();
        if needle.is_empty() {
            return None;
        }
        if let Some(hit) = self.canonical.get(&needle) {
            return Some(hit.as_str());
        }

        let mut best: Option<(&str, f64)> = None;
        for key in &self.keys {
            let score = self.similarity.similarity(&needle, key);
            if score >= self.cutoff && best.is_none_or(|(_, s)| score > s) {
                best = Some((key.as_str(), score));
            }
        }
        best.and_then(|(key, _)| self.canonical.get(key))
            .map(String::as_str)
    }

    /// Returns `true` if `value` matches a country.
    pub fn is_country(&self, value: &str) -> bool {
        self.match_country(value).is_some()
    }
}

impl fmt::Debug for CountryMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountryMatcher")
            .field("countries", &self.keys.len())
            .field("cutoff", &self.cutoff)
            .finish()
    }
}

/// One-shot country match. Prefer building a [`CountryMatcher`] once for repeated lookups.
pub fn match_country(value: &str, countries: &ReferenceList) -> Option<String> {
    CountryMatcher::new(countries)
        .match_country(value)
        .map(str::to_owned)
}
