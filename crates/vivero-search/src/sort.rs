//! Result ordering for the directory listing.
//!
//! String keys compare accent-insensitively so "Álava" files next to
//! "Alava" instead of after "Zaragoza": values are NFD-decomposed,
//! stripped of combining marks, and lowercased before byte comparison.
//! Numeric keys compare directly. Ties keep their input order (stable
//! sort), and descending order reverses the comparator rather than the
//! slice, so ties stay stable in both directions.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};
use vivero_core::ScoredStartup;

/// Dimension the listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Funding,
    Year,
    Location,
    Compatibility,
}

impl SortKey {
    /// Parse a user-supplied key name, tolerating Spanish labels and
    /// casing. Unknown names parse to `None`.
    pub fn from_str_loose(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "name" | "nombre" => Some(Self::Name),
            "funding" | "inversion" | "inversión" => Some(Self::Funding),
            "year" | "año" | "ano" => Some(Self::Year),
            "location" | "region" | "región" => Some(Self::Location),
            "compatibility" | "compatibilidad" => Some(Self::Compatibility),
            _ => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Funding => "funding",
            Self::Year => "year",
            Self::Location => "location",
            Self::Compatibility => "compatibility",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_str_loose(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Sort scored results in place by `key` in `order`.
pub fn sort_scored(results: &mut [ScoredStartup], key: SortKey, order: SortOrder) {
    results.sort_by(|a, b| {
        let cmp = compare(a, b, key);
        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

fn compare(a: &ScoredStartup, b: &ScoredStartup, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => locale_key(&a.startup.name).cmp(&locale_key(&b.startup.name)),
        SortKey::Location => locale_key(&a.startup.region).cmp(&locale_key(&b.startup.region)),
        SortKey::Funding => a
            .startup
            .funding_amount()
            .partial_cmp(&b.startup.funding_amount())
            .unwrap_or(Ordering::Equal),
        SortKey::Year => a
            .startup
            .founding_year_value()
            .cmp(&b.startup.founding_year_value()),
        SortKey::Compatibility => a.compatibility.cmp(&b.compatibility),
    }
}

/// Accent-insensitive, case-insensitive collation key.
fn locale_key(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
