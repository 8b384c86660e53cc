//! Strict record types for the startup directory.
//!
//! A [`StartupRecord`] is produced once, at load time, by the normalization
//! step (see [`crate::normalize`]). Downstream code never branches on source
//! key names or value shapes; everything it needs is a typed accessor here.

use serde::{Deserialize, Serialize};

use crate::funding;

/// One startup in the directory, in its normalized shape.
///
/// Multi-value fields (`technologies`, `impact_types`) keep the sheet's
/// comma-separated convention and are split on demand; numeric-ish fields
/// (`founding_year`, `total_funding`) keep the raw text and are parsed on
/// demand so that malformed source data never fails a load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartupRecord {
    /// Stable identifier; a slug derived from the name when the source
    /// carries none.
    pub id: String,

    /// Display name. Never empty; rows without a name are rejected at
    /// normalization.
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Autonomous community or city the startup operates from.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,

    /// Founding year as written in the source ("2019", "2019 aprox", "").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub founding_year: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vertical: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subvertical: String,

    /// Comma-separated technology tags.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub technologies: String,

    /// Comma-separated impact type labels.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub impact_types: String,

    /// Maturity stage label ("Seed", "Series A", ...).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub funding_stage: String,

    /// Team diversity label ("Female", "Mixed", ...).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub team_diversity: String,

    /// Total funding as written in the source ("€1.200.000", "2.5", "").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub total_funding: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl StartupRecord {
    /// Technologies as discrete trimmed values, order preserved.
    pub fn split_technologies(&self) -> Vec<String> {
        split_multi_value(&self.technologies)
    }

    /// Impact types as discrete trimmed values, order preserved.
    pub fn split_impact_types(&self) -> Vec<String> {
        split_multi_value(&self.impact_types)
    }

    /// Total funding in euros; 0 when absent or unparseable.
    pub fn funding_amount(&self) -> f64 {
        funding::parse_funding_amount(&self.total_funding)
    }

    /// Founding year as a number; 0 when absent or unparseable.
    ///
    /// A zero year fails any year-range filter whose lower bound is
    /// positive, so records with garbled years drop out of range queries
    /// rather than matching everything.
    pub fn founding_year_value(&self) -> i32 {
        parse_leading_year(&self.founding_year)
    }

    /// URL slug for this record: the id when present, otherwise derived
    /// from the name.
    pub fn slug(&self) -> String {
        if self.id.is_empty() {
            derive_slug(&self.name)
        } else {
            self.id.clone()
        }
    }
}

/// Split a comma-separated multi-value field into trimmed segments.
///
/// Empty segments are discarded; order is preserved and duplicates are kept
/// (deduplication is the reader's concern, not the splitter's).
pub fn split_multi_value(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercase slug from a display name: whitespace runs become single dashes.
pub fn derive_slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Parse the leading digit run of a year field; 0 when there is none.
fn parse_leading_year(raw: &str) -> i32 {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// A startup annotated with its compatibility score for the filter state
/// it was evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredStartup {
    pub startup: StartupRecord,
    /// Compatibility score in 0..=100.
    pub compatibility: u8,
}
