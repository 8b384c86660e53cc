//! Distinct facet values and dataset summary statistics.
//!
//! Filter controls are populated from the dataset itself rather than a
//! hardcoded vocabulary: each helper walks the records once and returns
//! the distinct non-empty values of one dimension in code-point order.
//! Multi-value fields (technologies, impact types) are split before
//! deduplication, so each individual tag becomes a facet value.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::defaults::STATS_YEAR_FLOOR;
use crate::model::StartupRecord;

/// Distinct non-empty verticals, sorted.
pub fn all_verticals(records: &[StartupRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.vertical.clone()))
}

/// Distinct non-empty regions, sorted.
pub fn all_locations(records: &[StartupRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.region.clone()))
}

/// Distinct individual technology tags, sorted.
pub fn all_technologies(records: &[StartupRecord]) -> Vec<String> {
    distinct(records.iter().flat_map(|r| r.split_technologies()))
}

/// Distinct non-empty maturity stages, sorted.
pub fn all_funding_stages(records: &[StartupRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.funding_stage.clone()))
}

/// Distinct individual impact-type tags, sorted.
pub fn all_impact_types(records: &[StartupRecord]) -> Vec<String> {
    distinct(records.iter().flat_map(|r| r.split_impact_types()))
}

/// Distinct non-empty team-diversity labels, sorted.
pub fn all_team_diversity(records: &[StartupRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.team_diversity.clone()))
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let set: BTreeSet<String> = values.filter(|v| !v.is_empty()).collect();
    set.into_iter().collect()
}

/// Aggregate facet summary for a dataset.
///
/// `year_min` is floored at 2010 and `year_max` raised to the current
/// year, so the founding-year slider always spans a sensible window even
/// for tiny or year-less datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetSummary {
    pub total: usize,
    pub verticals: Vec<String>,
    pub regions: Vec<String>,
    pub technologies: Vec<String>,
    pub year_min: i32,
    pub year_max: i32,
}

impl FacetSummary {
    /// Collect the summary over `records`. `current_year` anchors the
    /// upper slider bound; callers pass it in so the summary stays
    /// deterministic under test.
    pub fn collect(records: &[StartupRecord], current_year: i32) -> Self {
        let years: Vec<i32> = records
            .iter()
            .map(|r| r.founding_year_value())
            .filter(|y| *y > 0)
            .collect();

        let year_min = years
            .iter()
            .copied()
            .chain(std::iter::once(STATS_YEAR_FLOOR))
            .min()
            .unwrap_or(STATS_YEAR_FLOOR);
        let year_max = years
            .iter()
            .copied()
            .chain(std::iter::once(current_year))
            .max()
            .unwrap_or(current_year);

        let summary = Self {
            total: records.len(),
            verticals: all_verticals(records),
            regions: all_locations(records),
            technologies: all_technologies(records),
            year_min,
            year_max,
        };

        debug!(
            total = summary.total,
            verticals = summary.verticals.len(),
            regions = summary.regions.len(),
            technologies = summary.technologies.len(),
            "Facet summary collected"
        );

        summary
    }
}
